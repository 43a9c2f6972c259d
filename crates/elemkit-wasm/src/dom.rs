//! DOM bindings: element geometry and property helpers.
//!
//! The geometry functions accept either a DOM element or a plain `{x, y}`
//! object. Elements are resolved through their offset-parent chain and
//! `getBoundingClientRect()`, plain objects through their coordinates.
//!
//! # Functions
//!
//! - [`get_element_position`] - Page position from the offset-parent chain
//! - [`get_element_bounding_rect`] - Page-absolute bounds (scroll applied)
//! - [`to_dom_position`] - Page coordinates to element-local coordinates
//! - [`css`], [`attr`], [`set_class`] - Style, attribute and class setters

use elemkit_core::geometry::{Point, Rect};
use elemkit_core::node::{
    element_bounding_rect, element_position, LogicalPoint, PageScroll, RenderedNode, VisualNode,
};
use elemkit_core::units::format_number;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A DOM element seen as a rendered node.
///
/// Non-HTML elements (SVG) have no offset chain but can still be measured.
struct DomNode(Element);

impl DomNode {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl RenderedNode for DomNode {
    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |el| el.offset_top() as f64)
    }

    fn offset_left(&self) -> f64 {
        self.html().map_or(0.0, |el| el.offset_left() as f64)
    }

    fn offset_parent(&self) -> Option<Self> {
        self.html()?.offset_parent().map(DomNode)
    }

    fn bounding_client_rect(&self) -> Option<Rect> {
        let r = self.0.get_bounding_client_rect();
        Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
    }

    fn client_width(&self) -> f64 {
        self.0.client_width() as f64
    }

    fn client_height(&self) -> f64 {
        self.0.client_height() as f64
    }
}

/// Scroll offsets of the live document.
struct DocumentScroll {
    document: Option<Document>,
}

impl DocumentScroll {
    fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

fn scroll_of(el: Option<&Element>) -> Point {
    el.map_or_else(Point::default, |el| {
        Point::new(el.scroll_left() as f64, el.scroll_top() as f64)
    })
}

impl PageScroll for DocumentScroll {
    fn document_scroll(&self) -> Point {
        let root = self.document.as_ref().and_then(Document::document_element);
        scroll_of(root.as_ref())
    }

    fn body_scroll(&self) -> Point {
        let body = self.document.as_ref().and_then(Document::body);
        scroll_of(body.as_deref())
    }
}

fn number_field(value: &JsValue, name: &str) -> Option<f64> {
    Reflect::get(value, &JsValue::from_str(name)).ok()?.as_f64()
}

/// Classify a JS value once: element, logical point, or nothing.
fn node_from_js(value: &JsValue) -> Option<VisualNode<DomNode>> {
    if value.is_falsy() {
        return None;
    }
    if let Some(el) = value.dyn_ref::<Element>() {
        return Some(VisualNode::Rendered(DomNode(el.clone())));
    }
    Some(VisualNode::Logical(LogicalPoint::new(
        number_field(value, "x"),
        number_field(value, "y"),
    )))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Page position of an element or `{x, y}` object, as `{x, y}`.
///
/// `null` / `undefined` resolve to `{x: 0, y: 0}`.
#[wasm_bindgen(js_name = getElementPosition)]
pub fn get_element_position(el: JsValue) -> Result<JsValue, JsValue> {
    let node = node_from_js(&el);
    to_js(&element_position(node.as_ref()))
}

/// Page-absolute bounds of an element, as `{x, y, width, height}`.
#[wasm_bindgen(js_name = getElementBoundingRect)]
pub fn get_element_bounding_rect(el: JsValue) -> Result<JsValue, JsValue> {
    let rect = match node_from_js(&el) {
        Some(node) => element_bounding_rect(&node, &DocumentScroll::current()),
        None => Rect::default(),
    };
    to_js(&rect)
}

/// Convert a page position `{x, y}` into coordinates local to `dom`.
///
/// # Errors
///
/// Returns an error if `pos` is not an `{x, y}` object.
#[wasm_bindgen(js_name = toDomPosition)]
pub fn to_dom_position(pos: JsValue, dom: JsValue) -> Result<JsValue, JsValue> {
    let pos: Point = serde_wasm_bindgen::from_value(pos)
        .map_err(|e| JsValue::from_str(&format!("Invalid position: {}", e)))?;
    let local = match node_from_js(&dom) {
        Some(node) => elemkit_core::node::to_dom_position(pos, &node, &DocumentScroll::current()),
        None => pos,
    };
    to_js(&local)
}

/// Set one style property, or every own property of an object.
///
/// Property names are style object keys (`backgroundColor`), as with
/// `el.style[name] = value`. An empty name does nothing.
#[wasm_bindgen]
pub fn css(dom: &HtmlElement, name: JsValue, value: JsValue) -> Result<(), JsValue> {
    if name.is_falsy() {
        return Ok(());
    }
    let style = dom.style();

    if name.is_string() {
        Reflect::set(&style, &name, &value)?;
        return Ok(());
    }
    if let Some(props) = name.dyn_ref::<Object>() {
        for key in Object::get_own_property_names(props).iter() {
            let prop = Reflect::get(props, &key)?;
            Reflect::set(&style, &key, &prop)?;
        }
    }
    Ok(())
}

/// String form of a JS value, as `value + ''` would produce.
fn stringify(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(n) = value.as_f64() {
        return format_number(n);
    }
    if let Some(b) = value.as_bool() {
        return b.to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    value.unchecked_ref::<Object>().to_string().into()
}

/// Set an attribute when `value` is given (and return it), otherwise read it.
///
/// Reading a missing attribute returns `null`.
#[wasm_bindgen]
pub fn attr(dom: &Element, name: &str, value: JsValue) -> Result<JsValue, JsValue> {
    if value.is_undefined() {
        return Ok(dom
            .get_attribute(name)
            .map_or(JsValue::NULL, |v| JsValue::from_str(&v)));
    }
    dom.set_attribute(name, &stringify(&value))?;
    Ok(value)
}

/// Add a class (if absent) or remove it; `name` may be an array of names.
///
/// Exported as `setClass` since `class` is reserved in JavaScript.
#[wasm_bindgen(js_name = setClass)]
pub fn set_class(dom: &Element, name: JsValue, remove: Option<bool>) -> Result<(), JsValue> {
    let names: Vec<String> = if Array::is_array(&name) {
        name.unchecked_ref::<Array>()
            .iter()
            .filter_map(|n| n.as_string())
            .collect()
    } else {
        name.as_string().into_iter().collect()
    };

    let list = dom.class_list();
    for class in &names {
        if remove.unwrap_or(false) {
            list.remove_1(class)?;
        } else if !list.contains(class) {
            list.add_1(class)?;
        }
    }
    Ok(())
}

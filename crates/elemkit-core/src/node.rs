//! Page position and bounds of visual nodes.
//!
//! A node is either a rendered element, reached through [`RenderedNode`], or
//! a synthetic [`LogicalPoint`] that only carries coordinates. The page
//! scroll comes from a [`PageScroll`] implementation so the resolution logic
//! stays independent of any DOM binding.
//!
//! # Coordinate Frames
//!
//! - Offsets (`offset_top` / `offset_left`) are relative to the offset parent
//! - Client rects are relative to the viewport (they move with scrolling)
//! - Everything returned here is page-absolute

use serde::{Deserialize, Serialize};

use crate::geometry::{is_truthy, Point, Rect};

/// A rendered element with an offset-parent chain.
pub trait RenderedNode: Sized {
    /// Distance from the offset parent's top edge.
    fn offset_top(&self) -> f64;

    /// Distance from the offset parent's left edge.
    fn offset_left(&self) -> f64;

    /// The nearest positioned ancestor, if any.
    fn offset_parent(&self) -> Option<Self>;

    /// Viewport-relative bounds, when the node can be measured natively.
    fn bounding_client_rect(&self) -> Option<Rect> {
        None
    }

    fn client_width(&self) -> f64;

    fn client_height(&self) -> f64;
}

/// A synthetic node with a logical position and no layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalPoint {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl LogicalPoint {
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Position contributed by this node.
    ///
    /// Only one axis is used: `x` when it is truthy, otherwise `y` when it
    /// is truthy. A point with both set contributes its `x` alone.
    pub fn position(&self) -> Point {
        if let Some(x) = self.x.filter(|&v| is_truthy(v)) {
            Point::new(x, 0.0)
        } else if let Some(y) = self.y.filter(|&v| is_truthy(v)) {
            Point::new(0.0, y)
        } else {
            Point::default()
        }
    }
}

/// Either a rendered element or a logical point.
#[derive(Debug, Clone)]
pub enum VisualNode<N> {
    Rendered(N),
    Logical(LogicalPoint),
}

/// Source of the current page scroll offsets.
pub trait PageScroll {
    /// Scroll offsets of the document root element.
    fn document_scroll(&self) -> Point;

    /// Scroll offsets of the body element.
    fn body_scroll(&self) -> Point;

    /// Effective page scroll: the root value per axis, or the body value
    /// when the root reports zero.
    fn page_offset(&self) -> Point {
        let root = self.document_scroll();
        let body = self.body_scroll();
        Point {
            x: if is_truthy(root.x) { root.x } else { body.x },
            y: if is_truthy(root.y) { root.y } else { body.y },
        }
    }
}

/// Fixed scroll offsets, for callers without a live document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticScroll {
    pub document: Point,
    pub body: Point,
}

impl StaticScroll {
    /// No scrolling at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Root element scrolled by `offset`.
    pub fn document(offset: Point) -> Self {
        Self {
            document: offset,
            body: Point::default(),
        }
    }
}

impl PageScroll for StaticScroll {
    fn document_scroll(&self) -> Point {
        self.document
    }

    fn body_scroll(&self) -> Point {
        self.body
    }
}

/// Page-absolute position of a node.
///
/// Rendered nodes accumulate their offsets up the offset-parent chain; the
/// root-most node of the chain contributes nothing, and a node without an
/// offset parent resolves to the origin. A missing node resolves to the
/// origin as well.
pub fn element_position<N: RenderedNode>(node: Option<&VisualNode<N>>) -> Point {
    match node {
        None => Point::default(),
        Some(VisualNode::Rendered(node)) => accumulate_offsets(node),
        Some(VisualNode::Logical(point)) => point.position(),
    }
}

fn accumulate_offsets<N: RenderedNode>(node: &N) -> Point {
    let mut pos = Point::default();
    let mut offsets = (node.offset_left(), node.offset_top());
    let mut next = node.offset_parent();

    while let Some(parent) = next {
        pos.x += offsets.0;
        pos.y += offsets.1;
        offsets = (parent.offset_left(), parent.offset_top());
        next = parent.offset_parent();
    }
    pos
}

/// Page-absolute bounding rectangle of a node.
///
/// Measured client rects are shifted by the page scroll. Nodes that cannot
/// be measured use [`element_position`] and their client size; logical
/// points have no size.
pub fn element_bounding_rect<N: RenderedNode>(node: &VisualNode<N>, scroll: &impl PageScroll) -> Rect {
    match node {
        VisualNode::Rendered(element) => match element.bounding_client_rect() {
            Some(rect) => rect.translated(scroll.page_offset()),
            None => {
                let pos = accumulate_offsets(element);
                Rect::new(pos.x, pos.y, element.client_width(), element.client_height())
            }
        },
        VisualNode::Logical(point) => {
            let pos = point.position();
            Rect::new(pos.x, pos.y, 0.0, 0.0)
        }
    }
}

/// Convert a page-absolute position into coordinates local to `node`.
pub fn to_dom_position<N: RenderedNode>(
    page_pos: Point,
    node: &VisualNode<N>,
    scroll: &impl PageScroll,
) -> Point {
    page_pos.offset_from(element_bounding_rect(node, scroll).origin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// In-memory element with an optional parent link.
    #[derive(Debug, Clone)]
    struct TestNode(Rc<TestNodeData>);

    #[derive(Debug)]
    struct TestNodeData {
        top: f64,
        left: f64,
        parent: Option<TestNode>,
        client_rect: Option<Rect>,
        width: f64,
        height: f64,
    }

    impl TestNode {
        fn new(left: f64, top: f64, parent: Option<&TestNode>) -> Self {
            TestNode(Rc::new(TestNodeData {
                top,
                left,
                parent: parent.cloned(),
                client_rect: None,
                width: 40.0,
                height: 20.0,
            }))
        }

        fn measured(rect: Rect) -> Self {
            TestNode(Rc::new(TestNodeData {
                top: 0.0,
                left: 0.0,
                parent: None,
                client_rect: Some(rect),
                width: rect.width,
                height: rect.height,
            }))
        }
    }

    impl RenderedNode for TestNode {
        fn offset_top(&self) -> f64 {
            self.0.top
        }

        fn offset_left(&self) -> f64 {
            self.0.left
        }

        fn offset_parent(&self) -> Option<Self> {
            self.0.parent.clone()
        }

        fn bounding_client_rect(&self) -> Option<Rect> {
            self.0.client_rect
        }

        fn client_width(&self) -> f64 {
            self.0.width
        }

        fn client_height(&self) -> f64 {
            self.0.height
        }
    }

    /// body (root) > section (10, 100) > div (5, 7)
    fn chain() -> TestNode {
        let body = TestNode::new(1000.0, 1000.0, None);
        let section = TestNode::new(10.0, 100.0, Some(&body));
        TestNode::new(5.0, 7.0, Some(&section))
    }

    #[test]
    fn test_missing_node_is_origin() {
        assert_eq!(element_position::<TestNode>(None), Point::default());
    }

    #[test]
    fn test_offset_chain_accumulates() {
        let node = VisualNode::Rendered(chain());
        // Root-most offsets are never added
        assert_eq!(element_position(Some(&node)), Point::new(15.0, 107.0));
    }

    #[test]
    fn test_node_without_offset_parent_is_origin() {
        let node = VisualNode::Rendered(TestNode::new(50.0, 60.0, None));
        assert_eq!(element_position(Some(&node)), Point::default());
    }

    #[test]
    fn test_logical_point_uses_x_first() {
        let both = VisualNode::<TestNode>::Logical(LogicalPoint::new(Some(3.0), Some(4.0)));
        assert_eq!(element_position(Some(&both)), Point::new(3.0, 0.0));

        let y_only = VisualNode::<TestNode>::Logical(LogicalPoint::new(None, Some(4.0)));
        assert_eq!(element_position(Some(&y_only)), Point::new(0.0, 4.0));

        let zero_x = VisualNode::<TestNode>::Logical(LogicalPoint::new(Some(0.0), Some(4.0)));
        assert_eq!(element_position(Some(&zero_x)), Point::new(0.0, 4.0));

        let empty = VisualNode::<TestNode>::Logical(LogicalPoint::default());
        assert_eq!(element_position(Some(&empty)), Point::default());
    }

    #[test]
    fn test_page_offset_falls_back_to_body() {
        let scroll = StaticScroll {
            document: Point::new(0.0, 30.0),
            body: Point::new(12.0, 99.0),
        };
        assert_eq!(scroll.page_offset(), Point::new(12.0, 30.0));
        assert_eq!(StaticScroll::none().page_offset(), Point::default());
    }

    #[test]
    fn test_measured_rect_adds_scroll() {
        let node = VisualNode::Rendered(TestNode::measured(Rect::new(10.0, 20.0, 100.0, 50.0)));
        let scroll = StaticScroll::document(Point::new(5.0, 200.0));
        assert_eq!(
            element_bounding_rect(&node, &scroll),
            Rect::new(15.0, 220.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_unmeasured_rect_uses_offsets_and_client_size() {
        let node = VisualNode::Rendered(chain());
        let scroll = StaticScroll::document(Point::new(5.0, 200.0));
        // Scroll is not applied to offset-derived positions
        assert_eq!(
            element_bounding_rect(&node, &scroll),
            Rect::new(15.0, 107.0, 40.0, 20.0)
        );
    }

    #[test]
    fn test_logical_rect_has_no_size() {
        let node = VisualNode::<TestNode>::Logical(LogicalPoint::new(Some(8.0), None));
        assert_eq!(
            element_bounding_rect(&node, &StaticScroll::none()),
            Rect::new(8.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_to_dom_position() {
        let node = VisualNode::Rendered(TestNode::measured(Rect::new(10.0, 20.0, 100.0, 50.0)));
        let scroll = StaticScroll::document(Point::new(0.0, 100.0));
        let local = to_dom_position(Point::new(30.0, 150.0), &node, &scroll);
        assert_eq!(local, Point::new(20.0, 30.0));
    }
}

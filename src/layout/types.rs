use crate::tree::{EdgeKind, NodeId};
use ahash::AHashMap;

/// A point in canvas coordinates. Node positions refer to shape centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One routed connector between a parent and a child node.
///
/// `points` is a polyline anchored at the two shape boundaries: two points
/// for a straight vertical run, four for an orthogonal elbow through the
/// vertical midpoint. `label_anchor` is set for `yes`/`no` edges only and
/// marks where the consuming renderer should place the branch label.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub points: Vec<Point>,
    pub label_anchor: Option<Point>,
}

/// The computed layout of one resolved tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    /// Center position of every node.
    pub positions: AHashMap<NodeId, Point>,
    pub edges: Vec<EdgePath>,
    pub width: f32,
    pub height: f32,
}

impl TreeLayout {
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }
}

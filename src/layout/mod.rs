use crate::tree::{EdgeKind, NodeId, ResolvedTree, TreeEdge, TreeNode};
use ahash::AHashMap;

mod config;
mod types;

pub use config::LayoutConfig;
pub use types::{EdgePath, Point, TreeLayout};

/// Computes deterministic 2D positions and routed connectors for a resolved
/// tree.
///
/// The algorithm is a two-pass recursion: a bottom-up subtree-width pass,
/// then a top-down placement pass that splits the available horizontal span
/// between siblings proportionally to their subtree widths, so sibling
/// subtrees never overlap. Output depends only on the tree shape and the
/// configured constants.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, tree: &ResolvedTree) -> TreeLayout {
        let widths = self.measure(tree);
        let width = widths[tree.root().index()].max(self.config.min_canvas_width);

        let mut positions = AHashMap::with_capacity(tree.len());
        self.place(
            tree,
            &widths,
            tree.root(),
            0.0,
            self.config.start_y,
            width,
            &mut positions,
        );

        let deepest = positions.values().map(|p| p.y).fold(0.0, f32::max);
        let height = deepest + self.config.bottom_margin;

        let edges = tree
            .edges()
            .map(|edge| self.connector(tree, &positions, edge))
            .collect();

        TreeLayout {
            positions,
            edges,
            width,
            height,
        }
    }

    /// Pass 1: memoized subtree widths, indexed by arena slot.
    fn measure(&self, tree: &ResolvedTree) -> Vec<f32> {
        let mut widths = vec![0.0; tree.len()];
        self.subtree_width(tree, tree.root(), &mut widths);
        widths
    }

    fn subtree_width(&self, tree: &ResolvedTree, id: NodeId, widths: &mut [f32]) -> f32 {
        let node = tree.node(id);
        let width = if node.is_leaf() {
            self.config.min_spacing
        } else {
            let left = node
                .left
                .map(|child| self.subtree_width(tree, child, widths))
                .unwrap_or(0.0);
            let right = node
                .right
                .map(|child| self.subtree_width(tree, child, widths))
                .unwrap_or(0.0);
            left + right + self.config.min_spacing
        };
        widths[id.index()] = width;
        width
    }

    /// Pass 2: place `id` within the horizontal span `[x, x + available)`.
    ///
    /// A leaf centers itself in the span. A node with two children splits the
    /// span proportionally to the children's subtree widths and sits at the
    /// midpoint of their resulting positions; a node with one child hands the
    /// whole span down and inherits the child's x.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        tree: &ResolvedTree,
        widths: &[f32],
        id: NodeId,
        x: f32,
        y: f32,
        available: f32,
        positions: &mut AHashMap<NodeId, Point>,
    ) {
        let node = tree.node(id);
        let child_y = y + self.config.level_height;

        match (node.left, node.right) {
            (None, None) => {
                positions.insert(
                    id,
                    Point {
                        x: x + available / 2.0,
                        y,
                    },
                );
            }
            (Some(left), Some(right)) => {
                let left_width = widths[left.index()];
                let right_width = widths[right.index()];
                let total = left_width + right_width;
                let left_span = if total > 0.0 {
                    available * left_width / total
                } else {
                    available / 2.0
                };

                self.place(tree, widths, left, x, child_y, left_span, positions);
                self.place(
                    tree,
                    widths,
                    right,
                    x + left_span,
                    child_y,
                    available - left_span,
                    positions,
                );

                let center = (positions[&left].x + positions[&right].x) / 2.0;
                positions.insert(id, Point { x: center, y });
            }
            (Some(only), None) | (None, Some(only)) => {
                self.place(tree, widths, only, x, child_y, available, positions);
                let x = positions[&only].x;
                positions.insert(id, Point { x, y });
            }
        }
    }

    /// Routes one connector between shape boundaries: a straight vertical
    /// segment when the endpoints are horizontally aligned, otherwise an
    /// orthogonal elbow through the vertical midpoint.
    fn connector(
        &self,
        tree: &ResolvedTree,
        positions: &AHashMap<NodeId, Point>,
        edge: TreeEdge,
    ) -> EdgePath {
        let from_center = positions[&edge.from];
        let to_center = positions[&edge.to];

        let start = Point {
            x: from_center.x,
            y: from_center.y + self.half_height(tree.node(edge.from)),
        };
        let end = Point {
            x: to_center.x,
            y: to_center.y - self.half_height(tree.node(edge.to)),
        };

        let points = if (start.x - end.x).abs() < self.config.straight_edge_epsilon {
            vec![start, end]
        } else {
            let mid_y = (start.y + end.y) / 2.0;
            vec![
                start,
                Point { x: start.x, y: mid_y },
                Point { x: end.x, y: mid_y },
                end,
            ]
        };

        EdgePath {
            from: edge.from,
            to: edge.to,
            kind: edge.kind,
            points,
            label_anchor: self.label_anchor(edge.kind, from_center, to_center),
        }
    }

    fn half_height(&self, node: &TreeNode) -> f32 {
        self.config.node_extent(&node.kind).1 / 2.0
    }

    /// Where the renderer should put a branch label: YES hugs the source
    /// node, NO hugs the target node, both at the vertical midpoint between
    /// the node centers.
    fn label_anchor(&self, kind: EdgeKind, from: Point, to: Point) -> Option<Point> {
        let mid_y = (from.y + to.y) / 2.0;
        let offset = self.config.label_offset;
        match kind {
            EdgeKind::Yes => Some(Point {
                x: if from.x < to.x {
                    from.x + offset
                } else {
                    from.x - offset
                },
                y: mid_y,
            }),
            EdgeKind::No => Some(Point {
                x: if from.x < to.x {
                    to.x - offset
                } else {
                    to.x + offset
                },
                y: mid_y,
            }),
            EdgeKind::Normal => None,
        }
    }
}

/// Lays out a resolved tree with the default geometry.
pub fn layout(tree: &ResolvedTree) -> TreeLayout {
    LayoutEngine::new().layout(tree)
}

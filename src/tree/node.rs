use crate::model::StepId;
use std::fmt;

/// Index of a node within one [`ResolvedTree`]. Ids are assigned in preorder
/// during resolution and are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The four node kinds of a resolved navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic root. Its single child is the first step by step number, or
    /// an `End` node when the process has no steps.
    Start,
    /// A regular step; always has exactly one child.
    Step { step_id: StepId },
    /// A decision step; its left child is the `yes` continuation and its
    /// right child the `no` continuation.
    Decision { step_id: StepId },
    /// Synthetic terminal. `loop_of` carries the revisited step id when this
    /// terminal was inserted by the cycle guard.
    End { loop_of: Option<StepId> },
}

impl NodeKind {
    /// The wrapped step id for `Step`/`Decision` nodes.
    pub fn step_id(&self) -> Option<&str> {
        match self {
            NodeKind::Step { step_id } | NodeKind::Decision { step_id } => Some(step_id),
            NodeKind::Start | NodeKind::End { .. } => None,
        }
    }
}

/// One node of a resolved tree, with arena links to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub kind: NodeKind,
    /// Primary child: the sole successor of a step, or the `yes` side of a
    /// decision.
    pub left: Option<NodeId>,
    /// The `no` side of a decision.
    pub right: Option<NodeId>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_loop_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::End { loop_of: Some(_) })
    }
}

/// Tag on a parent-to-child edge, used by renderers to pick color and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Yes,
    No,
    Normal,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Yes => write!(f, "yes"),
            EdgeKind::No => write!(f, "no"),
            EdgeKind::Normal => write!(f, "normal"),
        }
    }
}

/// One parent-to-child edge of a resolved tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
}

/// A resolved, acyclic navigation tree stored as an arena.
///
/// The root is always the synthetic `Start` node; `terminals` lists every
/// `End` node in creation order. Trees are ephemeral: recomputed from the
/// current flat rows on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
    terminals: Vec<NodeId>,
}

impl ResolvedTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
            terminals: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            kind,
            left: None,
            right: None,
        });
        id
    }

    pub(crate) fn push_end(&mut self, loop_of: Option<StepId>) -> NodeId {
        let id = self.push(NodeKind::End { loop_of });
        self.terminals.push(id);
        id
    }

    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        self.nodes[id.0].left = Some(child);
    }

    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        self.nodes[id.0].right = Some(child);
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every `End` node, loop-terminals included, in creation order.
    pub fn terminals(&self) -> &[NodeId] {
        &self.terminals
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// All parent-to-child edges, tagged `yes`/`no` for decision children and
    /// `normal` otherwise. Order follows the arena's preorder node ids.
    pub fn edges(&self) -> impl Iterator<Item = TreeEdge> + '_ {
        self.iter().flat_map(|(id, node)| {
            let (left_kind, right_kind) = if matches!(node.kind, NodeKind::Decision { .. }) {
                (EdgeKind::Yes, EdgeKind::No)
            } else {
                (EdgeKind::Normal, EdgeKind::Normal)
            };
            let left = node.left.map(|to| TreeEdge {
                from: id,
                to,
                kind: left_kind,
            });
            let right = node.right.map(|to| TreeEdge {
                from: id,
                to,
                kind: right_kind,
            });
            left.into_iter().chain(right)
        })
    }
}

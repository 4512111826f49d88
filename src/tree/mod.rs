use crate::model::{Branch, Step, StepIndex};
use ahash::AHashSet;

mod display;
mod node;

pub use display::DisplayTree;
pub use node::{EdgeKind, NodeId, NodeKind, ResolvedTree, TreeEdge, TreeNode};

/// Resolves one process snapshot into a navigation tree.
///
/// The resolver never fails: malformed references, missing branches, and
/// cycles all degrade to `End` nodes, so the output is always a finite,
/// well-formed tree. A process with zero steps resolves to `start -> end`.
pub struct TreeResolver<'a> {
    index: StepIndex<'a>,
}

impl<'a> TreeResolver<'a> {
    pub fn new(steps: &'a [Step], branches: &'a [Branch]) -> Self {
        Self {
            index: StepIndex::new(steps, branches),
        }
    }

    pub fn index(&self) -> &StepIndex<'a> {
        &self.index
    }

    /// Builds the resolved tree rooted at the first step by step number.
    pub fn resolve(&self) -> ResolvedTree {
        let mut tree = ResolvedTree::new();
        let root = tree.push(NodeKind::Start);

        let mut visited = AHashSet::new();
        let child = match self.index.first() {
            Some(first) => self.build_step(first, &mut tree, &mut visited),
            None => tree.push_end(None),
        };
        tree.set_left(root, child);
        tree
    }

    /// Resolves one step on the current downward path.
    ///
    /// The visited set is scoped to the path, not the whole traversal: the
    /// step is inserted before recursing and removed afterwards, so a step
    /// reached again through a sibling branch is resolved normally while a
    /// true cycle is cut at a loop-terminal.
    fn build_step(
        &self,
        step: &'a Step,
        tree: &mut ResolvedTree,
        visited: &mut AHashSet<&'a str>,
    ) -> NodeId {
        if visited.contains(step.id.as_str()) {
            return tree.push_end(Some(step.id.clone()));
        }
        visited.insert(step.id.as_str());

        let id = if self.index.is_decision(step) {
            let pair = self.index.branches_of(&step.id);
            let node = tree.push(NodeKind::Decision {
                step_id: step.id.clone(),
            });
            let yes = self.build_branch_target(pair.yes, tree, visited);
            tree.set_left(node, yes);
            let no = self.build_branch_target(pair.no, tree, visited);
            tree.set_right(node, no);
            node
        } else {
            let node = tree.push(NodeKind::Step {
                step_id: step.id.clone(),
            });
            let next = match self.index.successor_of(step) {
                Some(successor) => self.build_step(successor, tree, visited),
                None => tree.push_end(None),
            };
            tree.set_left(node, next);
            node
        };

        visited.remove(step.id.as_str());
        id
    }

    /// Resolves one side of a decision. An absent branch, a null target, and
    /// a target id that does not exist all terminate the side at an `End`
    /// node; none of them is an error.
    fn build_branch_target(
        &self,
        branch: Option<&'a Branch>,
        tree: &mut ResolvedTree,
        visited: &mut AHashSet<&'a str>,
    ) -> NodeId {
        match branch.and_then(|b| b.next_step_id.as_deref()) {
            Some(target_id) => match self.index.get(target_id) {
                Some(target) => self.build_step(target, tree, visited),
                None => tree.push_end(None),
            },
            None => tree.push_end(None),
        }
    }
}

/// Resolves the flat step and branch rows of one process into a tree.
pub fn resolve(steps: &[Step], branches: &[Branch]) -> ResolvedTree {
    TreeResolver::new(steps, branches).resolve()
}

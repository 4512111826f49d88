use super::node::{EdgeKind, NodeId, NodeKind, ResolvedTree};
use std::fmt;

/// Renders a resolved tree as an indented ASCII tree for debugging.
///
/// Decision children are prefixed with their edge label:
///
/// ```text
/// └── start
///     └── decision s1
///         ├── [yes] step s2
///         │   └── end
///         └── [no] end
/// ```
pub struct DisplayTree<'a> {
    pub tree: &'a ResolvedTree,
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.tree.root(), f, "", true, None)
    }
}

impl DisplayTree<'_> {
    fn fmt_node(
        &self,
        id: NodeId,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
        edge: Option<EdgeKind>,
    ) -> fmt::Result {
        let marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, marker)?;
        if let Some(kind) = edge {
            write!(f, "[{}] ", kind)?;
        }

        let node = self.tree.node(id);
        match &node.kind {
            NodeKind::Start => writeln!(f, "start")?,
            NodeKind::Step { step_id } => writeln!(f, "step {}", step_id)?,
            NodeKind::Decision { step_id } => writeln!(f, "decision {}", step_id)?,
            NodeKind::End { loop_of: Some(step_id) } => writeln!(f, "end (loop at {})", step_id)?,
            NodeKind::End { loop_of: None } => writeln!(f, "end")?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let (left_edge, right_edge) = if matches!(node.kind, NodeKind::Decision { .. }) {
            (Some(EdgeKind::Yes), Some(EdgeKind::No))
        } else {
            (None, None)
        };

        match (node.left, node.right) {
            (Some(left), Some(right)) => {
                self.fmt_node(left, f, &child_prefix, false, left_edge)?;
                self.fmt_node(right, f, &child_prefix, true, right_edge)?;
            }
            (Some(only), None) => self.fmt_node(only, f, &child_prefix, true, left_edge)?,
            (None, Some(only)) => self.fmt_node(only, f, &child_prefix, true, right_edge)?,
            (None, None) => {}
        }
        Ok(())
    }
}

use crate::tree::NodeKind;
use serde::{Deserialize, Serialize};

/// Geometry constants for the tree layout.
///
/// Defaults match the reference flowchart geometry; all values are plain
/// canvas units. The engine itself never draws, so the exact unit is up to
/// the consuming renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical distance between consecutive tree levels.
    pub level_height: f32,
    /// Minimum horizontal span allotted to a leaf subtree; also the padding
    /// added around a node's children.
    pub min_spacing: f32,
    pub step_width: f32,
    pub step_height: f32,
    /// Side length of the decision diamond's bounding box.
    pub decision_size: f32,
    /// Horizontal radius of the start/end ellipse.
    pub terminal_rx: f32,
    /// Vertical radius of the start/end ellipse.
    pub terminal_ry: f32,
    /// Y coordinate of the start node.
    pub start_y: f32,
    pub min_canvas_width: f32,
    /// Space kept below the deepest node.
    pub bottom_margin: f32,
    /// Connectors whose endpoints differ horizontally by less than this run
    /// as a single vertical segment instead of an elbow.
    pub straight_edge_epsilon: f32,
    /// Horizontal offset of yes/no labels from their anchor node.
    pub label_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_height: 200.0,
            min_spacing: 350.0,
            step_width: 280.0,
            step_height: 100.0,
            decision_size: 160.0,
            terminal_rx: 100.0,
            terminal_ry: 35.0,
            start_y: 80.0,
            min_canvas_width: 1400.0,
            bottom_margin: 200.0,
            straight_edge_epsilon: 10.0,
            label_offset: 30.0,
        }
    }
}

impl LayoutConfig {
    /// Bounding-box extent (width, height) of a node kind, for renderers and
    /// for anchoring connectors at shape boundaries.
    pub fn node_extent(&self, kind: &NodeKind) -> (f32, f32) {
        match kind {
            NodeKind::Start | NodeKind::End { .. } => (self.terminal_rx * 2.0, self.terminal_ry * 2.0),
            NodeKind::Step { .. } => (self.step_width, self.step_height),
            NodeKind::Decision { .. } => (self.decision_size, self.decision_size),
        }
    }
}

//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowguide crate so that
//! one `use flowguide::prelude::*;` covers the typical resolve-layout-walk
//! workflow.

// Core resolution and layout
pub use crate::layout::{layout, EdgePath, LayoutConfig, LayoutEngine, Point, TreeLayout};
pub use crate::tree::{
    resolve, DisplayTree, EdgeKind, NodeId, NodeKind, ResolvedTree, TreeEdge, TreeNode,
    TreeResolver,
};

// Walkthrough sessions
pub use crate::walkthrough::{PathCursor, PathEnding, StepPath, Walkthrough, MAIN_PATH};

// Data model and conversion
pub use crate::model::{
    Branch, BranchPair, Condition, IntoProcess, NextStep, ProcessDefinition, ProcessInfo, Step,
    StepId, StepIndex,
};
pub use crate::ui::{ProcessRows, UiBranch, UiProcess, UiStep};

// Error types
pub use crate::error::{ConversionError, NavigationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

use thiserror::Error;

/// Errors that can occur when converting external rows into a process definition.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid process data: {0}")]
    ValidationError(String),

    #[error("Branch '{branch_id}' has an unsupported condition '{condition}' (expected \"yes\" or \"no\")")]
    InvalidCondition {
        branch_id: String,
        condition: String,
    },
}

/// Errors that can occur while driving a walkthrough session.
#[derive(Error, Debug, Clone)]
pub enum NavigationError {
    #[error("Walkthrough path '{0}' does not exist")]
    UnknownPath(String),

    #[error("Step '{step_id}' is not a decision step with branches, so it cannot be forked")]
    NotADecision { step_id: String },
}

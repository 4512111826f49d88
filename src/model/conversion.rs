use super::definition::ProcessDefinition;
use crate::error::ConversionError;

/// A trait for custom row formats that can be converted into a [`ProcessDefinition`].
///
/// This is the extension point for keeping the engine storage-agnostic. The
/// storage/API collaborator hands out flat step and branch rows in whatever
/// shape its schema dictates; implementing this trait on your own row structs
/// provides the translation into the canonical model the resolver consumes.
///
/// # Example
///
/// ```rust
/// use flowguide::error::ConversionError;
/// use flowguide::model::{IntoProcess, NextStep, ProcessDefinition, Step};
///
/// // 1. Define structs matching your storage format.
/// struct DbStep { pk: i64, ordinal: u32, label: String }
/// struct DbProcess { steps: Vec<DbStep> }
///
/// // 2. Implement `IntoProcess` for the top-level struct.
/// impl IntoProcess for DbProcess {
///     fn into_process(self) -> Result<ProcessDefinition, ConversionError> {
///         let steps = self
///             .steps
///             .into_iter()
///             .map(|row| Step {
///                 id: row.pk.to_string(),
///                 process_id: String::new(),
///                 step_number: row.ordinal,
///                 title: row.label,
///                 description: String::new(),
///                 is_decision: false,
///                 next_step: NextStep::Sequential,
///             })
///             .collect();
///
///         Ok(ProcessDefinition {
///             info: None,
///             steps,
///             branches: vec![], // convert your branch rows here as well
///         })
///     }
/// }
/// ```
pub trait IntoProcess {
    /// Consumes the object and converts it into a canonical process snapshot.
    fn into_process(self) -> Result<ProcessDefinition, ConversionError>;
}

use std::fmt;

/// Opaque step identifier. Unique within one process.
pub type StepId = String;

/// Catalog record for a process. The engine itself only consumes steps and
/// branches; this is carried so callers can keep the full read shape together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One unit of a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub process_id: String,
    /// Positive, unique within a process. Defines the sequential fallthrough order.
    pub step_number: u32,
    pub title: String,
    pub description: String,
    /// A step is only treated as a decision when this is set AND at least one
    /// branch row exists for it.
    pub is_decision: bool,
    pub next_step: NextStep,
}

/// Successor encoding for a non-decision step.
///
/// The storage layer encodes this as an optional, nullable pointer column:
/// an absent value falls through to the next step number, an explicit null
/// ends the process, and an id jumps to that step (possibly backward).
/// Ignored for decision steps that carry branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NextStep {
    /// No explicit pointer; the successor is the step with `step_number + 1`.
    #[default]
    Sequential,
    /// Explicit end of the process.
    End,
    /// Explicit jump to the given step.
    Goto(StepId),
}

/// The label on an edge out of a decision step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Yes,
    No,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Yes => write!(f, "yes"),
            Condition::No => write!(f, "no"),
        }
    }
}

/// One labeled edge out of a decision step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: String,
    pub step_id: StepId,
    pub condition: Condition,
    /// Target step, or `None` for "this branch ends the process".
    pub next_step_id: Option<StepId>,
    /// Label shown to the user, e.g. "Student is eligible".
    pub description: String,
}

/// The complete, canonical snapshot of one process, ready for resolution.
/// This is the target structure for any custom row-format conversion.
#[derive(Debug, Clone, Default)]
pub struct ProcessDefinition {
    pub info: Option<ProcessInfo>,
    pub steps: Vec<Step>,
    pub branches: Vec<Branch>,
}

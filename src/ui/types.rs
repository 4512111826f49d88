use crate::error::ConversionError;
use crate::model::{
    Branch, Condition, IntoProcess, NextStep, ProcessDefinition, ProcessInfo, Step,
};
use serde::{Deserialize, Deserializer};

/// Process catalog row as exported by the storage/API collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct UiProcess {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    #[serde(alias = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    #[serde(alias = "updatedAt")]
    pub updated_at: String,
}

/// Step row. The `nextStepId` column is three-way: absent means sequential
/// fallthrough, null means explicit end, an id means an explicit jump.
#[derive(Debug, Clone, Deserialize)]
pub struct UiStep {
    pub id: String,
    #[serde(alias = "processId")]
    pub process_id: String,
    #[serde(alias = "stepNumber")]
    pub step_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[serde(alias = "isDecision")]
    pub is_decision: bool,
    #[serde(default)]
    #[serde(alias = "nextStepId", alias = "next_step_id")]
    #[serde(deserialize_with = "next_step_field")]
    pub next_step: NextStep,
}

/// Branch row. `condition` stays a raw string here; it is validated during
/// conversion into the canonical model.
#[derive(Debug, Clone, Deserialize)]
pub struct UiBranch {
    pub id: String,
    #[serde(alias = "stepId")]
    pub step_id: String,
    pub condition: String,
    #[serde(default)]
    #[serde(alias = "nextStepId")]
    pub next_step_id: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// The per-process read shape: one process record plus all of its step and
/// branch rows, as served by the storage collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRows {
    #[serde(default)]
    pub process: Option<UiProcess>,
    pub steps: Vec<UiStep>,
    #[serde(default)]
    pub branches: Vec<UiBranch>,
}

impl ProcessRows {
    /// Parse a JSON export of one process.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Distinguishes a null `nextStepId` from an absent one. This function only
/// runs when the key is present, so absence falls back to the field default
/// (`NextStep::Sequential`).
fn next_step_field<'de, D>(deserializer: D) -> Result<NextStep, D::Error>
where
    D: Deserializer<'de>,
{
    let target = Option::<String>::deserialize(deserializer)?;
    Ok(match target {
        Some(id) => NextStep::Goto(id),
        None => NextStep::End,
    })
}

impl From<UiProcess> for ProcessInfo {
    fn from(row: UiProcess) -> Self {
        ProcessInfo {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl IntoProcess for ProcessRows {
    fn into_process(self) -> Result<ProcessDefinition, ConversionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|row| Step {
                id: row.id,
                process_id: row.process_id,
                step_number: row.step_number,
                title: row.title,
                description: row.description,
                is_decision: row.is_decision,
                next_step: row.next_step,
            })
            .collect();

        let mut branches = Vec::with_capacity(self.branches.len());
        for row in self.branches {
            let condition = match row.condition.as_str() {
                "yes" => Condition::Yes,
                "no" => Condition::No,
                other => {
                    return Err(ConversionError::InvalidCondition {
                        branch_id: row.id.clone(),
                        condition: other.to_string(),
                    });
                }
            };
            branches.push(Branch {
                id: row.id,
                step_id: row.step_id,
                condition,
                next_step_id: row.next_step_id,
                description: row.description,
            });
        }

        Ok(ProcessDefinition {
            info: self.process.map(ProcessInfo::from),
            steps,
            branches,
        })
    }
}

//! Common test utilities for building process snapshots.
use flowguide::prelude::*;

/// A regular step that falls through sequentially.
#[allow(dead_code)]
pub fn step(id: &str, number: u32) -> Step {
    Step {
        id: id.to_string(),
        process_id: "p1".to_string(),
        step_number: number,
        title: format!("Step {number}"),
        description: String::new(),
        is_decision: false,
        next_step: NextStep::Sequential,
    }
}

/// A regular step with an explicit jump target.
#[allow(dead_code)]
pub fn step_to(id: &str, number: u32, target: &str) -> Step {
    Step {
        next_step: NextStep::Goto(target.to_string()),
        ..step(id, number)
    }
}

/// A regular step that explicitly ends the process.
#[allow(dead_code)]
pub fn final_step(id: &str, number: u32) -> Step {
    Step {
        next_step: NextStep::End,
        ..step(id, number)
    }
}

/// A decision-flagged step. It only acts as a decision once branches exist.
#[allow(dead_code)]
pub fn decision(id: &str, number: u32) -> Step {
    Step {
        is_decision: true,
        ..step(id, number)
    }
}

/// A branch row; `target` of `None` means "this branch ends the process".
#[allow(dead_code)]
pub fn branch(step_id: &str, condition: Condition, target: Option<&str>) -> Branch {
    Branch {
        id: format!("b-{step_id}-{condition}"),
        step_id: step_id.to_string(),
        condition,
        next_step_id: target.map(str::to_string),
        description: format!("{condition} from {step_id}"),
    }
}

/// A realistic admission workflow with two decision points.
///
/// ```text
/// start -> d(s1 eligibility) --yes--> s2 -> s3 -> s4 -> d(s5 entrance test)
///                            --no---> end        --yes--> s6 -> end
///                                                --no---> end
/// ```
#[allow(dead_code)]
pub fn admission_process() -> ProcessDefinition {
    let steps = vec![
        Step {
            title: "Check Eligibility".to_string(),
            ..decision("s1", 1)
        },
        Step {
            title: "Fill Application Form".to_string(),
            ..step("s2", 2)
        },
        Step {
            title: "Upload Documents".to_string(),
            ..step("s3", 3)
        },
        Step {
            title: "Pay Application Fee".to_string(),
            ..step("s4", 4)
        },
        Step {
            title: "Attend Entrance Test".to_string(),
            ..decision("s5", 5)
        },
        Step {
            title: "Accept Admission".to_string(),
            ..final_step("s6", 6)
        },
    ];
    let branches = vec![
        branch("s1", Condition::Yes, Some("s2")),
        branch("s1", Condition::No, None),
        branch("s5", Condition::Yes, Some("s6")),
        branch("s5", Condition::No, None),
    ];
    ProcessDefinition {
        info: None,
        steps,
        branches,
    }
}

/// Two steps pointing at each other through explicit jumps.
#[allow(dead_code)]
pub fn cyclic_process() -> ProcessDefinition {
    ProcessDefinition {
        info: None,
        steps: vec![step_to("s1", 1, "s2"), step_to("s2", 2, "s1")],
        branches: vec![],
    }
}

/// Walks `left` links from the root and returns the node ids along the spine.
#[allow(dead_code)]
pub fn spine(tree: &ResolvedTree) -> Vec<NodeId> {
    let mut ids = vec![tree.root()];
    let mut current = tree.root();
    while let Some(next) = tree.node(current).left {
        ids.push(next);
        current = next;
    }
    ids
}

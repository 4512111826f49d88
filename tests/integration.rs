//! Integration tests for flowguide
//!
//! End-to-end tests that exercise the whole pipeline: JSON rows from the
//! storage collaborator through conversion, resolution, and layout.
mod common;
use common::*;
use flowguide::prelude::*;

/// A camelCase export the way the API layer serves it. `s1` carries no
/// `nextStepId` key (sequential fallthrough) while `s4` carries an explicit
/// null (process end).
const ADMISSION_ROWS_JSON: &str = r#"{
  "process": {
    "id": "1",
    "title": "College Admission Process",
    "description": "Complete guide for new student admission procedure",
    "category": "Academic",
    "createdAt": "2024-01-15",
    "updatedAt": "2024-01-20"
  },
  "steps": [
    {
      "id": "s1",
      "processId": "1",
      "stepNumber": 1,
      "title": "Fill Application Form",
      "description": "Complete the online application form",
      "isDecision": false
    },
    {
      "id": "s2",
      "processId": "1",
      "stepNumber": 2,
      "title": "Check Eligibility",
      "description": "Verify minimum eligibility criteria",
      "isDecision": true
    },
    {
      "id": "s3",
      "processId": "1",
      "stepNumber": 3,
      "title": "Pay Application Fee",
      "description": "Pay the fee through the payment gateway",
      "isDecision": false,
      "nextStepId": "s4"
    },
    {
      "id": "s4",
      "processId": "1",
      "stepNumber": 4,
      "title": "Attend Entrance Test",
      "description": "Appear for the entrance examination",
      "isDecision": false,
      "nextStepId": null
    }
  ],
  "branches": [
    {
      "id": "b1",
      "stepId": "s2",
      "condition": "yes",
      "nextStepId": "s3",
      "description": "Student is eligible"
    },
    {
      "id": "b2",
      "stepId": "s2",
      "condition": "no",
      "nextStepId": null,
      "description": "Student is not eligible"
    }
  ]
}"#;

#[test]
fn test_json_rows_to_layout_pipeline() {
    let rows = ProcessRows::from_json(ADMISSION_ROWS_JSON).expect("valid export");
    let process = rows.into_process().expect("valid conversion");

    let info = process.info.as_ref().expect("process record present");
    assert_eq!(info.title, "College Admission Process");
    assert_eq!(info.created_at, "2024-01-15");

    // Absent key vs explicit null survived deserialization.
    assert_eq!(process.steps[0].next_step, NextStep::Sequential);
    assert_eq!(process.steps[3].next_step, NextStep::End);
    assert_eq!(
        process.steps[2].next_step,
        NextStep::Goto("s4".to_string())
    );

    let tree = resolve(&process.steps, &process.branches);
    // start -> s1 -> decision s2 {yes: s3 -> s4 -> end, no: end}
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.terminals().len(), 2);

    let plan = layout(&tree);
    assert_eq!(plan.positions.len(), tree.len());
    assert_eq!(plan.edges.len(), 6);
    assert!(plan.width >= 1400.0);
}

#[test]
fn test_pipeline_is_reproducible_end_to_end() {
    let run = || {
        let process = ProcessRows::from_json(ADMISSION_ROWS_JSON)
            .unwrap()
            .into_process()
            .unwrap();
        let tree = resolve(&process.steps, &process.branches);
        let plan = layout(&tree);
        (tree, plan)
    };

    let (first_tree, first_plan) = run();
    let (second_tree, second_plan) = run();
    assert_eq!(first_tree, second_tree);
    assert_eq!(first_plan, second_plan);
}

#[test]
fn test_unknown_condition_is_rejected_at_conversion() {
    let json = r#"{
      "steps": [
        {"id": "s1", "processId": "1", "stepNumber": 1, "isDecision": true}
      ],
      "branches": [
        {"id": "b1", "stepId": "s1", "condition": "maybe", "nextStepId": null}
      ]
    }"#;

    let rows = ProcessRows::from_json(json).expect("structurally valid");
    let err = rows.into_process().expect_err("condition must be rejected");
    match err {
        ConversionError::InvalidCondition {
            branch_id,
            condition,
        } => {
            assert_eq!(branch_id, "b1");
            assert_eq!(condition, "maybe");
        }
        other => panic!("Expected InvalidCondition, got {other}"),
    }
}

#[test]
fn test_snake_case_rows_parse_too() {
    let json = r#"{
      "steps": [
        {"id": "s1", "process_id": "1", "step_number": 1, "is_decision": false,
         "next_step_id": null, "title": "Only step"}
      ],
      "branches": []
    }"#;

    let process = ProcessRows::from_json(json)
        .unwrap()
        .into_process()
        .unwrap();
    assert_eq!(process.steps[0].next_step, NextStep::End);

    let tree = resolve(&process.steps, &process.branches);
    assert_eq!(tree.terminals().len(), 1);
}

#[test]
fn test_display_tree_renders_the_resolved_shape() {
    let process = admission_process();
    let tree = resolve(&process.steps, &process.branches);

    let rendered = DisplayTree { tree: &tree }.to_string();

    assert!(rendered.contains("start"));
    assert!(rendered.contains("decision s1"));
    assert!(rendered.contains("[yes] step s2"));
    assert!(rendered.contains("[no] end"));
    assert!(rendered.contains("step s6"));
    // One line per node.
    assert_eq!(rendered.lines().count(), tree.len());
}

#[test]
fn test_walkthrough_and_resolver_agree_on_successors() {
    // The walkthrough's yes path must visit exactly the steps the resolved
    // tree has on the corresponding branch, in the same order.
    let process = admission_process();
    let tree = resolve(&process.steps, &process.branches);
    let mut session = Walkthrough::new(&process.steps, &process.branches);

    session.fork(MAIN_PATH, "s1").unwrap();
    let yes_path = session.path("main-yes").unwrap();
    assert_eq!(
        yes_path.steps(),
        ["s2".to_string(), "s3".to_string(), "s4".to_string()]
    );
    assert_eq!(yes_path.ending(), &PathEnding::Decision("s5".to_string()));

    // Resolved tree, yes side of s1: s2 -> s3 -> s4 -> decision s5.
    let decision_id = tree.node(tree.root()).left.unwrap();
    let mut current = tree.node(decision_id).left.unwrap();
    let mut tree_steps = Vec::new();
    while let NodeKind::Step { step_id } = &tree.node(current).kind {
        tree_steps.push(step_id.clone());
        current = tree.node(current).left.unwrap();
    }
    assert_eq!(tree_steps, yes_path.steps());
    assert!(matches!(
        &tree.node(current).kind,
        NodeKind::Decision { step_id } if step_id == "s5"
    ));
}

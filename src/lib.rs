//! # flowguide - Decision-Tree Resolution and Layout Engine
//!
//! **flowguide** turns the flat, database-shaped representation of a process
//! guide (steps with nullable "next" pointers, yes/no branch rows) into the
//! derived structures an interactive front end needs: a resolved navigation
//! tree, a deterministic 2D flowchart layout, and a step-through walkthrough
//! session.
//!
//! ## Core Workflow
//!
//! The engine is storage-agnostic. It operates on a canonical snapshot of one
//! process; the typical workflow is:
//!
//! 1.  **Load Your Rows**: Fetch the step and branch rows for a process from
//!     your store, or parse a JSON export with [`ui::ProcessRows`]. Custom row
//!     formats plug in through the [`model::IntoProcess`] trait.
//! 2.  **Resolve**: [`tree::resolve`] reconstructs the logical tree rooted at
//!     the first step, making implicit edges explicit (sequential
//!     fallthrough, explicit jumps, yes/no branches, terminations) and
//!     cutting cycles at loop-terminals. Resolution never fails: malformed
//!     references degrade to `end` nodes.
//! 3.  **Lay Out**: [`layout::LayoutEngine`] assigns every node a canvas
//!     position and routes every connector, using recursive subtree widths so
//!     sibling branches never overlap. The engine computes geometry only;
//!     mapping node kinds to shapes and edge tags to colors is the renderer's
//!     business.
//! 4.  **Walk Through**: [`walkthrough::Walkthrough`] drives the interactive
//!     "reveal as you go" view: one linear path at a time, and at a decision
//!     point both branches open side by side.
//!
//! All three stages are pure, synchronous computations over the snapshot they
//! are given; results are recomputed per request and never persisted.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowguide::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A two-step process: an eligibility decision, then an application step.
//!     let steps = vec![
//!         Step {
//!             id: "s1".to_string(),
//!             process_id: "p1".to_string(),
//!             step_number: 1,
//!             title: "Check eligibility".to_string(),
//!             description: String::new(),
//!             is_decision: true,
//!             next_step: NextStep::Sequential,
//!         },
//!         Step {
//!             id: "s2".to_string(),
//!             process_id: "p1".to_string(),
//!             step_number: 2,
//!             title: "Fill application form".to_string(),
//!             description: String::new(),
//!             is_decision: false,
//!             next_step: NextStep::End,
//!         },
//!     ];
//!     let branches = vec![
//!         Branch {
//!             id: "b1".to_string(),
//!             step_id: "s1".to_string(),
//!             condition: Condition::Yes,
//!             next_step_id: Some("s2".to_string()),
//!             description: "Applicant is eligible".to_string(),
//!         },
//!         Branch {
//!             id: "b2".to_string(),
//!             step_id: "s1".to_string(),
//!             condition: Condition::No,
//!             next_step_id: None,
//!             description: "Not eligible".to_string(),
//!         },
//!     ];
//!
//!     // Resolve the flat rows into a navigation tree and print it.
//!     let tree = resolve(&steps, &branches);
//!     println!("{}", DisplayTree { tree: &tree });
//!     assert_eq!(tree.terminals().len(), 2);
//!
//!     // Compute the flowchart geometry.
//!     let plan = LayoutEngine::new().layout(&tree);
//!     assert!(plan.width >= 1400.0);
//!
//!     // Drive a walkthrough: the main path immediately waits on the decision.
//!     let mut session = Walkthrough::new(&steps, &branches);
//!     let decision_id = session
//!         .pending_decision(MAIN_PATH)
//!         .expect("main path waits on the decision")
//!         .id
//!         .clone();
//!     session.fork(MAIN_PATH, &decision_id)?;
//!     session.advance("main-yes")?;
//!     assert!(session.path("main-yes").unwrap().cursor().is_end_reached());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod prelude;
pub mod tree;
pub mod ui;
pub mod walkthrough;

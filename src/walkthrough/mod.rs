use crate::error::NavigationError;
use crate::model::{Branch, Condition, Step, StepIndex};
use std::collections::BTreeMap;

mod path;

pub use path::{PathCursor, PathEnding, StepPath};

/// Key of the root path.
pub const MAIN_PATH: &str = "main";

/// Interactive walkthrough over one process snapshot.
///
/// Reveals one linear path at a time; at a decision point both branches are
/// opened side by side as fresh paths rather than a single chosen
/// continuation. Paths are keyed by string: the root path is `"main"`, and a
/// fork of path `p` creates `p-yes` and `p-no`.
///
/// The session owns its cursor map exclusively; all three transitions
/// (`advance`, `fork`, `reset`) are synchronous and never remove a revealed
/// step except through `reset`.
pub struct Walkthrough<'a> {
    index: StepIndex<'a>,
    paths: BTreeMap<String, StepPath>,
}

impl<'a> Walkthrough<'a> {
    /// Builds a session over the given snapshot and materializes the main
    /// path from the first step by step number. A process with no steps gets
    /// an already-completed main path.
    pub fn new(steps: &'a [Step], branches: &'a [Branch]) -> Self {
        let index = StepIndex::new(steps, branches);
        let main = match index.first() {
            Some(first) => StepPath::materialize(&index, first),
            None => StepPath::completed(),
        };

        let mut paths = BTreeMap::new();
        paths.insert(MAIN_PATH.to_string(), main);
        Self { index, paths }
    }

    /// Reveals the next step of `path_id`. Returns the cursor after the move;
    /// an exhausted path collapses to `EndReached` and stays there.
    pub fn advance(&mut self, path_id: &str) -> Result<PathCursor, NavigationError> {
        let path = self
            .paths
            .get_mut(path_id)
            .ok_or_else(|| NavigationError::UnknownPath(path_id.to_string()))?;
        Ok(path.advance())
    }

    /// Opens both continuations of the decision step `step_id` as new paths
    /// `{path_id}-yes` and `{path_id}-no`.
    ///
    /// A side whose branch is absent, null-targeted, or dangling starts out
    /// already end-reached. Forking a decision whose sub-paths exist is a
    /// no-op per side, so revealed progress is never reset by a repeat click.
    pub fn fork(&mut self, path_id: &str, step_id: &str) -> Result<(), NavigationError> {
        if !self.paths.contains_key(path_id) {
            return Err(NavigationError::UnknownPath(path_id.to_string()));
        }
        let step = self
            .index
            .get(step_id)
            .filter(|step| self.index.is_decision(step))
            .ok_or_else(|| NavigationError::NotADecision {
                step_id: step_id.to_string(),
            })?;

        let pair = self.index.branches_of(&step.id);
        for (condition, branch) in [(Condition::Yes, pair.yes), (Condition::No, pair.no)] {
            let key = format!("{path_id}-{condition}");
            if self.paths.contains_key(&key) {
                continue;
            }
            let target = branch
                .and_then(|b| b.next_step_id.as_deref())
                .and_then(|id| self.index.get(id));
            let sub_path = match target {
                Some(start) => StepPath::materialize(&self.index, start),
                None => StepPath::completed(),
            };
            self.paths.insert(key, sub_path);
        }
        Ok(())
    }

    /// Discards every path except main and rewinds main to its first step.
    pub fn reset(&mut self) {
        self.paths.retain(|key, _| key == MAIN_PATH);
        if let Some(main) = self.paths.get_mut(MAIN_PATH) {
            main.rewind();
        }
    }

    pub fn path(&self, path_id: &str) -> Option<&StepPath> {
        self.paths.get(path_id)
    }

    /// All paths in key order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &StepPath)> {
        self.paths.iter().map(|(key, path)| (key.as_str(), path))
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// The decision step a fully revealed path is waiting on, if any. This is
    /// the step to pass to [`fork`](Self::fork).
    pub fn pending_decision(&self, path_id: &str) -> Option<&'a Step> {
        let path = self.paths.get(path_id)?;
        if !path.fully_revealed() {
            return None;
        }
        match path.ending() {
            PathEnding::Decision(step_id) => self.index.get(step_id),
            PathEnding::End | PathEnding::Loop(_) => None,
        }
    }
}

use crate::model::{Step, StepId, StepIndex};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Progress marker within one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathCursor {
    /// Steps up to and including this index are revealed.
    At(usize),
    /// The path ran off its end; every step stays revealed.
    EndReached,
}

impl PathCursor {
    pub fn is_end_reached(&self) -> bool {
        matches!(self, PathCursor::EndReached)
    }
}

/// Why a path's materialized sequence stopped where it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathEnding {
    /// Explicit end, dangling pointer, or no sequential successor.
    End,
    /// The next step is a decision; the path waits for a fork from it.
    /// Decision steps never appear inline in the sequence itself.
    Decision(StepId),
    /// The cycle guard cut the walk at a revisit of this step.
    Loop(StepId),
}

/// One linear walkthrough path: a materialized step sequence plus a cursor.
///
/// The sequence is fixed at creation time by walking the shared successor
/// rule; only the cursor moves, and it never retracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPath {
    steps: Vec<StepId>,
    ending: PathEnding,
    cursor: PathCursor,
}

impl StepPath {
    /// Walks successors from `start` until the sequence ends: at the first
    /// decision step (excluded), at a revisit of a step already in this
    /// sequence, or when no successor resolves.
    pub(crate) fn materialize<'a>(index: &StepIndex<'a>, start: &'a Step) -> Self {
        let mut steps: Vec<StepId> = Vec::new();
        let mut seen: AHashSet<&'a str> = AHashSet::new();
        let mut current = start;

        let ending = loop {
            if index.is_decision(current) {
                break PathEnding::Decision(current.id.clone());
            }
            if !seen.insert(current.id.as_str()) {
                break PathEnding::Loop(current.id.clone());
            }
            steps.push(current.id.clone());
            match index.successor_of(current) {
                Some(next) => current = next,
                None => break PathEnding::End,
            }
        };

        let cursor = Self::initial_cursor(&steps, &ending);
        Self {
            steps,
            ending,
            cursor,
        }
    }

    /// A path that is over before it begins: the branch leading here was
    /// absent, null-targeted, or dangling.
    pub(crate) fn completed() -> Self {
        Self {
            steps: Vec::new(),
            ending: PathEnding::End,
            cursor: PathCursor::EndReached,
        }
    }

    fn initial_cursor(steps: &[StepId], ending: &PathEnding) -> PathCursor {
        // An empty sequence can still be waiting on a decision (the path
        // started at one); only a stepless dead end starts end-reached.
        if steps.is_empty() && !matches!(ending, PathEnding::Decision(_)) {
            PathCursor::EndReached
        } else {
            PathCursor::At(0)
        }
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn ending(&self) -> &PathEnding {
        &self.ending
    }

    pub fn cursor(&self) -> PathCursor {
        self.cursor
    }

    /// The revealed prefix of the sequence.
    pub fn revealed(&self) -> &[StepId] {
        let count = match self.cursor {
            PathCursor::EndReached => self.steps.len(),
            PathCursor::At(index) => (index + 1).min(self.steps.len()),
        };
        &self.steps[..count]
    }

    /// Whether the step at `position` in this sequence is revealed.
    pub fn is_visible(&self, position: usize) -> bool {
        match self.cursor {
            PathCursor::EndReached => position < self.steps.len(),
            PathCursor::At(index) => position <= index && position < self.steps.len(),
        }
    }

    /// Every materialized step is revealed. For a path waiting on a decision
    /// this is the point where the fork becomes available.
    pub fn fully_revealed(&self) -> bool {
        match self.cursor {
            PathCursor::EndReached => true,
            PathCursor::At(index) => index + 1 >= self.steps.len(),
        }
    }

    /// Moves the cursor forward by one step, collapsing to `EndReached` when
    /// the sequence is exhausted. A path waiting at a decision holds its
    /// position (it ends by forking, not by advancing), and an end-reached
    /// cursor stays put.
    pub(crate) fn advance(&mut self) -> PathCursor {
        if let PathCursor::At(index) = self.cursor {
            if index + 1 < self.steps.len() {
                self.cursor = PathCursor::At(index + 1);
            } else if !matches!(self.ending, PathEnding::Decision(_)) {
                self.cursor = PathCursor::EndReached;
            }
        }
        self.cursor
    }

    pub(crate) fn rewind(&mut self) {
        self.cursor = Self::initial_cursor(&self.steps, &self.ending);
    }
}

use super::definition::{Branch, Condition, NextStep, Step};
use ahash::AHashMap;
use itertools::Itertools;

/// The yes/no branch rows owned by one decision step.
///
/// When the input contains duplicate rows for the same `(step, condition)`
/// pair, the first row in input order wins and later rows are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchPair<'a> {
    pub yes: Option<&'a Branch>,
    pub no: Option<&'a Branch>,
}

impl<'a> BranchPair<'a> {
    pub fn get(self, condition: Condition) -> Option<&'a Branch> {
        match condition {
            Condition::Yes => self.yes,
            Condition::No => self.no,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.yes.is_none() && self.no.is_none()
    }
}

/// Id-indexed view over one process snapshot.
///
/// Built once per resolution or walkthrough session from the flat step and
/// branch collections; all successor and branch lookups go through here so
/// the tree resolver and the walkthrough navigator share one rule set.
#[derive(Debug)]
pub struct StepIndex<'a> {
    ordered: Vec<&'a Step>,
    by_id: AHashMap<&'a str, &'a Step>,
    by_number: AHashMap<u32, &'a Step>,
    branches: AHashMap<&'a str, BranchPair<'a>>,
}

impl<'a> StepIndex<'a> {
    pub fn new(steps: &'a [Step], branches: &'a [Branch]) -> Self {
        // Stable sort, so duplicate step numbers keep their input order and
        // the first occurrence wins the by-number slot.
        let ordered: Vec<&'a Step> = steps.iter().sorted_by_key(|s| s.step_number).collect();

        let mut by_id = AHashMap::with_capacity(steps.len());
        let mut by_number = AHashMap::with_capacity(steps.len());
        for &step in &ordered {
            by_id.entry(step.id.as_str()).or_insert(step);
            by_number.entry(step.step_number).or_insert(step);
        }

        let mut pairs: AHashMap<&'a str, BranchPair<'a>> = AHashMap::new();
        for branch in branches {
            let pair = pairs.entry(branch.step_id.as_str()).or_default();
            let slot = match branch.condition {
                Condition::Yes => &mut pair.yes,
                Condition::No => &mut pair.no,
            };
            if slot.is_none() {
                *slot = Some(branch);
            }
        }

        Self {
            ordered,
            by_id,
            by_number,
            branches: pairs,
        }
    }

    /// The first step of the process by step number, if any.
    pub fn first(&self) -> Option<&'a Step> {
        self.ordered.first().copied()
    }

    /// All steps, ordered by step number.
    pub fn steps(&self) -> &[&'a Step] {
        &self.ordered
    }

    pub fn get(&self, id: &str) -> Option<&'a Step> {
        self.by_id.get(id).copied()
    }

    pub fn by_number(&self, number: u32) -> Option<&'a Step> {
        self.by_number.get(&number).copied()
    }

    pub fn branches_of(&self, step_id: &str) -> BranchPair<'a> {
        self.branches.get(step_id).copied().unwrap_or_default()
    }

    /// A step is a decision only when it is flagged as one AND at least one
    /// branch row exists for it. Either signal alone is ignored.
    pub fn is_decision(&self, step: &Step) -> bool {
        step.is_decision && !self.branches_of(&step.id).is_empty()
    }

    /// Resolves the successor of a non-decision step.
    ///
    /// Precedence: an explicit jump wins over sequential fallthrough; an
    /// explicit end yields no successor. A jump to an id that does not exist
    /// in this process, or a sequential fallthrough past the last step
    /// number, also yields no successor rather than an error.
    ///
    /// Both the tree resolver and the walkthrough path materializer consume
    /// this one rule.
    pub fn successor_of(&self, step: &Step) -> Option<&'a Step> {
        match &step.next_step {
            NextStep::Goto(id) => self.get(id),
            NextStep::End => None,
            NextStep::Sequential => self.by_number(step.step_number + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

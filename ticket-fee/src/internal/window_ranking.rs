use crate::Amount;

/// A difficulty window that survived filtering, scored against a target difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RankedWindow {
    pub difficulty: Amount,
    /// Absolute distance from the target difficulty, in atoms
    pub difference: u64,
    pub fee: Amount,
}

/// Collects candidate windows for one estimation and picks the one whose
/// difficulty is closest to the target.
#[derive(Debug)]
pub(crate) struct WindowRanking {
    target: Amount,
    candidates: Vec<RankedWindow>,
}

impl WindowRanking {
    pub fn with_capacity(target: Amount, capacity: usize) -> Self {
        Self {
            target,
            candidates: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, difficulty: Amount, fee: Amount) -> &RankedWindow {
        let ranked = RankedWindow {
            difficulty,
            difference: difficulty.abs_diff(self.target),
            fee,
        };
        self.candidates.push(ranked);
        &self.candidates[self.candidates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Candidates in ascending order of difference. The sort is stable, so
    /// windows at the same distance keep the order they were pushed in.
    pub fn into_sorted(mut self) -> Vec<RankedWindow> {
        self.candidates.sort_by_key(|candidate| candidate.difference);
        self.candidates
    }

    /// The closest candidate, or `None` when nothing was pushed.
    pub fn closest(self) -> Option<RankedWindow> {
        self.into_sorted().into_iter().next()
    }
}

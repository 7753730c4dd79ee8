//! Step completion tracking for an installed instruction list.
//!
//! The "current" step is never stored. It is derived on every read as the
//! first pending index, so ticking a later step early or unticking an earlier
//! one moves the current step without any cursor to keep in sync.

use std::collections::BTreeMap;

use crate::error::ProgressError;
use crate::models::Instruction;

/// Sparse completion flags keyed by instruction index. A missing entry is
/// pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    flags: BTreeMap<usize, bool>,
}

impl ProgressRecord {
    pub fn is_done(&self, index: usize) -> bool {
        self.flags.get(&index).copied().unwrap_or(false)
    }

    fn flip(&mut self, index: usize) -> bool {
        let flag = self.flags.entry(index).or_insert(false);
        *flag = !*flag;
        *flag
    }

    fn clear(&mut self) {
        self.flags.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Done,
}

/// Completion state of an ordered instruction list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressTracker {
    instructions: Vec<Instruction>,
    record: ProgressRecord,
}

impl ProgressTracker {
    /// Create a tracker over a freshly installed list; every step starts pending.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            record: ProgressRecord::default(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Flip the flag at `index`, returning the new state of that step.
    pub fn toggle(&mut self, index: usize) -> Result<StepState, ProgressError> {
        if index >= self.instructions.len() {
            return Err(ProgressError::IndexOutOfRange {
                index,
                len: self.instructions.len(),
            });
        }
        Ok(if self.record.flip(index) {
            StepState::Done
        } else {
            StepState::Pending
        })
    }

    pub fn reset(&mut self) {
        self.record.clear();
    }

    pub fn state(&self, index: usize) -> Option<StepState> {
        if index >= self.instructions.len() {
            return None;
        }
        Some(if self.record.is_done(index) {
            StepState::Done
        } else {
            StepState::Pending
        })
    }

    /// First pending step, or the last step once everything is done.
    /// `None` only when there are no instructions at all.
    pub fn current_index(&self) -> Option<usize> {
        if self.instructions.is_empty() {
            return None;
        }
        let first_pending = (0..self.instructions.len()).find(|&i| !self.record.is_done(i));
        Some(first_pending.unwrap_or(self.instructions.len() - 1))
    }

    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.current_index().map(|i| &self.instructions[i])
    }

    pub fn completed_count(&self) -> usize {
        (0..self.instructions.len())
            .filter(|&i| self.record.is_done(i))
            .count()
    }

    pub fn is_completed(&self) -> bool {
        !self.instructions.is_empty() && self.completed_count() == self.instructions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(n: usize) -> ProgressTracker {
        ProgressTracker::new(
            (0..n)
                .map(|i| Instruction {
                    text: format!("step {}", i),
                })
                .collect(),
        )
    }

    #[test]
    fn fresh_tracker_starts_at_zero() {
        let t = tracker(4);
        assert_eq!(t.current_index(), Some(0));
        assert!(!t.is_completed());
        assert_eq!(t.completed_count(), 0);
    }

    #[test]
    fn all_done_points_at_last_step() {
        let mut t = tracker(3);
        for i in 0..3 {
            assert_eq!(t.toggle(i), Ok(StepState::Done));
        }
        assert_eq!(t.current_index(), Some(2));
        assert_eq!(t.current_instruction().unwrap().text, "step 2");
        assert!(t.is_completed());
    }

    #[test]
    fn double_toggle_restores_pending() {
        let mut t = tracker(3);
        t.toggle(0).unwrap();
        let before = t.clone();

        assert_eq!(t.toggle(1), Ok(StepState::Done));
        assert_eq!(t.toggle(1), Ok(StepState::Pending));

        for i in 0..3 {
            assert_eq!(t.state(i), before.state(i));
        }
        assert_eq!(t.current_index(), Some(1));
    }

    #[test]
    fn out_of_order_ticks_move_current_step() {
        let mut t = tracker(4);
        t.toggle(2).unwrap();
        assert_eq!(t.current_index(), Some(0));

        t.toggle(0).unwrap();
        t.toggle(1).unwrap();
        assert_eq!(t.current_index(), Some(3));

        t.toggle(0).unwrap();
        assert_eq!(t.current_index(), Some(0));
        assert!(!t.is_completed());
    }

    #[test]
    fn toggle_out_of_range_fails() {
        let mut t = tracker(2);
        assert_eq!(
            t.toggle(2),
            Err(ProgressError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(t.completed_count(), 0);
        assert_eq!(t.state(5), None);
    }

    #[test]
    fn empty_list_is_never_completed() {
        let mut t = tracker(0);
        assert_eq!(t.current_index(), None);
        assert!(t.current_instruction().is_none());
        assert!(!t.is_completed());
        assert!(t.toggle(0).is_err());
    }

    #[test]
    fn reset_clears_every_flag() {
        let mut t = tracker(3);
        t.toggle(0).unwrap();
        t.toggle(2).unwrap();
        t.reset();
        assert_eq!(t.record(), &ProgressRecord::default());
        assert_eq!(t.current_index(), Some(0));
    }
}

//! Mood/progress submission flow.
//!
//! The flow is an explicit state machine; the acknowledgment auto-reset
//! timer lives with the hosting surface, which passes back the epoch it
//! was handed at submission time. A stale epoch (the view re-submitted or
//! went away) makes the reset a no-op, so a fired timer can never mutate
//! state that no longer has an observer.

use serde::{Deserialize, Serialize};

use crate::MoodLevel;

/// The one notification produced by a submission, tagged with the epoch
/// the host must return when its reset timer fires.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSubmission {
    pub level: MoodLevel,
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoodFlow {
    selected: Option<MoodLevel>,
    acknowledged: bool,
    epoch: u64,
}

impl MoodFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<MoodLevel> {
        self.selected
    }

    /// Whether the thank-you acknowledgment is currently showing.
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Record or replace the pending choice. Never emits anything, and is
    /// inert while the acknowledgment is showing (the picker is hidden).
    pub fn select(&mut self, level: MoodLevel) {
        if self.acknowledged {
            return;
        }
        self.selected = Some(level);
    }

    /// Submit the pending choice, if any.
    ///
    /// Emits exactly one notification per submission and switches to the
    /// acknowledgment state. The host schedules a delayed
    /// [`Self::reset_if_current`] with the returned epoch.
    pub fn submit(&mut self) -> Option<MoodSubmission> {
        if self.acknowledged {
            return None;
        }
        let level = self.selected?;
        self.acknowledged = true;
        self.epoch += 1;
        Some(MoodSubmission {
            level,
            epoch: self.epoch,
        })
    }

    /// Return to the initial no-selection state, but only if `epoch` still
    /// identifies the latest submission. Returns whether a reset happened.
    pub fn reset_if_current(&mut self, epoch: u64) -> bool {
        if !self.acknowledged || epoch != self.epoch {
            return false;
        }
        self.reset();
        true
    }

    /// Unconditional return to the initial state.
    pub fn reset(&mut self) {
        self.selected = None;
        self.acknowledged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_emits_exactly_one_notification() {
        let mut flow = MoodFlow::new();
        flow.select(MoodLevel::Good);
        let submission = flow.submit().unwrap();
        assert_eq!(submission.level, MoodLevel::Good);
        assert!(flow.is_acknowledged());
        // A second submit during the acknowledgment emits nothing.
        assert!(flow.submit().is_none());
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let mut flow = MoodFlow::new();
        assert!(flow.submit().is_none());
        assert!(!flow.is_acknowledged());
    }

    #[test]
    fn test_reselection_replaces_without_emitting() {
        let mut flow = MoodFlow::new();
        flow.select(MoodLevel::Great);
        flow.select(MoodLevel::Overwhelmed);
        assert_eq!(flow.selected(), Some(MoodLevel::Overwhelmed));
        let submission = flow.submit().unwrap();
        assert_eq!(submission.level, MoodLevel::Overwhelmed);
    }

    #[test]
    fn test_reset_with_current_epoch_clears_state() {
        let mut flow = MoodFlow::new();
        flow.select(MoodLevel::Okay);
        let submission = flow.submit().unwrap();
        assert!(flow.reset_if_current(submission.epoch));
        assert_eq!(flow.selected(), None);
        assert!(!flow.is_acknowledged());
    }

    #[test]
    fn test_stale_epoch_reset_is_ignored() {
        let mut flow = MoodFlow::new();
        flow.select(MoodLevel::Okay);
        let first = flow.submit().unwrap();
        flow.reset_if_current(first.epoch);

        // A second submission supersedes the first timer.
        flow.select(MoodLevel::Struggling);
        let second = flow.submit().unwrap();
        assert!(!flow.reset_if_current(first.epoch));
        assert!(flow.is_acknowledged());
        assert!(flow.reset_if_current(second.epoch));
    }

    #[test]
    fn test_select_during_acknowledgment_is_inert() {
        let mut flow = MoodFlow::new();
        flow.select(MoodLevel::Good);
        flow.submit().unwrap();
        flow.select(MoodLevel::Great);
        assert_eq!(flow.selected(), Some(MoodLevel::Good));
    }
}

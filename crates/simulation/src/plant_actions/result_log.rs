//! Ring-buffer log of recently executed plant actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64 `(PlantAction,
//! ActionResult)` pairs, giving callers (driver, tests, UI) a way to inspect
//! what happened to their requests without polling the ECS every tick.

use bevy::prelude::*;

use super::{ActionResult, PlantAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(PlantAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair. If the buffer is full the oldest
    /// entry is evicted.
    pub fn push(&mut self, action: PlantAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
    }

    /// Return the last `n` entries (or fewer if the log is shorter).
    pub fn last_n(&self, n: usize) -> &[(PlantAction, ActionResult)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant_actions::{ActionError, ActionResult, PlantAction};

    #[test]
    fn push_and_last_n() {
        let mut log = ActionResultLog::default();
        log.push(PlantAction::SetPaused { paused: true }, ActionResult::Accepted);
        log.push(
            PlantAction::SetSpeed { speed: 0 },
            ActionResult::Rejected(ActionError::InvalidParameter("speed".into())),
        );

        let last = log.last_n(1);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].0, PlantAction::SetSpeed { speed: 0 });

        let all = log.last_n(10);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ActionResultLog::default();
        for i in 0..70 {
            log.push(PlantAction::SetSpeed { speed: i }, ActionResult::Accepted);
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        // The oldest retained should be speed=6 (70 - 64).
        let first = &log.last_n(MAX_ENTRIES)[0];
        assert_eq!(first.0, PlantAction::SetSpeed { speed: 6 });
    }

    #[test]
    fn clear_empties_log() {
        let mut log = ActionResultLog::default();
        log.push(PlantAction::Reset, ActionResult::Accepted);
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }
}

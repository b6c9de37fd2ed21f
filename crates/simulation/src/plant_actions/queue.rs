use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::PlantAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Tick counter value when the request was filed (diagnostics only; the
    /// executor applies whatever is pending at the next tick boundary).
    pub tick: u64,
    pub source: ActionSource,
    pub action: PlantAction,
}

/// FIFO buffer between external callers and the simulation. Requests may be
/// pushed at any time; they are drained only by the PreSim executor, so the
/// grid never changes shape while a tick is in flight.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, tick: u64, source: ActionSource, action: PlantAction) {
        self.pending.push(QueuedAction {
            tick,
            source,
            action,
        });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::StructureKind;

    #[test]
    fn push_and_drain_preserves_fifo() {
        let mut queue = ActionQueue::default();
        queue.push(10, ActionSource::Player, PlantAction::SetPaused { paused: true });
        queue.push(
            10,
            ActionSource::Agent,
            PlantAction::Build {
                pos: (7, 7),
                kind: StructureKind::FuelRod,
            },
        );
        queue.push(11, ActionSource::Player, PlantAction::Demolish { pos: (7, 7) });

        assert_eq!(queue.len(), 3);
        assert!(!queue.is_empty());

        let drained = queue.drain();
        assert!(queue.is_empty());
        assert_eq!(drained.len(), 3);

        assert_eq!(drained[0].tick, 10);
        assert_eq!(drained[0].source, ActionSource::Player);
        assert_eq!(drained[0].action, PlantAction::SetPaused { paused: true });

        assert_eq!(
            drained[1].action,
            PlantAction::Build {
                pos: (7, 7),
                kind: StructureKind::FuelRod
            }
        );

        assert_eq!(drained[2].tick, 11);
        assert_eq!(drained[2].action, PlantAction::Demolish { pos: (7, 7) });
    }
}

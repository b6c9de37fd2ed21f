use serde::{Deserialize, Serialize};

use crate::structures::StructureKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlantAction {
    Build {
        pos: (u32, u32),
        kind: StructureKind,
    },
    Demolish {
        pos: (u32, u32),
    },
    SetPaused {
        paused: bool,
    },
    SetSpeed {
        speed: u32,
    },
    /// Tear down every structure, clear all heat, and restore funds, tier,
    /// pool, and clock to session defaults. Actions queued behind a reset
    /// are discarded with it.
    Reset,
}

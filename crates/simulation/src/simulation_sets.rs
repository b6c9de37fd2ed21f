//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! These sets establish a contract for system execution order within the
//! `FixedUpdate` schedule. Plugins place their systems into the appropriate
//! set so that inter-plugin ordering is explicit and testable rather than
//! relying on implicit timing assumptions.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counter and queued action execution. The grid never
//!   changes shape outside this phase, so everything downstream reads a
//!   stable layout for the whole tick.
//! * **Simulation** – Heat generation, diffusion, exchangers, ventilators,
//!   turbines, substations, pool settlement, tier progression. Systems that
//!   write a shared grid resource carry an explicit `.after()` on the system
//!   that feeds them.
//! * **PostSim** – Invariant guards, aggregate stats, and the snapshot.
//!   Downstream consumers (driver, tests) read only PostSim output.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`. Individual
/// plugins use `.in_set(SimulationSet::X)` when registering their systems,
/// retaining the ability to add fine-grained `.after()` / `.before()`
/// constraints within the same phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pre-simulation setup: tick counter, queued build/demolish execution.
    PreSim,
    /// Core simulation: the heat chain and the power/economy chain.
    Simulation,
    /// Post-simulation aggregation: invariants, stats, snapshot.
    PostSim,
}

pub struct SimulationSetsPlugin;

impl Plugin for SimulationSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );
    }
}

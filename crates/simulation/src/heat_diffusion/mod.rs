//! Conductive heat diffusion between orthogonally adjacent cells.
//!
//! The pass is snapshot-then-apply: all pairwise flows are computed against a
//! frozen copy of the pre-tick heat values and applied as one batch of
//! deltas, so cell iteration order can never affect the result. Flow across
//! a pair is scaled by the lower of the two cells' conductivities; an
//! insulator (conductivity 0) halts flow in that direction entirely.

mod flows;
mod system;
#[cfg(test)]
mod tests;

pub use flows::{accumulate_flows, DIFFUSION_RATE};
pub use system::diffuse_heat;

use bevy::prelude::*;

use crate::simulation_sets::SimulationSet;

pub struct HeatDiffusionPlugin;

impl Plugin for HeatDiffusionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            diffuse_heat
                .after(crate::fuel_rods::generate_heat)
                .in_set(SimulationSet::Simulation),
        );
    }
}

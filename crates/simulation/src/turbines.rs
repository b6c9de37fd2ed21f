//! Heat-to-power conversion.
//!
//! Each turbine reads its own cell's heat and converts along a saturating
//! curve: output rises with heat but flattens toward `TURBINE_MAX_POWER`, so
//! running cells ever hotter pays off less and less. One unit of produced
//! power consumes one unit of heat, and `TURBINE_MAX_POWER < TURBINE_HALF_SAT`
//! guarantees the curve never asks for more heat than the cell holds.

use bevy::prelude::*;

use crate::heat::HeatGrid;
use crate::power::PowerPool;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

/// Saturation ceiling of the conversion curve (power per tick).
pub const TURBINE_MAX_POWER: f32 = 40.0;

/// Cell heat at which a turbine produces half its ceiling.
pub const TURBINE_HALF_SAT: f32 = 60.0;

/// Power produced from a cell holding `heat`. Monotonic increasing,
/// saturating, and strictly below `heat` for all positive inputs.
pub fn turbine_power(heat: f32) -> f32 {
    if heat <= 0.0 {
        return 0.0;
    }
    TURBINE_MAX_POWER * heat / (heat + TURBINE_HALF_SAT)
}

pub fn convert_heat(
    mut heat: ResMut<HeatGrid>,
    mut pool: ResMut<PowerPool>,
    structures: Query<&Structure>,
) {
    for structure in &structures {
        if structure.kind != StructureKind::Turbine {
            continue;
        }
        let cell_heat = heat.get(structure.grid_x, structure.grid_y);
        let power = turbine_power(cell_heat);
        if power <= 0.0 {
            continue;
        }
        heat.set(structure.grid_x, structure.grid_y, (cell_heat - power).max(0.0));
        pool.deposit(power);
    }
}

pub struct TurbinesPlugin;

impl Plugin for TurbinesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            convert_heat
                .after(crate::power::begin_power_tick)
                .in_set(SimulationSet::Simulation),
        );
    }
}

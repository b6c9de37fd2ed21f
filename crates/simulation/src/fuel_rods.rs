//! Heat generation phase: every fuel rod injects a fixed amount of heat
//! into its own cell's accumulator, independent of neighbors, clamped to
//! the rod's cell capacity.

use bevy::prelude::*;

use crate::heat::HeatGrid;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

pub fn generate_heat(mut heat: ResMut<HeatGrid>, structures: Query<&Structure>) {
    for structure in &structures {
        if structure.kind != StructureKind::FuelRod {
            continue;
        }
        let current = heat.get(structure.grid_x, structure.grid_y);
        let capacity = structure.kind.heat_capacity();
        if current >= capacity {
            // Cell saturated; the rod idles until diffusion makes room.
            continue;
        }
        let next = (current + structure.kind.heat_output_per_tick()).min(capacity);
        heat.set(structure.grid_x, structure.grid_y, next);
    }
}

pub struct FuelRodsPlugin;

impl Plugin for FuelRodsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            generate_heat.in_set(SimulationSet::Simulation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injection_is_clamped_to_capacity() {
        let kind = StructureKind::FuelRod;
        let capacity = kind.heat_capacity();
        let output = kind.heat_output_per_tick();

        // One tick below capacity: the partial injection may not overshoot.
        let near = capacity - output / 2.0;
        assert_eq!((near + output).min(capacity), capacity);

        // Far from capacity: full output lands.
        let cold = 0.0;
        assert_eq!((cold + output).min(capacity), output);
    }
}

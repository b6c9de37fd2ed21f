//! Ventilators are pure heat sinks: each removes a fixed amount from its own
//! cell per tick, floored at zero. They run after the exchangers so vented
//! heat cannot be resurrected within the same tick.

use bevy::prelude::*;

use crate::heat::HeatGrid;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

pub fn run_ventilators(mut heat: ResMut<HeatGrid>, structures: Query<&Structure>) {
    for structure in &structures {
        if structure.kind != StructureKind::Ventilator {
            continue;
        }
        let current = heat.get(structure.grid_x, structure.grid_y);
        let next = (current - structure.kind.vent_rate()).max(0.0);
        heat.set(structure.grid_x, structure.grid_y, next);
    }
}

pub struct VentilatorsPlugin;

impl Plugin for VentilatorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            run_ventilators
                .after(crate::heat_exchangers::run_heat_exchangers)
                .in_set(SimulationSet::Simulation),
        );
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::heat::HeatGrid;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

/// Aggregate plant figures, recomputed every tick in PostSim. Everything
/// here is derived; resetting the plant resets these for free.
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct PlantStats {
    pub fuel_rods: u32,
    pub ventilators: u32,
    pub heat_exchangers: u32,
    pub insulators: u32,
    pub turbines: u32,
    pub substations: u32,
    pub total_heat: f32,
    pub hottest_cell: f32,
}

impl PlantStats {
    pub fn structure_count(&self) -> u32 {
        self.fuel_rods
            + self.ventilators
            + self.heat_exchangers
            + self.insulators
            + self.turbines
            + self.substations
    }
}

pub fn update_stats(
    heat: Res<HeatGrid>,
    structures: Query<&Structure>,
    mut stats: ResMut<PlantStats>,
) {
    *stats = PlantStats::default();
    for structure in &structures {
        match structure.kind {
            StructureKind::FuelRod => stats.fuel_rods += 1,
            StructureKind::Ventilator => stats.ventilators += 1,
            StructureKind::HeatExchanger => stats.heat_exchangers += 1,
            StructureKind::Insulator => stats.insulators += 1,
            StructureKind::Turbine => stats.turbines += 1,
            StructureKind::Substation => stats.substations += 1,
        }
    }
    stats.total_heat = heat.total();
    stats.hottest_cell = heat.hottest();
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlantStats>().add_systems(
            FixedUpdate,
            update_stats
                .after(crate::invariant_checks::check_heat_and_funds)
                .in_set(SimulationSet::PostSim),
        );
    }
}

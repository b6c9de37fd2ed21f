use bevy::prelude::*;

pub mod config;
pub mod economy;
pub mod fuel_rods;
pub mod grid;
pub mod heat;
pub mod heat_diffusion;
pub mod heat_exchangers;
pub mod invariant_checks;
pub mod plant_actions;
pub mod power;
pub mod sim_clock;
pub mod simulation_sets;
pub mod snapshot;
pub mod stats;
pub mod structures;
pub mod substations;
pub mod tiers;
pub mod turbines;
pub mod ventilators;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

use std::time::Duration;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented once per FixedUpdate pass.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // One FixedUpdate pass == one logical tick, from the very first frame.
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f64(
            config::TICK_SECONDS,
        )));

        // Core resources and systems that don't belong to any feature
        app.init_resource::<TickCounter>()
            .init_resource::<grid::PlantGrid>()
            .init_resource::<heat::HeatGrid>()
            .init_resource::<economy::PlantBudget>()
            .add_systems(
                FixedUpdate,
                advance_tick
                    .before(plant_actions::execute_queued_actions)
                    .in_set(SimulationSet::PreSim),
            );

        // Phase contract and tick boundary
        app.add_plugins((
            simulation_sets::SimulationSetsPlugin,
            sim_clock::SimClockPlugin,
            plant_actions::PlantActionsPlugin,
        ));

        // Heat chain
        app.add_plugins((
            fuel_rods::FuelRodsPlugin,
            heat_diffusion::HeatDiffusionPlugin,
            heat_exchangers::HeatExchangersPlugin,
            ventilators::VentilatorsPlugin,
        ));

        // Power and economy chain
        app.add_plugins((
            power::PowerPlugin,
            turbines::TurbinesPlugin,
            substations::SubstationsPlugin,
            tiers::TiersPlugin,
        ));

        // Aggregation and reporting
        app.add_plugins((
            invariant_checks::InvariantChecksPlugin,
            stats::StatsPlugin,
            snapshot::SnapshotPlugin,
        ));
    }
}

//! Runtime invariant guards for heat, funds, and grid/entity consistency.
//!
//! These run every tick in PostSim and validate that core values haven't
//! become corrupted (NaN, negative, or inconsistent). On violation, a
//! warning is logged, the value is clamped to a safe default, and a counter
//! is bumped for tests; debug builds additionally assert.

use bevy::prelude::*;

use crate::economy::PlantBudget;
use crate::grid::PlantGrid;
use crate::heat::HeatGrid;
use crate::simulation_sets::SimulationSet;
use crate::structures::Structure;

/// Tracks the number of invariant violations detected during the last
/// validation pass. Used by integration tests.
#[derive(Resource, Default, Debug)]
pub struct InvariantViolations {
    pub negative_heat: u32,
    pub non_finite_heat: u32,
    pub negative_funds: u32,
    pub occupancy_mismatch: u32,
}

/// Heat must be finite and non-negative; funds must be non-negative.
pub fn check_heat_and_funds(
    mut heat: ResMut<HeatGrid>,
    mut budget: ResMut<PlantBudget>,
    mut violations: ResMut<InvariantViolations>,
) {
    violations.negative_heat = 0;
    violations.non_finite_heat = 0;
    violations.negative_funds = 0;

    for value in &mut heat.heat {
        if !value.is_finite() {
            warn!("Invariant violation: heat is {value}. Resetting to 0.");
            debug_assert!(false, "non-finite heat");
            *value = 0.0;
            violations.non_finite_heat += 1;
        } else if *value < 0.0 {
            warn!("Invariant violation: negative heat {value}. Clamping.");
            debug_assert!(false, "negative heat");
            *value = 0.0;
            violations.negative_heat += 1;
        }
    }

    if budget.funds < 0 {
        warn!(
            "Invariant violation: funds {} below zero. Resetting to 0.",
            budget.funds
        );
        debug_assert!(false, "negative funds");
        budget.funds = 0;
        violations.negative_funds += 1;
    }
}

/// Every occupied cell references exactly one live structure entity and no
/// entity is referenced twice. Detection only — there is no safe automatic
/// repair for a torn occupancy reference.
pub fn check_occupancy(
    grid: Res<PlantGrid>,
    structures: Query<(), With<Structure>>,
    mut violations: ResMut<InvariantViolations>,
) {
    violations.occupancy_mismatch = 0;

    let occupied = grid.occupied_count();
    let entities = structures.iter().count();
    if occupied != entities {
        warn!(
            "Invariant violation: {occupied} occupied cells but {entities} structure entities."
        );
        debug_assert!(false, "occupancy mismatch");
        violations.occupancy_mismatch += 1;
    }

    let mut seen: Vec<Entity> = Vec::with_capacity(occupied);
    for cell in &grid.cells {
        if let Some(entity) = cell.structure_id {
            if seen.contains(&entity) {
                warn!("Invariant violation: entity {entity} referenced by two cells.");
                debug_assert!(false, "double-referenced structure");
                violations.occupancy_mismatch += 1;
            } else {
                seen.push(entity);
            }
        }
    }
}

pub struct InvariantChecksPlugin;

impl Plugin for InvariantChecksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InvariantViolations>().add_systems(
            FixedUpdate,
            (check_heat_and_funds, check_occupancy).in_set(SimulationSet::PostSim),
        );
    }
}

use crate::economy::PlantBudget;
use crate::config::{GRID_SIZE, STARTING_FUNDS};
use crate::invariant_checks::InvariantViolations;
use crate::test_harness::TestPlant;

#[test]
fn fresh_plant_is_cold_empty_and_funded() {
    let mut plant = TestPlant::new();
    assert_eq!(plant.tick_counter(), 0);
    assert_eq!(plant.total_heat(), 0.0);
    assert_eq!(plant.structure_count(), 0);
    assert_eq!(plant.funds(), STARTING_FUNDS);
    assert_eq!(plant.tier(), 0);
    assert_eq!(plant.grid().width, GRID_SIZE);
    assert_eq!(plant.grid().height, GRID_SIZE);
}

#[test]
fn each_tick_call_advances_exactly_one_step() {
    let mut plant = TestPlant::new();
    plant.tick(1);
    assert_eq!(plant.tick_counter(), 1);
    plant.tick(7);
    assert_eq!(plant.tick_counter(), 8);
}

#[test]
fn idle_plant_stays_clean_over_many_ticks() {
    let mut plant = TestPlant::new();
    plant.tick(100);
    assert_eq!(plant.total_heat(), 0.0);
    assert_eq!(plant.funds(), STARTING_FUNDS);

    let violations = plant.resource::<InvariantViolations>();
    assert_eq!(violations.negative_heat, 0);
    assert_eq!(violations.negative_funds, 0);
    assert_eq!(violations.occupancy_mismatch, 0);

    // Budget bookkeeping untouched.
    let budget = plant.resource::<PlantBudget>();
    assert_eq!(budget.cumulative_spent, 0);
    assert_eq!(budget.cumulative_earnings, 0);
}

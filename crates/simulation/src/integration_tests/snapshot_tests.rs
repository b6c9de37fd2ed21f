use crate::config::TOTAL_CELLS;
use crate::plant_actions::PlantAction;
use crate::snapshot::PlantSnapshot;
use crate::structures::StructureKind;
use crate::test_harness::TestPlant;

#[test]
fn snapshot_reflects_the_last_completed_tick() {
    let mut plant = TestPlant::new();
    plant.request(PlantAction::Build {
        pos: (7, 7),
        kind: StructureKind::FuelRod,
    });
    plant.tick(3);

    let snapshot = plant.snapshot();
    assert_eq!(snapshot.tick, 3);
    assert_eq!(snapshot.funds, plant.funds());
    assert_eq!(snapshot.tier, 0);
    assert_eq!(snapshot.structure_count, 1);
    assert_eq!(snapshot.cells.len(), TOTAL_CELLS);

    // The fuel rod's cell reports its kind and accumulated heat.
    let cell = snapshot
        .cells
        .iter()
        .find(|c| c.x == 7 && c.y == 7)
        .expect("cell (7,7) missing from snapshot");
    assert_eq!(cell.kind, Some(StructureKind::FuelRod));
    assert!(cell.heat > 0.0);
    assert!(snapshot.total_heat > 0.0);

    // Overview map mirrors the grid.
    assert_eq!(snapshot.overview_map[7].chars().nth(7), Some('F'));
    assert_eq!(snapshot.overview_map[0].chars().nth(0), Some('.'));

    // The accepted build shows up in the recent results.
    assert!(snapshot
        .recent_action_results
        .iter()
        .any(|entry| entry.accepted && entry.action_summary.contains("Build")));
}

#[test]
fn snapshot_power_stats_track_the_pool() {
    let mut plant = TestPlant::new()
        .with_heat(8, 8, 400.0)
        .with_structure(8, 8, StructureKind::Turbine)
        .with_structure(1, 1, StructureKind::Substation);

    plant.tick(5);

    let snapshot = plant.snapshot();
    assert!(snapshot.power.cumulative_produced > 0.0);
    assert!(snapshot.power.cumulative_sold > 0.0);
    assert_eq!(
        snapshot.power.cumulative_produced,
        plant.pool().cumulative_produced
    );
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut plant = TestPlant::new().with_structure(2, 3, StructureKind::Substation);
    plant.tick(1);

    let json = plant.snapshot().to_json().expect("serialization failed");
    let parsed: PlantSnapshot = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(parsed.tick, 1);
    assert_eq!(parsed.structure_count, 1);
    assert_eq!(parsed.cells.len(), TOTAL_CELLS);
}

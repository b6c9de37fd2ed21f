//! Builds a [`PlantSnapshot`] from ECS resources each tick.
//!
//! The `build_snapshot` system runs in `FixedUpdate` / `SimulationSet::PostSim`
//! so that all simulation writes have settled before the state is captured.
//! External consumers (driver, UI, tests) read the resource at any time and
//! always see the state as of the last completed tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::economy::PlantBudget;
use crate::grid::PlantGrid;
use crate::heat::HeatGrid;
use crate::plant_actions::ActionResultLog;
use crate::power::PowerPool;
use crate::sim_clock::SimClock;
use crate::simulation_sets::SimulationSet;
use crate::stats::PlantStats;
use crate::structures::StructureKind;
use crate::tiers::TechTier;
use crate::TickCounter;

/// How many recent action outcomes the snapshot carries.
const RECENT_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: usize,
    pub y: usize,
    pub kind: Option<StructureKind>,
    pub heat: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PowerStatsSnapshot {
    pub produced_this_tick: f32,
    pub sold_this_tick: f32,
    pub lost_this_tick: f32,
    pub cumulative_produced: f64,
    pub cumulative_sold: f64,
    pub cumulative_lost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResultEntry {
    pub action_summary: String,
    pub accepted: bool,
}

/// The most recent plant observation, refreshed every tick in PostSim.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub tick: u64,
    pub paused: bool,
    pub speed: f32,
    pub funds: i64,
    pub tier: u32,
    pub total_heat: f32,
    pub structure_count: u32,
    pub cells: Vec<CellSnapshot>,
    pub power: PowerStatsSnapshot,
    pub recent_action_results: Vec<ActionResultEntry>,
    /// One row per grid row; structure glyphs over `.` for empty cells.
    pub overview_map: Vec<String>,
}

impl PlantSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Snapshot the plant state into the [`PlantSnapshot`] resource.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    tick: Res<TickCounter>,
    clock: Res<SimClock>,
    grid: Res<PlantGrid>,
    heat: Res<HeatGrid>,
    budget: Res<PlantBudget>,
    tier: Res<TechTier>,
    pool: Res<PowerPool>,
    stats: Res<PlantStats>,
    action_log: Res<ActionResultLog>,
    mut snapshot: ResMut<PlantSnapshot>,
) {
    let mut cells = Vec::with_capacity(grid.cells.len());
    for y in 0..grid.height {
        for x in 0..grid.width {
            cells.push(CellSnapshot {
                x,
                y,
                kind: grid.get(x, y).kind,
                heat: heat.get(x, y),
            });
        }
    }

    let recent_action_results = action_log
        .last_n(RECENT_RESULTS)
        .iter()
        .map(|(action, result)| {
            let mut summary = format!("{action:?}");
            summary.truncate(100);
            ActionResultEntry {
                action_summary: summary,
                accepted: result.is_accepted(),
            }
        })
        .collect();

    *snapshot = PlantSnapshot {
        tick: tick.0,
        paused: clock.paused,
        speed: clock.speed,
        funds: budget.funds,
        tier: tier.level,
        total_heat: stats.total_heat,
        structure_count: stats.structure_count(),
        cells,
        power: PowerStatsSnapshot {
            produced_this_tick: pool.produced_this_tick,
            sold_this_tick: pool.sold_this_tick,
            lost_this_tick: pool.lost_this_tick,
            cumulative_produced: pool.cumulative_produced,
            cumulative_sold: pool.cumulative_sold,
            cumulative_lost: pool.cumulative_lost,
        },
        recent_action_results,
        overview_map: build_overview_map(&grid),
    };
}

/// Compact textual view of the floor, one row per grid row.
pub fn build_overview_map(grid: &PlantGrid) -> Vec<String> {
    let mut rows = Vec::with_capacity(grid.height);
    for y in 0..grid.height {
        let mut row = String::with_capacity(grid.width);
        for x in 0..grid.width {
            row.push(grid.get(x, y).kind.map_or('.', StructureKind::glyph));
        }
        rows.push(row);
    }
    rows
}

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlantSnapshot>().add_systems(
            FixedUpdate,
            build_snapshot
                .after(crate::stats::update_stats)
                .in_set(SimulationSet::PostSim),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_map_marks_structures() {
        let mut grid = PlantGrid::default();
        grid.get_mut(2, 1).kind = Some(StructureKind::Turbine);

        let map = build_overview_map(&grid);
        assert_eq!(map.len(), grid.height);
        assert_eq!(map[1].chars().nth(2), Some('T'));
        assert_eq!(map[0].chars().nth(2), Some('.'));
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = PlantSnapshot::default();
        let json = snapshot.to_json().expect("snapshot must serialize");
        assert!(json.contains("\"funds\""));
        assert!(json.contains("\"overview_map\""));
    }
}

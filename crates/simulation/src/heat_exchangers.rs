//! Heat exchangers actively pull their cell toward thermal equilibrium with
//! the orthogonal neighbor whose heat differs the most, moving a fixed
//! fraction of the gap per tick. Transfers are strictly conserving.
//!
//! Exchangers apply sequentially in `(y, x)` order so overlapping exchanger
//! clusters resolve the same way every tick.

use bevy::prelude::*;

use crate::grid::PlantGrid;
use crate::heat::HeatGrid;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

pub fn run_heat_exchangers(
    grid: Res<PlantGrid>,
    mut heat: ResMut<HeatGrid>,
    structures: Query<&Structure>,
) {
    let mut exchangers: Vec<(usize, usize)> = structures
        .iter()
        .filter(|s| s.kind == StructureKind::HeatExchanger)
        .map(|s| (s.grid_y, s.grid_x))
        .collect();
    exchangers.sort_unstable();

    let rate = StructureKind::HeatExchanger.exchange_rate();

    for (y, x) in exchangers {
        let own = heat.get(x, y);

        // Pick the non-insulated neighbor with the largest gap.
        let (neighbors, count) = grid.neighbors4(x, y);
        let mut best: Option<(usize, usize, f32)> = None;
        for &(nx, ny) in &neighbors[..count] {
            if grid.get(nx, ny).blocks_heat() {
                continue;
            }
            let gap = heat.get(nx, ny) - own;
            if best.is_none_or(|(_, _, g)| gap.abs() > g.abs()) {
                best = Some((nx, ny, gap));
            }
        }

        let Some((nx, ny, gap)) = best else {
            continue;
        };

        // Move toward the midpoint: a transfer of `gap / 2` would equalize
        // the pair outright, so scale that by the exchange rate.
        let transfer = gap * 0.5 * rate;
        heat.set(x, y, own + transfer);
        let neighbor_after = heat.get(nx, ny) - transfer;
        heat.set(nx, ny, neighbor_after);
    }
}

pub struct HeatExchangersPlugin;

impl Plugin for HeatExchangersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            run_heat_exchangers
                .after(crate::heat_diffusion::diffuse_heat)
                .in_set(SimulationSet::Simulation),
        );
    }
}

use bevy::prelude::*;

use crate::grid::PlantGrid;
use crate::heat::HeatGrid;

use super::flows::{accumulate_flows, DIFFUSION_RATE};

/// Diffusion pass. Runs after heat generation every tick.
///
/// The snapshot and delta buffers are `Local` scratch space reused across
/// ticks to avoid per-tick allocation.
pub fn diffuse_heat(
    grid: Res<PlantGrid>,
    mut heat: ResMut<HeatGrid>,
    mut snapshot: Local<Vec<f32>>,
    mut deltas: Local<Vec<f32>>,
    mut conductivity: Local<Vec<f32>>,
) {
    let len = heat.heat.len();
    if snapshot.len() != len {
        *snapshot = vec![0.0; len];
        *deltas = vec![0.0; len];
        *conductivity = vec![1.0; len];
    }

    snapshot.copy_from_slice(&heat.heat);
    deltas.fill(0.0);
    for (factor, cell) in conductivity.iter_mut().zip(grid.cells.iter()) {
        *factor = cell.conductivity();
    }

    accumulate_flows(
        &snapshot,
        &conductivity,
        grid.width,
        grid.height,
        DIFFUSION_RATE,
        &mut deltas,
    );

    for (value, delta) in heat.heat.iter_mut().zip(deltas.iter()) {
        let next = *value + delta;
        debug_assert!(next >= -f32::EPSILON, "diffusion drove heat negative");
        *value = next.max(0.0);
    }
}

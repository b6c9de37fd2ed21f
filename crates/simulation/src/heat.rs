use bevy::prelude::*;

use crate::config::GRID_SIZE;

/// Per-cell heat field, separate from occupancy. Values are non-negative;
/// the diffusion step and the structure behaviors maintain that invariant,
/// and the PostSim guard clamps on violation.
#[derive(Resource, Debug, Clone)]
pub struct HeatGrid {
    pub heat: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl Default for HeatGrid {
    fn default() -> Self {
        Self {
            heat: vec![0.0; GRID_SIZE * GRID_SIZE],
            width: GRID_SIZE,
            height: GRID_SIZE,
        }
    }
}

impl HeatGrid {
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.heat[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, val: f32) {
        self.heat[y * self.width + x] = val;
    }

    /// Sum across all cells. Diffusion leaves this unchanged; only sources,
    /// sinks, and turbines move it.
    pub fn total(&self) -> f32 {
        self.heat.iter().sum()
    }

    pub fn hottest(&self) -> f32 {
        self.heat.iter().copied().fold(0.0, f32::max)
    }

    pub fn clear(&mut self) {
        self.heat.fill(0.0);
    }
}

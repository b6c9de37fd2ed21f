use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::simulation_sets::SimulationSet;

/// Plant-wide power pool plus running totals.
///
/// Turbines deposit into `available` during the conversion step; substations
/// drain it during the sale step; whatever is left at settlement is lost for
/// the tick — the pool never carries power across ticks.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerPool {
    /// Power currently in the pool (valid within a single tick).
    pub available: f32,
    pub produced_this_tick: f32,
    pub sold_this_tick: f32,
    pub lost_this_tick: f32,
    pub cumulative_produced: f64,
    pub cumulative_sold: f64,
    pub cumulative_lost: f64,
    /// Fractional credits carried between ticks so integer money credits
    /// lose nothing over time.
    pub sale_remainder: f64,
}

impl PowerPool {
    pub fn begin_tick(&mut self) {
        self.produced_this_tick = 0.0;
        self.sold_this_tick = 0.0;
        self.lost_this_tick = 0.0;
    }

    pub fn deposit(&mut self, power: f32) {
        self.available += power;
        self.produced_this_tick += power;
        self.cumulative_produced += power as f64;
    }

    /// Take up to `cap` power out of the pool; returns the amount drained.
    pub fn drain(&mut self, cap: f32) -> f32 {
        let drained = self.available.min(cap).max(0.0);
        self.available -= drained;
        self.sold_this_tick += drained;
        self.cumulative_sold += drained as f64;
        drained
    }

    /// Discard whatever the substations did not take this tick.
    pub fn settle(&mut self) {
        let lost = self.available;
        self.lost_this_tick = lost;
        self.cumulative_lost += lost as f64;
        self.available = 0.0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Clears the per-tick counters before the turbines run.
pub fn begin_power_tick(mut pool: ResMut<PowerPool>) {
    pool.begin_tick();
}

/// Runs after the sale step; the per-tick counters stay readable until the
/// next `begin_power_tick`.
pub fn settle_power_pool(mut pool: ResMut<PowerPool>) {
    pool.settle();
}

pub struct PowerPlugin;

impl Plugin for PowerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PowerPool>().add_systems(
            FixedUpdate,
            (
                begin_power_tick
                    .after(crate::ventilators::run_ventilators)
                    .before(crate::turbines::convert_heat),
                settle_power_pool.after(crate::substations::sell_power),
            )
                .in_set(SimulationSet::Simulation),
        );
    }
}

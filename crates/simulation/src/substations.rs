//! Power-to-money conversion.
//!
//! Each substation drains the plant pool up to its per-tick intake cap and
//! sells the drained power at a fixed rate. Sale proceeds accumulate as
//! fractional credits in the pool's remainder; only whole credits reach the
//! budget, so integer money stays exact over any horizon.

use bevy::prelude::*;

use crate::economy::PlantBudget;
use crate::power::PowerPool;
use crate::simulation_sets::SimulationSet;
use crate::structures::{Structure, StructureKind};

pub fn sell_power(
    mut pool: ResMut<PowerPool>,
    mut budget: ResMut<PlantBudget>,
    structures: Query<&Structure>,
) {
    let cap = StructureKind::Substation.intake_cap();
    let rate = StructureKind::Substation.credits_per_power();

    for structure in &structures {
        if structure.kind != StructureKind::Substation {
            continue;
        }
        let drained = pool.drain(cap);
        if drained <= 0.0 {
            // Pool ran dry; the remaining substations idle this tick.
            break;
        }
        pool.sale_remainder += drained as f64 * rate;
    }

    let whole = pool.sale_remainder.floor();
    if whole >= 1.0 {
        pool.sale_remainder -= whole;
        budget.credit_earnings(whole as i64);
    }
}

pub struct SubstationsPlugin;

impl Plugin for SubstationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            sell_power
                .after(crate::turbines::convert_heat)
                .in_set(SimulationSet::Simulation),
        );
    }
}

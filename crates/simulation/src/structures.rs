use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tiers::price_multiplier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Constant heat source: injects a fixed amount into its own cell each
    /// tick, clamped to the rod's cell capacity regardless of neighbors.
    FuelRod,
    /// Heat sink: removes a fixed amount from its own cell each tick,
    /// floored at zero.
    Ventilator,
    /// Heat mover: equalizes against the orthogonal neighbor with the
    /// largest heat gap. Conserving — never creates or destroys heat.
    HeatExchanger,
    /// Heat blocker: zero conductivity, diffusion cannot cross it.
    Insulator,
    /// Converts local heat into power on a saturating curve and removes the
    /// converted heat.
    Turbine,
    /// Drains the plant-wide power pool up to a per-tick cap and converts
    /// the drained power into credits.
    Substation,
}

impl StructureKind {
    pub fn name(self) -> &'static str {
        match self {
            StructureKind::FuelRod => "Fuel Rod",
            StructureKind::Ventilator => "Ventilator",
            StructureKind::HeatExchanger => "Heat Exchanger",
            StructureKind::Insulator => "Insulator",
            StructureKind::Turbine => "Turbine",
            StructureKind::Substation => "Substation",
        }
    }

    /// Build cost at tier 0, in whole credits.
    pub fn base_cost(self) -> i64 {
        match self {
            StructureKind::FuelRod => 10,
            StructureKind::Ventilator => 10,
            StructureKind::Insulator => 15,
            StructureKind::HeatExchanger => 25,
            StructureKind::Substation => 40,
            StructureKind::Turbine => 50,
        }
    }

    /// Build cost at the given tech tier, floored to whole credits.
    pub fn cost(self, tier: u32) -> i64 {
        (self.base_cost() as f64 * price_multiplier(tier)).floor() as i64
    }

    /// How readily heat flows across the cell this structure occupies.
    /// 0.0 halts flow entirely; an empty cell counts as 1.0.
    pub fn conductivity(self) -> f32 {
        match self {
            StructureKind::Insulator => 0.0,
            StructureKind::Substation => 0.5,
            StructureKind::Turbine => 0.75,
            StructureKind::FuelRod
            | StructureKind::Ventilator
            | StructureKind::HeatExchanger => 1.0,
        }
    }

    pub fn is_insulating(self) -> bool {
        matches!(self, StructureKind::Insulator)
    }

    /// Heat injected into the structure's own cell each tick.
    pub fn heat_output_per_tick(self) -> f32 {
        match self {
            StructureKind::FuelRod => 8.0,
            _ => 0.0,
        }
    }

    /// Own-cell ceiling for source injection. A fuel rod stops injecting
    /// once its cell sits at capacity; heat arriving from neighbors is not
    /// affected by this value.
    pub fn heat_capacity(self) -> f32 {
        match self {
            StructureKind::FuelRod => 100.0,
            _ => 250.0,
        }
    }

    /// Heat removed from the structure's own cell each tick.
    pub fn vent_rate(self) -> f32 {
        match self {
            StructureKind::Ventilator => 6.0,
            _ => 0.0,
        }
    }

    /// Fraction of the half-gap an exchanger closes per tick.
    pub fn exchange_rate(self) -> f32 {
        match self {
            StructureKind::HeatExchanger => 0.8,
            _ => 0.0,
        }
    }

    /// Maximum power a substation accepts from the pool per tick.
    pub fn intake_cap(self) -> f32 {
        match self {
            StructureKind::Substation => 25.0,
            _ => 0.0,
        }
    }

    /// Exchange rate for power sold through a substation.
    pub fn credits_per_power(self) -> f64 {
        match self {
            StructureKind::Substation => 2.0,
            _ => 0.0,
        }
    }

    /// Single-character glyph for the overview map.
    pub fn glyph(self) -> char {
        match self {
            StructureKind::FuelRod => 'F',
            StructureKind::Ventilator => 'V',
            StructureKind::HeatExchanger => 'X',
            StructureKind::Insulator => 'I',
            StructureKind::Turbine => 'T',
            StructureKind::Substation => 'S',
        }
    }

    pub fn all() -> &'static [StructureKind] {
        &[
            StructureKind::FuelRod,
            StructureKind::Ventilator,
            StructureKind::HeatExchanger,
            StructureKind::Insulator,
            StructureKind::Turbine,
            StructureKind::Substation,
        ]
    }
}

/// Component attached to every placed structure entity. The grid cell holds
/// the authoritative occupancy reference; this component carries the data
/// the per-kind behavior systems iterate over.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub grid_x: usize,
    pub grid_y: usize,
    /// Price actually paid at build time. Demolition refunds are computed
    /// from this, not from the current catalog price, so later tier price
    /// increases never change a refund retroactively.
    pub price_paid: i64,
}

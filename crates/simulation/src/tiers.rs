//! Tech tier progression.
//!
//! The tier is a monotonically non-decreasing level that scales catalog
//! prices for subsequent builds. It advances when lifetime sale earnings
//! cross fixed milestones — outside the power/economy conversion step, which
//! only ever reads it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::economy::PlantBudget;
use crate::simulation_sets::SimulationSet;

/// Lifetime-earnings thresholds; crossing each advances the tier by one.
pub const TIER_MILESTONES: &[i64] = &[500, 2_000, 10_000, 50_000];

/// Price scaling per tier level, floored to whole credits at the call site.
pub fn price_multiplier(tier: u32) -> f64 {
    1.25_f64.powi(tier as i32)
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechTier {
    pub level: u32,
}

impl TechTier {
    pub fn max_level() -> u32 {
        TIER_MILESTONES.len() as u32
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }
}

pub fn advance_tier(budget: Res<PlantBudget>, mut tier: ResMut<TechTier>) {
    while (tier.level as usize) < TIER_MILESTONES.len()
        && budget.cumulative_earnings >= TIER_MILESTONES[tier.level as usize]
    {
        tier.level += 1;
        info!("tech tier advanced to {}", tier.level);
    }
}

pub struct TiersPlugin;

impl Plugin for TiersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TechTier>().add_systems(
            FixedUpdate,
            advance_tier
                .after(crate::substations::sell_power)
                .in_set(SimulationSet::Simulation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_are_strictly_increasing() {
        for pair in TIER_MILESTONES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_price_multiplier_grows() {
        assert_eq!(price_multiplier(0), 1.0);
        let mut prev = 1.0;
        for tier in 1..=TechTier::max_level() {
            let m = price_multiplier(tier);
            assert!(m > prev);
            prev = m;
        }
    }

    #[test]
    fn test_advancement_is_monotonic_and_capped() {
        let mut tier = TechTier::default();
        let mut budget = PlantBudget::default();

        // Earn past the first milestone only.
        budget.credit_earnings(600);
        advance(&mut tier, &budget);
        assert_eq!(tier.level, 1);

        // Earnings never shrink, and neither does the tier.
        advance(&mut tier, &budget);
        assert_eq!(tier.level, 1);

        // Blow past every milestone at once: tier jumps to the cap.
        budget.credit_earnings(1_000_000);
        advance(&mut tier, &budget);
        assert_eq!(tier.level, TechTier::max_level());
    }

    fn advance(tier: &mut TechTier, budget: &PlantBudget) {
        while (tier.level as usize) < TIER_MILESTONES.len()
            && budget.cumulative_earnings >= TIER_MILESTONES[tier.level as usize]
        {
            tier.level += 1;
        }
    }
}

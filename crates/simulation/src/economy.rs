use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::STARTING_FUNDS;

/// Plant treasury in whole credits. `funds` never goes negative: every debit
/// is checked by the caller via `can_afford` before it is applied.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlantBudget {
    pub funds: i64,
    /// Lifetime credits earned through power sales. Drives tier milestones.
    pub cumulative_earnings: i64,
    pub cumulative_spent: i64,
    pub cumulative_refunded: i64,
}

impl Default for PlantBudget {
    fn default() -> Self {
        Self {
            funds: STARTING_FUNDS,
            cumulative_earnings: 0,
            cumulative_spent: 0,
            cumulative_refunded: 0,
        }
    }
}

impl PlantBudget {
    pub fn can_afford(&self, cost: i64) -> bool {
        self.funds >= cost
    }

    pub fn debit(&mut self, cost: i64) {
        debug_assert!(cost >= 0 && self.funds >= cost);
        self.funds -= cost;
        self.cumulative_spent += cost;
    }

    pub fn credit_refund(&mut self, amount: i64) {
        debug_assert!(amount >= 0);
        self.funds += amount;
        self.cumulative_refunded += amount;
    }

    pub fn credit_earnings(&mut self, amount: i64) {
        debug_assert!(amount >= 0);
        self.funds += amount;
        self.cumulative_earnings += amount;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_funds() {
        let budget = PlantBudget::default();
        assert_eq!(budget.funds, STARTING_FUNDS);
        assert_eq!(budget.cumulative_earnings, 0);
    }

    #[test]
    fn test_debit_credit_bookkeeping() {
        let mut budget = PlantBudget::default();
        assert!(budget.can_afford(100));
        assert!(!budget.can_afford(101));

        budget.debit(40);
        assert_eq!(budget.funds, 60);
        assert_eq!(budget.cumulative_spent, 40);

        budget.credit_refund(30);
        assert_eq!(budget.funds, 90);
        assert_eq!(budget.cumulative_refunded, 30);

        budget.credit_earnings(15);
        assert_eq!(budget.funds, 105);
        assert_eq!(budget.cumulative_earnings, 15);
    }
}

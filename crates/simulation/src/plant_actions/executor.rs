//! Action executor system — drains the [`ActionQueue`] at the start of each
//! fixed-update tick and applies every pending [`PlantAction`], recording
//! results in the [`ActionResultLog`].
//!
//! Running in `SimulationSet::PreSim` is what makes placement atomic with
//! respect to the tick: the heat and power phases always see a grid whose
//! shape was fixed before they started. Money moves in the same statement
//! block as the grid mutation, so no observer can see a debit without its
//! structure or a removal without its refund.

use bevy::prelude::*;

use crate::economy::PlantBudget;
use crate::grid::PlantGrid;
use crate::heat::HeatGrid;
use crate::power::PowerPool;
use crate::sim_clock::SimClock;
use crate::structures::{Structure, StructureKind};
use crate::tiers::TechTier;
use crate::config::{REFUND_DEN, REFUND_NUM};

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, PlantAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
#[allow(clippy::too_many_arguments)]
pub fn execute_queued_actions(
    mut commands: Commands,
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut grid: ResMut<PlantGrid>,
    mut heat: ResMut<HeatGrid>,
    mut budget: ResMut<PlantBudget>,
    mut pool: ResMut<PowerPool>,
    mut tier: ResMut<TechTier>,
    mut clock: ResMut<SimClock>,
    structures: Query<Entity, With<Structure>>,
) {
    let actions = queue.drain();
    let mut pending = actions.into_iter();

    while let Some(queued) = pending.next() {
        if queued.action == PlantAction::Reset {
            execute_reset(
                &mut commands,
                &structures,
                &mut grid,
                &mut heat,
                &mut budget,
                &mut pool,
                &mut tier,
                &mut clock,
            );
            log.push(PlantAction::Reset, ActionResult::Accepted);
            // Requests filed behind a reset targeted the torn-down plant;
            // they die with it.
            let dropped = pending.count();
            if dropped > 0 {
                info!("reset discarded {dropped} queued action(s)");
            }
            return;
        }

        let result = execute_single(
            &queued.action,
            &mut commands,
            &mut grid,
            &mut budget,
            &tier,
            &mut clock,
        );
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn execute_single(
    action: &PlantAction,
    commands: &mut Commands,
    grid: &mut PlantGrid,
    budget: &mut PlantBudget,
    tier: &TechTier,
    clock: &mut SimClock,
) -> ActionResult {
    match action {
        PlantAction::Build { pos, kind } => {
            execute_build(*pos, *kind, commands, grid, budget, tier)
        }
        PlantAction::Demolish { pos } => execute_demolish(*pos, commands, grid, budget),
        PlantAction::SetPaused { paused } => {
            clock.paused = *paused;
            ActionResult::Accepted
        }
        PlantAction::SetSpeed { speed } => execute_set_speed(*speed, clock),
        PlantAction::Reset => unreachable!("reset is intercepted by the drain loop"),
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

fn bounds_check(grid: &PlantGrid, x: u32, y: u32) -> Result<(usize, usize), ActionResult> {
    let xu = x as usize;
    let yu = y as usize;
    if grid.in_bounds(xu, yu) {
        Ok((xu, yu))
    } else {
        Err(ActionResult::Rejected(ActionError::OutOfBounds))
    }
}

/// Validate and place a structure: debit and spawn happen together, and the
/// price actually paid is recorded for the eventual refund.
fn execute_build(
    pos: (u32, u32),
    kind: StructureKind,
    commands: &mut Commands,
    grid: &mut PlantGrid,
    budget: &mut PlantBudget,
    tier: &TechTier,
) -> ActionResult {
    let (x, y) = match bounds_check(grid, pos.0, pos.1) {
        Ok(v) => v,
        Err(e) => return e,
    };

    if grid.get(x, y).is_occupied() {
        return ActionResult::Rejected(ActionError::CellOccupied);
    }

    let cost = kind.cost(tier.level);
    if !budget.can_afford(cost) {
        return ActionResult::Rejected(ActionError::InsufficientFunds);
    }

    let entity = commands
        .spawn(Structure {
            kind,
            grid_x: x,
            grid_y: y,
            price_paid: cost,
        })
        .id();

    let cell = grid.get_mut(x, y);
    cell.structure_id = Some(entity);
    cell.kind = Some(kind);
    cell.price_paid = cost;
    budget.debit(cost);

    ActionResult::Accepted
}

/// Remove a structure and refund 75% of the price paid at build time
/// (integer floor), regardless of the current catalog price.
fn execute_demolish(
    pos: (u32, u32),
    commands: &mut Commands,
    grid: &mut PlantGrid,
    budget: &mut PlantBudget,
) -> ActionResult {
    let (x, y) = match bounds_check(grid, pos.0, pos.1) {
        Ok(v) => v,
        Err(e) => return e,
    };

    let cell = grid.get(x, y);
    let Some(entity) = cell.structure_id else {
        return ActionResult::Rejected(ActionError::CellEmpty);
    };

    let refund = cell.price_paid * REFUND_NUM / REFUND_DEN;
    commands.entity(entity).despawn();

    let cell = grid.get_mut(x, y);
    cell.structure_id = None;
    cell.kind = None;
    cell.price_paid = 0;
    budget.credit_refund(refund);

    ActionResult::Accepted
}

fn execute_set_speed(speed: u32, clock: &mut SimClock) -> ActionResult {
    if speed == 0 {
        return ActionResult::Rejected(ActionError::InvalidParameter(
            "speed must be at least 1".to_string(),
        ));
    }
    clock.speed = speed.min(16) as f32;
    ActionResult::Accepted
}

/// Tear the plant down to session defaults. Heat, funds, tier, pool, and
/// clock all reinitialize; every structure entity despawns.
#[allow(clippy::too_many_arguments)]
fn execute_reset(
    commands: &mut Commands,
    structures: &Query<Entity, With<Structure>>,
    grid: &mut PlantGrid,
    heat: &mut HeatGrid,
    budget: &mut PlantBudget,
    pool: &mut PowerPool,
    tier: &mut TechTier,
    clock: &mut SimClock,
) {
    for entity in structures {
        commands.entity(entity).despawn();
    }
    grid.clear();
    heat.clear();
    budget.reset();
    pool.reset();
    tier.reset();
    *clock = SimClock::default();
}

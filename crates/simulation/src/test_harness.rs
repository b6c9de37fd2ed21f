//! # TestPlant — headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::economy::PlantBudget;
use crate::grid::PlantGrid;
use crate::heat::HeatGrid;
use crate::plant_actions::{ActionQueue, ActionResultLog, ActionSource, PlantAction};
use crate::power::PowerPool;
use crate::snapshot::PlantSnapshot;
use crate::stats::PlantStats;
use crate::structures::{Structure, StructureKind};
use crate::tiers::TechTier;
use crate::SimulationPlugin;
use crate::TickCounter;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up plant state, then call `tick()` to advance
/// the simulation and query/assert on the resulting ECS state.
pub struct TestPlant {
    app: App,
}

impl TestPlant {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty plant: a cold 16x16 grid with all resources at
    /// their defaults.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute; virtual time has not
        // advanced, so no tick fires yet.
        app.update();

        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Set the plant treasury to the given amount.
    pub fn with_funds(mut self, funds: i64) -> Self {
        self.app.world_mut().resource_mut::<PlantBudget>().funds = funds;
        self
    }

    /// Place a structure directly, bypassing the action queue and economy.
    /// The recorded price is the tier-0 catalog price.
    pub fn with_structure(mut self, x: usize, y: usize, kind: StructureKind) -> Self {
        let price = kind.base_cost();
        let entity = self
            .app
            .world_mut()
            .spawn(Structure {
                kind,
                grid_x: x,
                grid_y: y,
                price_paid: price,
            })
            .id();
        let mut grid = self.app.world_mut().resource_mut::<PlantGrid>();
        if grid.in_bounds(x, y) {
            let cell = grid.get_mut(x, y);
            cell.structure_id = Some(entity);
            cell.kind = Some(kind);
            cell.price_paid = price;
        }
        self
    }

    /// Seed a cell with heat.
    pub fn with_heat(mut self, x: usize, y: usize, heat: f32) -> Self {
        self.app.world_mut().resource_mut::<HeatGrid>().set(x, y, heat);
        self
    }

    /// Set the tech tier directly.
    pub fn with_tier(mut self, level: u32) -> Self {
        self.app.world_mut().resource_mut::<TechTier>().level = level;
        self
    }

    // -----------------------------------------------------------------------
    // Requests & simulation
    // -----------------------------------------------------------------------

    /// File a request as the player would; it executes at the next tick
    /// boundary.
    pub fn request(&mut self, action: PlantAction) {
        let tick = self.tick_counter();
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, ActionSource::Player, action);
    }

    /// Run N fixed-update ticks.
    ///
    /// The simulation runs at 10 Hz (100 ms per tick). Each call advances
    /// virtual time by one timestep and calls `app.update()`, which triggers
    /// exactly one `FixedUpdate` pass.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            // Advance virtual time by exactly the current fixed timestep so
            // each `app.update()` accumulates precisely one `FixedUpdate`
            // pass. Reading the live timestep (rather than assuming
            // `TICK_SECONDS`) keeps this robust to the clock's speed setting.
            let dt = self.app.world().resource::<Time<Fixed>>().timestep();
            self.app
                .insert_resource(TimeUpdateStrategy::ManualDuration(dt));
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably (needed for entity queries in Bevy).
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn grid(&self) -> &PlantGrid {
        self.app.world().resource::<PlantGrid>()
    }

    pub fn heat(&self, x: usize, y: usize) -> f32 {
        self.app.world().resource::<HeatGrid>().get(x, y)
    }

    pub fn total_heat(&self) -> f32 {
        self.app.world().resource::<HeatGrid>().total()
    }

    pub fn funds(&self) -> i64 {
        self.app.world().resource::<PlantBudget>().funds
    }

    pub fn budget(&self) -> &PlantBudget {
        self.app.world().resource::<PlantBudget>()
    }

    pub fn pool(&self) -> &PowerPool {
        self.app.world().resource::<PowerPool>()
    }

    pub fn tier(&self) -> u32 {
        self.app.world().resource::<TechTier>().level
    }

    pub fn stats(&self) -> &PlantStats {
        self.app.world().resource::<PlantStats>()
    }

    pub fn snapshot(&self) -> &PlantSnapshot {
        self.app.world().resource::<PlantSnapshot>()
    }

    pub fn action_log(&self) -> &ActionResultLog {
        self.app.world().resource::<ActionResultLog>()
    }

    pub fn tick_counter(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    /// Count all structure entities.
    pub fn structure_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Structure>>()
            .iter(world)
            .count()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_funds(&self, expected: i64) {
        let funds = self.funds();
        assert_eq!(funds, expected, "Expected funds {expected}, got {funds}");
    }

    pub fn assert_funds_above(&self, amount: i64) {
        let funds = self.funds();
        assert!(funds > amount, "Expected funds > {amount}, got {funds}");
    }

    pub fn assert_cell_kind(&self, x: usize, y: usize, expected: Option<StructureKind>) {
        let kind = self.grid().get(x, y).kind;
        assert_eq!(
            kind, expected,
            "Expected {expected:?} at ({x}, {y}), found {kind:?}"
        );
    }

    pub fn assert_heat_above(&self, x: usize, y: usize, min: f32) {
        let heat = self.heat(x, y);
        assert!(heat > min, "Expected heat > {min} at ({x}, {y}), got {heat}");
    }

    pub fn assert_no_negative_heat(&self) {
        let heat = self.app.world().resource::<HeatGrid>();
        for (i, &value) in heat.heat.iter().enumerate() {
            assert!(
                value >= 0.0,
                "Negative heat {value} at cell index {i}"
            );
        }
    }
}

impl Default for TestPlant {
    fn default() -> Self {
        Self::new()
    }
}

//! Headless ThermoGrid driver.
//!
//! Assembles the simulation with a schedule-runner loop, seeds a small
//! starter plant through the action queue, and prints periodic snapshots to
//! stdout. Set `THERMOGRID_TICKS` to change the run length (default 300) and
//! `THERMOGRID_JSON=1` to dump the final snapshot as JSON before exiting.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

use simulation::plant_actions::{ActionQueue, ActionSource, PlantAction};
use simulation::snapshot::PlantSnapshot;
use simulation::structures::StructureKind;
use simulation::SimulationPlugin;
use simulation::TickCounter;

/// How often (in ticks) a progress line is printed.
const REPORT_INTERVAL: u64 = 50;

fn main() {
    let tick_limit: u64 = std::env::var("THERMOGRID_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300);

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(10))),
    );
    app.add_plugins(SimulationPlugin);
    app.insert_resource(TickLimit(tick_limit));
    app.add_systems(Startup, seed_starter_plant);
    app.add_systems(Update, report_progress);
    app.run();
}

#[derive(Resource)]
struct TickLimit(u64);

/// Queue up a minimal profitable loop: one rod feeding one turbine feeding
/// one substation. Exactly spends the starting funds.
fn seed_starter_plant(mut queue: ResMut<ActionQueue>) {
    for (pos, kind) in [
        ((7, 7), StructureKind::FuelRod),
        ((8, 7), StructureKind::Turbine),
        ((9, 7), StructureKind::Substation),
    ] {
        queue.push(0, ActionSource::Agent, PlantAction::Build { pos, kind });
    }
}

fn report_progress(
    tick: Res<TickCounter>,
    limit: Res<TickLimit>,
    snapshot: Res<PlantSnapshot>,
    mut last_report: Local<u64>,
    mut exit: EventWriter<AppExit>,
) {
    if tick.0 >= *last_report + REPORT_INTERVAL || (tick.0 >= limit.0 && *last_report < limit.0) {
        *last_report = tick.0;
        println!(
            "tick {:>6}  funds {:>8}  tier {}  heat {:>9.1}  power sold {:>10.1}",
            snapshot.tick,
            snapshot.funds,
            snapshot.tier,
            snapshot.total_heat,
            snapshot.power.cumulative_sold,
        );
        for row in &snapshot.overview_map {
            println!("    {row}");
        }
    }

    if tick.0 >= limit.0 {
        if std::env::var("THERMOGRID_JSON").is_ok() {
            match serde_json::to_string_pretty(&*snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("snapshot serialization failed: {err}"),
            }
        }
        exit.send(AppExit::Success);
    }
}

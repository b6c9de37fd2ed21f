use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::TICK_SECONDS;

/// Pause and speed control for the fixed-step simulation.
///
/// Speed scales the real-time interval between logical ticks; a tick itself
/// always advances the simulation by exactly one step, so skipped or slow
/// wall-clock intervals never produce partial ticks.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    pub paused: bool,
    pub speed: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            paused: false,
            speed: 1.0,
        }
    }
}

/// Applies the clock to bevy's time resources each frame: pausing stops
/// virtual time (and with it the fixed-update accumulator), speed rescales
/// the fixed timestep. Base rate is 10 Hz; at 2x the timestep is 50 ms.
pub fn sync_sim_clock(
    clock: Res<SimClock>,
    mut fixed: ResMut<Time<Fixed>>,
    mut virt: ResMut<Time<Virtual>>,
) {
    if clock.paused {
        if !virt.is_paused() {
            virt.pause();
        }
    } else if virt.is_paused() {
        virt.unpause();
    }

    let base = Duration::from_secs_f64(TICK_SECONDS);
    let speed = clock.speed.clamp(0.25, 16.0);
    fixed.set_timestep(base.div_f32(speed));
}

pub struct SimClockPlugin;

impl Plugin for SimClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>()
            .add_systems(Update, sync_sim_clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = SimClock::default();
        assert!(!clock.paused);
        assert_eq!(clock.speed, 1.0);
    }

    #[test]
    fn test_timestep_scaling() {
        let base = Duration::from_secs_f64(TICK_SECONDS);
        assert_eq!(base.div_f32(2.0), Duration::from_millis(50));
        assert_eq!(base.div_f32(0.25), Duration::from_millis(400));
    }
}

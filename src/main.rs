//! Invaders From Space headless host
//!
//! Plays runs with a simple autopilot at the configured frame rate and
//! prints each run summary as JSON. Set `INVADERS_SETTINGS` to a settings
//! file and `RUST_LOG` for log output.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::time::{SystemTime, UNIX_EPOCH};

    use invaders_from_space::platform::FramePacer;
    use invaders_from_space::sim::{GameState, TickInput};
    use invaders_from_space::{HostInput, Settings, Shell, ShellStatus};

    /// Steer under the lowest on-screen enemy and keep firing
    fn autopilot(state: &GameState) -> TickInput {
        let player = &state.player.ship;
        let player_center = player.pos.x + state.atlas.width(player.sprite) / 2.0;

        let target = state
            .enemies
            .iter()
            .filter(|e| e.ship.pos.y >= 0.0)
            .max_by(|a, b| a.ship.pos.y.total_cmp(&b.ship.pos.y))
            .map(|e| e.ship.pos.x + state.atlas.width(e.ship.sprite) / 2.0);

        let mut input = TickInput {
            fire: true,
            ..TickInput::default()
        };
        if let Some(x) = target {
            input.left = x < player_center - 2.0;
            input.right = x > player_center + 2.0;
        }
        input
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }

    pub fn run() {
        env_logger::init();
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Invaders From Space starting (seed {seed})");

        let mut shell = Shell::new(seed).with_tick_rate(settings.tick_rate_hz);
        let mut pacer = FramePacer::new(settings.tick_rate_hz);
        let mut frames: u64 = 0;
        let mut runs_finished: u32 = 0;

        loop {
            let quit = runs_finished >= settings.max_runs
                || settings.max_frames.is_some_and(|max| frames >= max);
            let input = HostInput {
                actions: shell.game().map(autopilot).unwrap_or_default(),
                any_key: true,
                quit,
            };

            let frame = shell.frame(&input);
            frames += 1;
            log::trace!("frame {frames}: {} draw commands", frame.commands.len());

            match frame.status {
                ShellStatus::Exited => break,
                ShellStatus::RunEnded(summary) => {
                    runs_finished += 1;
                    match serde_json::to_string(&summary) {
                        Ok(json) => println!("{json}"),
                        Err(e) => log::warn!("Failed to serialize run summary: {e}"),
                    }
                }
                _ => {}
            }

            if settings.pace_frames {
                pacer.wait();
            }
        }

        if let Some(state) = shell.game() {
            log::info!(
                "Stopped mid-run at level {} after {} frames",
                state.level(),
                state.time_ticks
            );
        }
        log::info!("Exiting after {frames} frames, {runs_finished} runs");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    host::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host; embedders drive `Shell` directly
}

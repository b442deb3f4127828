//! Host shell: the title gate around a run
//!
//! `Title` waits for any key, then a run plays until it ends and control
//! returns to the title. Quit exits from any screen.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;
use crate::renderer::{self, DrawCommand};
use crate::sim::rng::seeded;
use crate::sim::{GameState, RunSummary, TickInput, TickOutcome, tick};

/// One frame of host input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInput {
    /// Logical actions held this frame
    pub actions: TickInput,
    /// Any key pressed this frame (starts a run from the title)
    pub any_key: bool,
    /// Quit signal
    pub quit: bool,
}

/// What the shell did on a frame
#[derive(Debug, Clone, PartialEq)]
pub enum ShellStatus {
    Title,
    Playing,
    /// Run is showing the loss overlay
    Lost,
    /// A run finished this frame; the shell is back on the title
    RunEnded(RunSummary),
    Exited,
}

/// Draw commands plus status for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub status: ShellStatus,
}

#[derive(Debug)]
enum Screen {
    Title,
    Playing(Box<GameState>),
    Exited,
}

#[derive(Debug)]
pub struct Shell {
    screen: Screen,
    master: Pcg32,
    tick_rate_hz: u32,
    runs_started: u32,
}

impl Shell {
    /// New shell on the title screen; every run seed is drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            screen: Screen::Title,
            master: seeded(seed),
            tick_rate_hz: TICK_RATE_HZ,
            runs_started: 0,
        }
    }

    /// Frame rate the host drives `frame` at; times the loss overlay
    pub fn with_tick_rate(mut self, tick_rate_hz: u32) -> Self {
        self.tick_rate_hz = tick_rate_hz;
        self
    }

    #[inline]
    pub fn runs_started(&self) -> u32 {
        self.runs_started
    }

    /// The run in progress, if any
    pub fn game(&self) -> Option<&GameState> {
        match &self.screen {
            Screen::Playing(state) => Some(&**state),
            _ => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self.screen, Screen::Exited)
    }

    /// Run one frame: render the current screen, then advance it
    pub fn frame(&mut self, input: &HostInput) -> Frame {
        if input.quit && !self.is_exited() {
            log::info!("Quit requested");
            self.screen = Screen::Exited;
        }

        match &mut self.screen {
            Screen::Exited => Frame {
                commands: Vec::new(),
                status: ShellStatus::Exited,
            },
            Screen::Title => {
                let commands = renderer::title_frame();
                let status = if input.any_key {
                    self.start_run();
                    ShellStatus::Playing
                } else {
                    ShellStatus::Title
                };
                Frame { commands, status }
            }
            Screen::Playing(state) => {
                let commands = renderer::game_frame(state);
                let status = match tick(state, &input.actions) {
                    TickOutcome::Running => ShellStatus::Playing,
                    TickOutcome::Lost => ShellStatus::Lost,
                    TickOutcome::RunEnded => {
                        let summary = state.summary();
                        log::info!(
                            "Run ended: level {} after {} frames",
                            summary.level,
                            summary.frames
                        );
                        self.screen = Screen::Title;
                        ShellStatus::RunEnded(summary)
                    }
                };
                Frame { commands, status }
            }
        }
    }

    fn start_run(&mut self) {
        let seed: u64 = self.master.random();
        self.runs_started += 1;
        log::info!("Starting run {} with seed {seed}", self.runs_started);
        let state = GameState::new(seed).with_tick_rate(self.tick_rate_hz);
        self.screen = Screen::Playing(Box::new(state));
    }
}

//! Platform layer for native hosts
//!
//! Handles wall-clock frame pacing. Input and output belong to the host.

use std::time::{Duration, Instant};

/// Paces a loop to a fixed frame rate with a rolling deadline
///
/// When the host falls more than two frames behind, the deadline snaps to
/// the present instead of replaying the missed frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    deadline: Instant,
}

impl FramePacer {
    /// Create a pacer for `rate_hz` frames per second (clamped to at least 1)
    pub fn new(rate_hz: u32) -> Self {
        Self::starting_at(rate_hz, Instant::now())
    }

    pub fn starting_at(rate_hz: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_nanos(1_000_000_000 / u64::from(rate_hz.max(1))),
            deadline: now,
        }
    }

    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Advance the deadline by one frame and return how long to sleep from `now`
    pub fn schedule(&mut self, now: Instant) -> Option<Duration> {
        self.deadline += self.frame;
        if self.deadline > now {
            Some(self.deadline - now)
        } else {
            if now - self.deadline > self.frame * 2 {
                log::debug!("Frame pacer behind by {:?}, resetting", now - self.deadline);
                self.deadline = now;
            }
            None
        }
    }

    /// Block until the next frame is due
    pub fn wait(&mut self) {
        if let Some(delay) = self.schedule(Instant::now()) {
            std::thread::sleep(delay);
        }
    }
}

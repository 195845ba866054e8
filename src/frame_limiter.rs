use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate by sleeping off the unused budget
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    /// `fps` must be non-zero; the config validator guarantees it
    pub fn new(fps: u32) -> Self {
        FrameLimiter {
            budget: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Time left in the current frame after `elapsed` has been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleep until the current frame's budget is used up, then start the next frame
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

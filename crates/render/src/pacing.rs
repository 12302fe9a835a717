use std::time::Duration;

/// Outcome of measuring one frame against the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePace {
    /// Finished early; wait this long before starting the next frame.
    Wait(Duration),
    /// Took exactly the budget.
    OnTime,
    /// Took longer than the budget.
    Overran,
}

/// Fixed-rate frame limiter.
///
/// Frame times are truncated to whole milliseconds before comparison and the
/// budget is `1000 / target_fps` milliseconds. The first overrun is logged as
/// a warning; later ones are only counted.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_fps: u32,
    budget: Duration,
    overruns: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            budget: Duration::from_millis(1000 / u64::from(target_fps)),
            overruns: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Number of frames that ran over budget so far.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Classify a finished frame that took `elapsed`.
    pub fn finish_frame(&mut self, elapsed: Duration) -> FramePace {
        let elapsed = Duration::from_millis(elapsed.as_millis() as u64);
        if elapsed < self.budget {
            return FramePace::Wait(self.budget - elapsed);
        }
        if elapsed == self.budget {
            return FramePace::OnTime;
        }
        if self.overruns == 0 {
            tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                "frame rate has dropped below {} FPS",
                self.target_fps
            );
        }
        self.overruns += 1;
        FramePace::Overran
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}

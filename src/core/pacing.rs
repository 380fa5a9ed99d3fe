use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{DisplayError, Result};

/// What to do with a call that arrives before the target interval elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PacingPolicy {
    /// Return "not refreshed" without touching the buffer or the sink
    #[default]
    Skip,
    /// Sleep until the interval has elapsed, then refresh
    Wait,
}

/// Outcome of a pacing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceDecision {
    /// Refresh now
    Refresh,
    /// Too early, leave everything untouched
    Skip,
    /// Too early, sleep for the remainder then refresh
    WaitThen(Duration),
    /// The minimum frame rate floor was missed
    Violation { elapsed: Duration, floor: Duration },
}

/// Interval between frames at `fps`, `None` when unpaced
pub fn frame_interval(fps: f32) -> Result<Option<Duration>> {
    if !fps.is_finite() || fps < 0.0 {
        return Err(DisplayError::InvalidFrameRate(fps));
    }
    if fps == 0.0 {
        return Ok(None);
    }
    Duration::try_from_secs_f64(1.0 / fps as f64)
        .map(Some)
        .map_err(|_| DisplayError::InvalidFrameRate(fps))
}

/// Throttle between refreshes plus a staleness floor
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    policy: PacingPolicy,
    auto_refresh: bool,
    last_refresh: Option<Instant>,
}

impl FramePacer {
    pub fn new(policy: PacingPolicy, auto_refresh: bool) -> Self {
        Self {
            policy,
            auto_refresh,
            last_refresh: None,
        }
    }

    pub fn policy(&self) -> PacingPolicy {
        self.policy
    }

    /// Instant of the last refresh that completed
    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// Decide whether a refresh may run at `now`.
    /// The first call never has anything to compare against and always refreshes.
    pub fn decide(&self, now: Instant, target_fps: f32, minimum_fps: f32) -> Result<PaceDecision> {
        let target = frame_interval(target_fps)?;
        let floor = frame_interval(minimum_fps)?;

        let Some(last) = self.last_refresh else {
            return Ok(PaceDecision::Refresh);
        };
        let elapsed = now.saturating_duration_since(last);

        if let Some(floor) = floor {
            if elapsed > floor {
                return Ok(PaceDecision::Violation { elapsed, floor });
            }
        }

        let target = match target {
            Some(target) if !self.auto_refresh => target,
            _ => return Ok(PaceDecision::Refresh),
        };

        if elapsed >= target {
            return Ok(PaceDecision::Refresh);
        }

        Ok(match self.policy {
            PacingPolicy::Skip => PaceDecision::Skip,
            PacingPolicy::Wait => PaceDecision::WaitThen(target - elapsed),
        })
    }

    /// Record a completed refresh
    pub fn mark_refreshed(&mut self, at: Instant) {
        self.last_refresh = Some(at);
    }

    /// Forget the last refresh so the next call starts a fresh cadence
    pub fn reset(&mut self) {
        self.last_refresh = None;
    }
}

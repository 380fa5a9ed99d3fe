use log::{debug, trace, warn};

use crate::core::clock::TimeSource;
use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::Rectangle;
use crate::core::lifecycle::Lifecycle;
use crate::core::pacing::{FramePacer, PaceDecision};
use crate::error::{DisplayError, Result};
use crate::traits::{PixelSink, SceneRenderer};

/// Collaborators borrowed for the duration of one refresh cycle
pub struct RefreshTargets<'a, S: PixelSink, R: SceneRenderer> {
    pub lifecycle: &'a Lifecycle,
    pub buffer: &'a mut FrameBuffer,
    pub renderer: &'a mut R,
    pub root: Option<&'a R::Root>,
    pub sink: &'a mut S,
}

/// Runs refresh cycles: pacing, composite, damage query, crop and send
pub struct RefreshEngine<C: TimeSource> {
    clock: C,
    pacer: FramePacer,
    dirty: Vec<Rectangle>,
    frames: u64,
}

impl<C: TimeSource> RefreshEngine<C> {
    pub fn new(clock: C, pacer: FramePacer) -> Self {
        Self {
            clock,
            pacer,
            dirty: Vec::new(),
            frames: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Number of refresh cycles that reached the sink stage and completed
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rectangles sent by the last cycle
    pub fn last_dirty(&self) -> &[Rectangle] {
        &self.dirty
    }

    pub fn reset_timing(&mut self) {
        self.pacer.reset();
    }

    /// Run one cycle. `Ok(false)` means nothing was done, either because the
    /// display is not running or the target interval has not elapsed yet.
    pub fn refresh<S, R>(
        &mut self,
        targets: RefreshTargets<'_, S, R>,
        target_fps: f32,
        minimum_fps: f32,
    ) -> Result<bool>
    where
        S: PixelSink,
        R: SceneRenderer,
    {
        if !targets.lifecycle.is_running() {
            return Ok(false);
        }

        match self.pacer.decide(self.clock.now(), target_fps, minimum_fps)? {
            PaceDecision::Refresh => {}
            PaceDecision::Skip => {
                trace!("refresh skipped, target interval not elapsed");
                return Ok(false);
            }
            PaceDecision::WaitThen(remaining) => {
                trace!("waiting {:?} for target frame rate", remaining);
                self.clock.sleep(remaining);
            }
            PaceDecision::Violation { elapsed, floor } => {
                warn!(
                    "below minimum frame rate: {:?} since last refresh, floor {:?}",
                    elapsed, floor
                );
                return Err(DisplayError::FrameRateViolation { elapsed, floor });
            }
        }

        self.dirty.clear();
        targets.buffer.composite(&mut *targets.renderer, targets.root)?;
        self.dirty = targets.renderer.get_refresh_areas();

        let mut bytes = 0;
        for area in &self.dirty {
            let payload = targets.buffer.crop_region(area)?;
            trace!("sending {} ({} bytes)", area, payload.len());
            targets.sink.write_bytes(area, &payload)?;
            bytes += payload.len();
        }

        self.frames += 1;
        self.pacer.mark_refreshed(self.clock.now());
        debug!(
            "frame {}: {} areas, {} bytes",
            self.frames,
            self.dirty.len(),
            bytes
        );

        Ok(true)
    }
}

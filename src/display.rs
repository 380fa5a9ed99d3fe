use log::{debug, info};

use crate::core::{
    Dimensions, FrameBuffer, FramePacer, Lifecycle, Orientation, RefreshEngine, RefreshTargets,
    SystemClock, TimeSource,
};
use crate::error::{Result, SinkError};
use crate::options::DisplayOptions;
use crate::traits::{PixelSink, SceneRenderer};

/// Target frame rate used by `refresh_default`
pub const DEFAULT_TARGET_FPS: f32 = 30.0;
/// Minimum frame rate used by `refresh_default`
pub const DEFAULT_MINIMUM_FPS: f32 = 1.0;

/// Display combines a frame buffer, a scene renderer and a pixel sink
pub struct PixelsDisplay<S: PixelSink, R: SceneRenderer, C: TimeSource = SystemClock> {
    sink: S,
    renderer: R,
    root: Option<R::Root>,
    buffer: FrameBuffer,
    engine: RefreshEngine<C>,
    lifecycle: Lifecycle,
    dims: Dimensions,
    orientation: Orientation,
    rotation: u16,
}

impl<S: PixelSink, R: SceneRenderer> PixelsDisplay<S, R, SystemClock> {
    /// Open the sink at `width x height` and start the display on the wall clock
    pub fn new<F>(
        width: u32,
        height: u32,
        options: DisplayOptions,
        renderer: R,
        open_sink: F,
    ) -> Result<Self>
    where
        F: FnOnce(Dimensions, &DisplayOptions) -> std::result::Result<S, SinkError>,
    {
        Self::with_clock(width, height, options, renderer, SystemClock, open_sink)
    }
}

impl<S: PixelSink, R: SceneRenderer, C: TimeSource> PixelsDisplay<S, R, C> {
    /// Like `new` with an explicit time source.
    /// The display takes its size from the opened sink, not from the request.
    pub fn with_clock<F>(
        width: u32,
        height: u32,
        options: DisplayOptions,
        mut renderer: R,
        clock: C,
        open_sink: F,
    ) -> Result<Self>
    where
        F: FnOnce(Dimensions, &DisplayOptions) -> std::result::Result<S, SinkError>,
    {
        options.validate()?;

        let sink = open_sink(Dimensions::new(width, height), &options)?;
        let dims = sink.size();
        info!(
            "display opened: requested {}x{}, sink reports {}x{}",
            width, height, dims.width, dims.height
        );

        renderer.resize(dims);
        let mut lifecycle = Lifecycle::default();
        lifecycle.start();

        let pacer = FramePacer::new(options.pacing, options.auto_refresh);
        let mut display = Self {
            sink,
            renderer,
            root: None,
            buffer: FrameBuffer::new(dims),
            engine: RefreshEngine::new(clock, pacer),
            lifecycle,
            dims,
            orientation: Orientation::Portrait,
            rotation: 0,
        };

        if options.rotation != 0 {
            display.set_orientation(options.rotation);
        }
        Ok(display)
    }

    /// Run one refresh cycle. Returns `Ok(false)` when stopped or when the
    /// target interval has not elapsed under the skip policy.
    pub fn refresh(
        &mut self,
        target_frames_per_second: f32,
        minimum_frames_per_second: f32,
    ) -> Result<bool> {
        self.engine.refresh(
            RefreshTargets {
                lifecycle: &self.lifecycle,
                buffer: &mut self.buffer,
                renderer: &mut self.renderer,
                root: self.root.as_ref(),
                sink: &mut self.sink,
            },
            target_frames_per_second,
            minimum_frames_per_second,
        )
    }

    /// `refresh` at 30 fps target with a 1 fps floor
    pub fn refresh_default(&mut self) -> Result<bool> {
        self.refresh(DEFAULT_TARGET_FPS, DEFAULT_MINIMUM_FPS)
    }

    /// 90 selects landscape; any other value selects portrait.
    /// On an actual change the display takes the sink's rotated size.
    pub fn set_orientation(&mut self, degrees: u16) {
        let next = Orientation::from_degrees(degrees);
        self.sink.set_orientation(next);
        self.rotation = next.degrees();

        if next == self.orientation {
            return;
        }

        self.orientation = next;
        let expected = self.dims.swapped();
        self.dims = self.sink.size();
        if self.dims != expected {
            debug!(
                "sink reports {}x{} after rotation, expected {}x{}",
                self.dims.width, self.dims.height, expected.width, expected.height
            );
        }
        self.buffer = FrameBuffer::new(self.dims);
        self.renderer.resize(self.dims);
        info!(
            "orientation {:?}, now {}x{}",
            next, self.dims.width, self.dims.height
        );
    }

    /// Stop for good; later refreshes do nothing
    pub fn quit(&mut self) {
        info!("closing display");
        self.lifecycle.quit();
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// Select the scene root painted on each refresh
    pub fn show(&mut self, root: Option<R::Root>) {
        self.root = root;
    }

    pub fn root(&self) -> Option<&R::Root> {
        self.root.as_ref()
    }

    /// Forget the last refresh time, clearing a standing frame rate violation
    pub fn reset_frame_timing(&mut self) {
        self.engine.reset_timing();
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn rotation(&self) -> u16 {
        self.rotation
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Completed refresh cycles
    pub fn frames(&self) -> u64 {
        self.engine.frames()
    }

    pub fn engine(&self) -> &RefreshEngine<C> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use displayio_pixels::core::{Dimensions, FrameBuffer, Orientation, Rectangle, Rgba};
use displayio_pixels::traits::{PixelSink, SceneRenderer};
use displayio_pixels::SinkError;

/// Every write a `RecordingSink` accepted
pub type WriteLog = Rc<RefCell<Vec<(Rectangle, Vec<u8>)>>>;

/// Mock sink that records writes and can fail on demand
pub struct RecordingSink {
    pub dims: Dimensions,
    pub orientation: Orientation,
    pub writes: WriteLog,
    /// Fail the write with this index (0-based) and every later one
    pub fail_from: Option<usize>,
    /// Keep `dims` unchanged when the orientation changes
    pub fixed_size: bool,
    attempts: usize,
}

impl RecordingSink {
    pub fn new(dims: Dimensions, writes: WriteLog) -> Self {
        Self {
            dims,
            orientation: Orientation::Portrait,
            writes,
            fail_from: None,
            fixed_size: false,
            attempts: 0,
        }
    }

    pub fn failing_from(mut self, index: usize) -> Self {
        self.fail_from = Some(index);
        self
    }

    pub fn with_fixed_size(mut self) -> Self {
        self.fixed_size = true;
        self
    }
}

impl PixelSink for RecordingSink {
    fn size(&self) -> Dimensions {
        self.dims
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.orientation && !self.fixed_size {
            self.dims = self.dims.swapped();
        }
        self.orientation = orientation;
    }

    fn write_bytes(&mut self, area: &Rectangle, bytes: &[u8]) -> Result<(), SinkError> {
        let attempt = self.attempts;
        self.attempts += 1;

        if self.fail_from.is_some_and(|from| attempt >= from) {
            return Err(SinkError::Device("link down".to_string()));
        }
        self.writes.borrow_mut().push((*area, bytes.to_vec()));
        Ok(())
    }
}

/// Mock renderer painting one color and reporting a fixed damage list each query
pub struct ScriptedRenderer {
    pub fill: Rgba,
    pub areas: Vec<Rectangle>,
    pub render_calls: Rc<RefCell<usize>>,
    pub resized: Vec<Dimensions>,
}

impl ScriptedRenderer {
    pub fn new(fill: Rgba, areas: Vec<Rectangle>) -> Self {
        Self {
            fill,
            areas,
            render_calls: Rc::new(RefCell::new(0)),
            resized: Vec::new(),
        }
    }
}

impl SceneRenderer for ScriptedRenderer {
    type Root = ();

    fn render_into(&mut self, buffer: &mut FrameBuffer, _root: &()) {
        *self.render_calls.borrow_mut() += 1;
        let area = buffer.dimensions().full_area();
        buffer.fill_rect(&area, self.fill);
    }

    fn get_refresh_areas(&mut self) -> Vec<Rectangle> {
        self.areas.clone()
    }

    fn resize(&mut self, dims: Dimensions) {
        self.resized.push(dims);
    }
}

pub fn write_log() -> WriteLog {
    Rc::new(RefCell::new(Vec::new()))
}

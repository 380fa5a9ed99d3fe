use log::debug;

use crate::core::geometry::{Dimensions, Orientation, Rectangle, BYTES_PER_PIXEL};
use crate::error::SinkError;
use crate::options::DisplayOptions;
use crate::traits::PixelSink;

/// In-memory pixel device holding an RGBA frame
#[derive(Debug, Clone)]
pub struct MemorySink {
    dims: Dimensions,
    orientation: Orientation,
    frame: Vec<u8>,
    writes: usize,
    bytes_written: usize,
}

impl MemorySink {
    /// Create a portrait device of exactly `dims`
    pub fn new(dims: Dimensions) -> Result<Self, SinkError> {
        if dims.pixel_count() == 0 {
            return Err(SinkError::Device(format!(
                "cannot open a {}x{} device",
                dims.width, dims.height
            )));
        }

        Ok(Self {
            dims,
            orientation: Orientation::Portrait,
            frame: vec![0; dims.buffer_size()],
            writes: 0,
            bytes_written: 0,
        })
    }

    /// Open a device, clamping the request to the `max_width` and
    /// `max_height` sink keys when present
    pub fn open(requested: Dimensions, options: &DisplayOptions) -> Result<Self, SinkError> {
        let width = options
            .sink_u32("max_width")
            .map_or(requested.width, |max| requested.width.min(max));
        let height = options
            .sink_u32("max_height")
            .map_or(requested.height, |max| requested.height.min(max));

        if (width, height) != (requested.width, requested.height) {
            debug!(
                "memory sink clamped {}x{} to {}x{}",
                requested.width, requested.height, width, height
            );
        }
        Self::new(Dimensions::new(width, height))
    }

    /// Device frame, row-major RGBA
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        let idx = (y as usize * self.dims.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut px = [0; 4];
        px.copy_from_slice(&self.frame[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Number of accepted writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl PixelSink for MemorySink {
    fn size(&self) -> Dimensions {
        self.dims
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rotating swaps the device dims and clears the frame
    fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            return;
        }
        self.dims = self.dims.swapped();
        self.orientation = orientation;
        self.frame.fill(0);
    }

    fn write_bytes(&mut self, area: &Rectangle, bytes: &[u8]) -> Result<(), SinkError> {
        let expected = area.byte_len();
        if bytes.len() != expected {
            return Err(SinkError::PayloadSize {
                expected,
                actual: bytes.len(),
            });
        }
        if !area.fits(self.dims.width, self.dims.height) {
            return Err(SinkError::OutOfBounds { area: *area });
        }

        let row_bytes = area.width as usize * BYTES_PER_PIXEL;
        let stride = self.dims.width as usize * BYTES_PER_PIXEL;

        if row_bytes > 0 {
            for (row, src) in bytes.chunks_exact(row_bytes).enumerate() {
                let start = (area.y as usize + row) * stride + area.x as usize * BYTES_PER_PIXEL;
                self.frame[start..start + row_bytes].copy_from_slice(src);
            }
        }

        self.writes += 1;
        self.bytes_written += bytes.len();
        Ok(())
    }
}

use crate::core::geometry::{Dimensions, Orientation, Rectangle};
use crate::error::SinkError;

/// Physical pixel output device
pub trait PixelSink {
    /// Authoritative device size, possibly adjusted from what was requested
    fn size(&self) -> Dimensions;

    fn orientation(&self) -> Orientation;

    fn set_orientation(&mut self, orientation: Orientation);

    /// Write a row-major RGBA payload of exactly `area.width * area.height * 4` bytes
    fn write_bytes(&mut self, area: &Rectangle, bytes: &[u8]) -> Result<(), SinkError>;
}

use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::Rectangle;

/// A drawable that knows how to paint itself
pub trait Paintable {
    /// Extent `(width, height)` measured from the drawable's origin
    fn size(&self) -> (u32, u32);

    /// Paint with the local origin placed at `origin`, touching only pixels inside `clip`
    fn render_into(&self, buffer: &mut FrameBuffer, origin: (i64, i64), clip: &Rectangle);
}

use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::{Dimensions, Rectangle};

/// Scene renderer - fills a buffer from a drawable root and reports damage
pub trait SceneRenderer {
    /// Handle to the root drawable of a scene
    type Root;

    /// Paint the full visual state reachable from `root` into `buffer`
    fn render_into(&mut self, buffer: &mut FrameBuffer, root: &Self::Root);

    /// Rectangles changed since the previous query, in emission order
    fn get_refresh_areas(&mut self) -> Vec<Rectangle>;

    /// Called when the display size changes (construction, rotation)
    fn resize(&mut self, _dims: Dimensions) {}
}

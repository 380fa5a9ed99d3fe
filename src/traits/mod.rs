pub mod paintable;
pub mod renderer;
pub mod sink;

pub use paintable::*;
pub use renderer::*;
pub use sink::*;

pub mod cli;
pub mod core;
pub mod display;
pub mod error;
pub mod options;
pub mod scene;
pub mod sinks;
pub mod traits;

pub use crate::core::{Dimensions, FrameBuffer, Orientation, PacingPolicy, Rectangle, Rgba};
pub use display::PixelsDisplay;
pub use error::{DisplayError, Result, SceneError, SinkError};
pub use options::DisplayOptions;

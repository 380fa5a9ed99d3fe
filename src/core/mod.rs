pub mod clock;
pub mod frame_buffer;
pub mod geometry;
pub mod lifecycle;
pub mod pacing;
pub mod pixel;
pub mod refresh_engine;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use frame_buffer::FrameBuffer;
pub use geometry::{Dimensions, Orientation, Rectangle, BYTES_PER_PIXEL};
pub use lifecycle::Lifecycle;
pub use pacing::{FramePacer, PaceDecision, PacingPolicy};
pub use pixel::Rgba;
pub use refresh_engine::{RefreshEngine, RefreshTargets};

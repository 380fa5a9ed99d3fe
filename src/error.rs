use std::time::Duration;

use thiserror::Error;

use crate::core::geometry::Rectangle;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, DisplayError>;

/// Failures surfaced by a refresh cycle or by display setup
#[derive(Debug, Error)]
pub enum DisplayError {
    /// No successful refresh happened within the minimum frame rate floor
    #[error("below minimum frame rate: {elapsed:?} since last refresh exceeds floor of {floor:?}")]
    FrameRateViolation { elapsed: Duration, floor: Duration },

    /// A dirty rectangle does not fit inside the frame buffer
    #[error("area {area} does not fit a {width}x{height} buffer")]
    OutOfBounds {
        area: Rectangle,
        width: u32,
        height: u32,
    },

    /// The pixel sink rejected or failed a write
    #[error("pixel sink write failed")]
    Sink(#[from] SinkError),

    /// Frame rates must be finite and non-negative
    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    #[error("invalid display options: {0}")]
    InvalidOptions(String),
}

/// Errors reported by a pixel sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// Payload length does not match `area.width * area.height * 4`
    #[error("payload is {actual} bytes, expected {expected}")]
    PayloadSize { expected: usize, actual: usize },

    /// Target area falls outside the device
    #[error("area {area} is outside the device")]
    OutOfBounds { area: Rectangle },

    /// Device specific failure
    #[error("device error: {0}")]
    Device(String),
}

/// Errors from scene graph edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("unknown node {0}")]
    UnknownNode(usize),

    #[error("node {0} is not a group")]
    NotAGroup(usize),

    #[error("node {0} is not a drawable")]
    NotADrawable(usize),

    #[error("node {0} already has a parent")]
    AlreadyAttached(usize),

    /// Appending would make a node its own ancestor
    #[error("appending node {child} under {parent} would create a cycle")]
    Cycle { parent: usize, child: usize },
}

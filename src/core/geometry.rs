use std::fmt;

use serde::{Deserialize, Serialize};

/// Bytes per pixel in the RGBA encoding
pub const BYTES_PER_PIXEL: usize = 4;

/// Logical display size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    /// Width and height exchanged, as after a 90 degree rotation
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Rectangle covering the whole area
    pub fn full_area(&self) -> Rectangle {
        Rectangle::new(0, 0, self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Sink orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Map a rotation in degrees; only 90 means landscape
    pub fn from_degrees(degrees: u16) -> Self {
        if degrees == 90 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 90,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip a signed placement against `bounds`, `None` if nothing is left
    pub fn clipped(x: i64, y: i64, width: u32, height: u32, bounds: Dimensions) -> Option<Self> {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + width as i64).min(bounds.width as i64);
        let bottom = (y + height as i64).min(bounds.height as i64);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self::new(
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }

    /// Exclusive right edge, widened to avoid overflow
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge, widened to avoid overflow
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Size of the RGBA payload for this rectangle
    pub fn byte_len(&self) -> usize {
        self.area() as usize * BYTES_PER_PIXEL
    }

    /// True if the rectangle lies fully inside a `width x height` area
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.x as u64) < other.right()
            && (other.x as u64) < self.right()
            && (self.y as u64) < other.bottom()
            && (other.y as u64) < self.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rectangle::new(x, y, (right - x as u64) as u32, (bottom - y as u64) as u32)
    }

    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Rectangle::new(
            x,
            y,
            (right - x as u64) as u32,
            (bottom - y as u64) as u32,
        ))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_buffer_size_rgba() {
        let dims = Dimensions::new(100, 100);
        assert_eq!(dims.pixel_count(), 10_000);
        assert_eq!(dims.buffer_size(), 40_000);
    }

    #[test]
    fn dimensions_swap_twice_restores() {
        let dims = Dimensions::new(320, 240);
        assert_eq!(dims.swapped(), Dimensions::new(240, 320));
        assert_eq!(dims.swapped().swapped(), dims);
    }

    #[test]
    fn orientation_from_degrees() {
        assert_eq!(Orientation::from_degrees(90), Orientation::Landscape);
        assert_eq!(Orientation::from_degrees(0), Orientation::Portrait);
        assert_eq!(Orientation::from_degrees(180), Orientation::Portrait);
        assert_eq!(Orientation::Landscape.degrees(), 90);
    }

    #[test]
    fn rectangle_fits_edges() {
        let rect = Rectangle::new(6, 0, 4, 10);
        assert!(rect.fits(10, 10));
        assert!(!rect.fits(9, 10));
        assert!(!Rectangle::new(u32::MAX, 0, 2, 1).fits(u32::MAX, 1));
    }

    #[test]
    fn rectangle_intersection_and_union() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(5, 5, 10, 10);
        let c = Rectangle::new(10, 0, 5, 5);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c)); // Touching edges only
        assert_eq!(a.intersection(&b), Some(Rectangle::new(5, 5, 5, 5)));
        assert_eq!(a.union(&b), Rectangle::new(0, 0, 15, 15));
        assert_eq!(a.union(&Rectangle::default()), a);
    }

    #[test]
    fn rectangle_clipped_to_bounds() {
        let bounds = Dimensions::new(10, 10);
        assert_eq!(
            Rectangle::clipped(-2, -3, 5, 5, bounds),
            Some(Rectangle::new(0, 0, 3, 2))
        );
        assert_eq!(
            Rectangle::clipped(8, 8, 5, 5, bounds),
            Some(Rectangle::new(8, 8, 2, 2))
        );
        assert_eq!(Rectangle::clipped(12, 0, 5, 5, bounds), None);
        assert_eq!(Rectangle::clipped(0, 0, 0, 5, bounds), None);
    }

    #[test]
    fn rectangle_display() {
        assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "(1, 2, 3x4)");
    }
}

use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::{Dimensions, Rectangle};
use crate::core::pixel::Rgba;
use crate::traits::Paintable;

/// RGBA sprite; alpha zero pixels are transparent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Bitmap filled with one color
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build from row-major RGBA bytes; `None` if the length does not match
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Dimensions::new(width, height).buffer_size() {
            return None;
        }

        let pixels: &[Rgba] = bytemuck::try_cast_slice(bytes).ok()?;
        Some(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }
}

impl Paintable for Bitmap {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render_into(&self, buffer: &mut FrameBuffer, origin: (i64, i64), clip: &Rectangle) {
        let placed = Rectangle::clipped(
            origin.0,
            origin.1,
            self.width,
            self.height,
            buffer.dimensions(),
        );
        let Some(visible) = placed.and_then(|p| p.intersection(clip)) else {
            return;
        };

        for gy in visible.y..visible.y + visible.height {
            let sy = (gy as i64 - origin.1) as u32;
            for gx in visible.x..visible.x + visible.width {
                let sx = (gx as i64 - origin.0) as u32;
                let color = self.pixels[(sy * self.width + sx) as usize];
                if !color.is_transparent() {
                    buffer.set_pixel(gx, gy, color);
                }
            }
        }
    }
}

use crate::core::geometry::{Dimensions, Rectangle};
use crate::core::pixel::Rgba;
use crate::error::{DisplayError, Result};
use crate::traits::SceneRenderer;

/// Off-screen RGBA image holding the last composited frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    dims: Dimensions,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// Create a fully transparent buffer
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            pixels: vec![Rgba::TRANSPARENT; dims.pixel_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Whole buffer in the RGBA wire encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set single pixel, ignoring coordinates outside the buffer
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Fill the part of `area` that lies inside the buffer
    pub fn fill_rect(&mut self, area: &Rectangle, color: Rgba) {
        let Some(area) = area.intersection(&self.dims.full_area()) else {
            return;
        };

        for y in area.y..area.y + area.height {
            let start = y as usize * self.dims.width as usize + area.x as usize;
            self.pixels[start..start + area.width as usize].fill(color);
        }
    }

    /// Overwrite this buffer's contents with `other`'s, same size only
    pub fn paste(&mut self, other: &FrameBuffer) -> Result<()> {
        if other.dims != self.dims {
            return Err(DisplayError::OutOfBounds {
                area: other.dims.full_area(),
                width: self.dims.width,
                height: self.dims.height,
            });
        }

        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }

    /// Repaint from the scene root; without a root the buffer is left as is.
    /// Returns whether a composite pass ran.
    pub fn composite<R: SceneRenderer>(
        &mut self,
        renderer: &mut R,
        root: Option<&R::Root>,
    ) -> Result<bool> {
        let Some(root) = root else {
            return Ok(false);
        };

        let mut scratch = FrameBuffer::new(self.dims);
        renderer.render_into(&mut scratch, root);
        self.paste(&scratch)?;
        Ok(true)
    }

    /// Extract `area` as a row-major RGBA payload without stride padding
    pub fn crop_region(&self, area: &Rectangle) -> Result<Vec<u8>> {
        if !area.fits(self.dims.width, self.dims.height) {
            return Err(DisplayError::OutOfBounds {
                area: *area,
                width: self.dims.width,
                height: self.dims.height,
            });
        }

        let mut payload = Vec::with_capacity(area.byte_len());
        let row_len = area.width as usize;

        for y in area.y..area.y + area.height {
            let start = y as usize * self.dims.width as usize + area.x as usize;
            let row = &self.pixels[start..start + row_len];
            payload.extend_from_slice(bytemuck::cast_slice(row));
        }

        Ok(payload)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(y as usize * self.dims.width as usize + x as usize)
    }
}

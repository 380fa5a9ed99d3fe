mod common;

use common::ScriptedRenderer;
use displayio_pixels::core::{Dimensions, FrameBuffer, Rectangle, Rgba};
use displayio_pixels::traits::SceneRenderer;
use displayio_pixels::DisplayError;

/// Buffer where each pixel encodes its own coordinates
fn patterned(width: u32, height: u32) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(Dimensions::new(width, height));
    for y in 0..height {
        for x in 0..width {
            buffer.set_pixel(x, y, Rgba::new(x as u8, y as u8, (x + y) as u8, 255));
        }
    }
    buffer
}

/// Renderer that paints a single pixel and nothing else
struct DotRenderer;

impl SceneRenderer for DotRenderer {
    type Root = (u32, u32);

    fn render_into(&mut self, buffer: &mut FrameBuffer, root: &(u32, u32)) {
        buffer.set_pixel(root.0, root.1, Rgba::WHITE);
    }

    fn get_refresh_areas(&mut self) -> Vec<Rectangle> {
        Vec::new()
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_buffer_is_transparent() {
    let buffer = FrameBuffer::new(Dimensions::new(16, 9));
    assert_eq!(buffer.dimensions(), Dimensions::new(16, 9));
    assert_eq!(buffer.as_bytes().len(), 16 * 9 * 4);
    assert!(buffer.pixels().iter().all(|p| *p == Rgba::TRANSPARENT));
}

// ============================================================================
// Cropping
// ============================================================================

#[test]
fn test_crop_full_area_equals_whole_buffer() {
    let buffer = patterned(7, 5);
    let payload = buffer.crop_region(&Rectangle::new(0, 0, 7, 5)).unwrap();
    assert_eq!(payload.as_slice(), buffer.as_bytes());
}

#[test]
fn test_crop_sub_region_is_row_major_without_padding() {
    let buffer = patterned(10, 10);
    let payload = buffer.crop_region(&Rectangle::new(3, 2, 2, 3)).unwrap();

    #[rustfmt::skip]
    let expected: Vec<u8> = [
        (3, 2), (4, 2),
        (3, 3), (4, 3),
        (3, 4), (4, 4),
    ]
    .iter()
    .flat_map(|&(x, y): &(u8, u8)| [x, y, x + y, 255])
    .collect();

    assert_eq!(payload, expected);
}

#[test]
fn test_crop_single_pixel_at_corner() {
    let buffer = patterned(10, 10);
    let payload = buffer.crop_region(&Rectangle::new(9, 9, 1, 1)).unwrap();
    assert_eq!(payload, vec![9, 9, 18, 255]);
}

#[test]
fn test_crop_rejects_area_past_right_edge() {
    let buffer = patterned(10, 10);
    let err = buffer.crop_region(&Rectangle::new(8, 0, 3, 1)).unwrap_err();

    assert!(matches!(
        err,
        DisplayError::OutOfBounds { width: 10, height: 10, .. }
    ));
}

#[test]
fn test_crop_rejects_area_past_bottom_edge() {
    let buffer = patterned(10, 10);
    assert!(buffer.crop_region(&Rectangle::new(0, 5, 1, 6)).is_err());
}

#[test]
fn test_crop_rejects_overflowing_coordinates() {
    let buffer = patterned(10, 10);
    assert!(buffer
        .crop_region(&Rectangle::new(u32::MAX, 0, 2, 1))
        .is_err());
}

// ============================================================================
// Compositing
// ============================================================================

#[test]
fn test_composite_without_root_leaves_buffer_untouched() {
    let mut buffer = patterned(6, 6);
    let before = buffer.clone();
    let mut renderer = DotRenderer;

    let ran = buffer.composite(&mut renderer, None).unwrap();

    assert!(!ran);
    assert_eq!(buffer, before);
}

#[test]
fn test_composite_overwrites_previous_contents() {
    let mut buffer = patterned(6, 6);
    let mut renderer = DotRenderer;

    let ran = buffer.composite(&mut renderer, Some(&(2, 3))).unwrap();

    assert!(ran);
    assert_eq!(buffer.pixel(2, 3), Some(Rgba::WHITE));
    // Everything the renderer did not paint is cleared, not kept
    assert_eq!(buffer.pixel(0, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(buffer.pixel(5, 5), Some(Rgba::TRANSPARENT));
}

#[test]
fn test_composite_renders_full_scene() {
    let mut buffer = FrameBuffer::new(Dimensions::new(4, 4));
    let mut renderer = ScriptedRenderer::new(Rgba::opaque(1, 2, 3), Vec::new());

    buffer.composite(&mut renderer, Some(&())).unwrap();

    assert_eq!(*renderer.render_calls.borrow(), 1);
    assert!(buffer.pixels().iter().all(|p| *p == Rgba::opaque(1, 2, 3)));
}

#[test]
fn test_paste_replaces_contents() {
    let mut target = FrameBuffer::new(Dimensions::new(5, 5));
    let source = patterned(5, 5);

    target.paste(&source).unwrap();
    assert_eq!(target, source);
}

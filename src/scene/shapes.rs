use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::Rectangle;
use crate::core::pixel::Rgba;
use crate::traits::Paintable;

/// Vector primitives, positioned relative to their node origin
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle
    Rect { width: u32, height: u32, color: Rgba },

    /// One pixel wide rectangle border
    Outline { width: u32, height: u32, color: Rgba },

    /// Horizontal line starting at the origin
    HLine { length: u32, color: Rgba },

    /// Vertical line starting at the origin
    VLine { length: u32, color: Rgba },

    /// Line between two local points
    Line { x1: u32, y1: u32, x2: u32, y2: u32, color: Rgba },

    /// Circle outline centred at `(radius, radius)`
    Circle { radius: u32, color: Rgba },

    /// Filled circle centred at `(radius, radius)`
    FilledCircle { radius: u32, color: Rgba },
}

impl Shape {
    pub fn color(&self) -> Rgba {
        match self {
            Shape::Rect { color, .. }
            | Shape::Outline { color, .. }
            | Shape::HLine { color, .. }
            | Shape::VLine { color, .. }
            | Shape::Line { color, .. }
            | Shape::Circle { color, .. }
            | Shape::FilledCircle { color, .. } => *color,
        }
    }
}

/// Plots local coordinates into a clipped buffer region
struct Plotter<'a> {
    buffer: &'a mut FrameBuffer,
    origin: (i64, i64),
    clip: Rectangle,
}

impl Plotter<'_> {
    fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        let gx = self.origin.0 + x;
        let gy = self.origin.1 + y;

        if gx < self.clip.x as i64
            || gy < self.clip.y as i64
            || gx >= self.clip.right() as i64
            || gy >= self.clip.bottom() as i64
        {
            return;
        }

        self.buffer.set_pixel(gx as u32, gy as u32, color);
    }

    fn fill(&mut self, x: i64, y: i64, width: u32, height: u32, color: Rgba) {
        let area = Rectangle::clipped(
            self.origin.0 + x,
            self.origin.1 + y,
            width,
            height,
            self.buffer.dimensions(),
        );

        if let Some(area) = area.and_then(|a| a.intersection(&self.clip)) {
            self.buffer.fill_rect(&area, color);
        }
    }

    fn hline(&mut self, x: i64, y: i64, length: u32, color: Rgba) {
        self.fill(x, y, length, 1, color);
    }

    fn vline(&mut self, x: i64, y: i64, length: u32, color: Rgba) {
        self.fill(x, y, 1, length, color);
    }

    /// Clip intersected with the buffer, `None` when nothing can be painted
    fn bounds(&self) -> Option<Rectangle> {
        self.clip.intersection(&self.buffer.dimensions().full_area())
    }

    /// Row offsets from a circle centre at local `(r, r)` that land inside the bounds
    fn visible_rows(&self, r: i64) -> Option<(i64, i64)> {
        let bounds = self.bounds()?;
        let centre = self.origin.1 + r;
        let first = (bounds.y as i64 - centre).max(-r);
        let last = (bounds.bottom() as i64 - 1 - centre).min(r);
        (first <= last).then_some((first, last))
    }

    /// Fill local columns `x0..=x1` of local row `y`
    fn span(&mut self, x0: i64, x1: i64, y: i64, color: Rgba) {
        let Some(bounds) = self.bounds() else {
            return;
        };

        let gy = self.origin.1 + y;
        let left = (self.origin.0 + x0).max(bounds.x as i64);
        let right = (self.origin.0 + x1).min(bounds.right() as i64 - 1);
        if gy < bounds.y as i64 || gy >= bounds.bottom() as i64 || right < left {
            return;
        }

        let area = Rectangle::new(left as u32, gy as u32, (right - left + 1) as u32, 1);
        self.buffer.fill_rect(&area, color);
    }

    /// One pixel ring: points whose distance from the centre rounds to `radius`
    fn circle(&mut self, radius: u32, color: Rgba) {
        let r = radius as i64;
        if r == 0 {
            self.plot(0, 0, color);
            return;
        }
        let Some((first, last)) = self.visible_rows(r) else {
            return;
        };

        // x² + y² within [r² - r + 1, r² + r]
        let r_sq = radius as u64 * radius as u64;
        let inner_sq = r_sq - radius as u64 + 1;
        let outer_sq = r_sq + radius as u64;

        for dy in first..=last {
            let dy_sq = square(dy);
            let outer = isqrt(outer_sq - dy_sq) as i64;
            let inner = inner_sq.checked_sub(dy_sq).map_or(0, ceil_sqrt) as i64;

            if inner == 0 {
                self.span(r - outer, r + outer, r + dy, color);
            } else {
                self.span(r - outer, r - inner, r + dy, color);
                self.span(r + inner, r + outer, r + dy, color);
            }
        }
    }

    fn filled_circle(&mut self, radius: u32, color: Rgba) {
        let r = radius as i64;
        let Some((first, last)) = self.visible_rows(r) else {
            return;
        };

        let r_sq = radius as u64 * radius as u64;
        for dy in first..=last {
            let half = isqrt(r_sq - square(dy)) as i64;
            self.span(r - half, r + half, r + dy, color);
        }
    }

    /// Bresenham's line algorithm
    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Rgba) {
        let (mut x, mut y) = (x1, y1);
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

fn square(v: i64) -> u64 {
    let v = v.unsigned_abs();
    v * v
}

/// Largest `s` with `s * s <= n`
fn isqrt(n: u64) -> u64 {
    let mut s = (n as f64).sqrt() as u64;
    while s.checked_mul(s).map_or(true, |sq| sq > n) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).is_some_and(|sq| sq <= n) {
        s += 1;
    }
    s
}

/// Smallest `s` with `s * s >= n`
fn ceil_sqrt(n: u64) -> u64 {
    let s = isqrt(n);
    if s * s == n {
        s
    } else {
        s + 1
    }
}

impl Paintable for Shape {
    fn size(&self) -> (u32, u32) {
        match *self {
            Shape::Rect { width, height, .. } | Shape::Outline { width, height, .. } => {
                (width, height)
            }
            Shape::HLine { length, .. } => (length, 1),
            Shape::VLine { length, .. } => (1, length),
            Shape::Line { x1, y1, x2, y2, .. } => (
                x1.max(x2).saturating_add(1),
                y1.max(y2).saturating_add(1),
            ),
            Shape::Circle { radius, .. } | Shape::FilledCircle { radius, .. } => {
                let extent = radius.saturating_mul(2).saturating_add(1);
                (extent, extent)
            }
        }
    }

    fn render_into(&self, buffer: &mut FrameBuffer, origin: (i64, i64), clip: &Rectangle) {
        let color = self.color();
        if color.is_transparent() {
            return;
        }

        let mut plotter = Plotter {
            buffer,
            origin,
            clip: *clip,
        };

        match *self {
            Shape::Rect { width, height, .. } => plotter.fill(0, 0, width, height, color),
            Shape::Outline { width, height, .. } => {
                if width == 0 || height == 0 {
                    return;
                }
                plotter.hline(0, 0, width, color);
                plotter.hline(0, height as i64 - 1, width, color);
                plotter.vline(0, 0, height, color);
                plotter.vline(width as i64 - 1, 0, height, color);
            }
            Shape::HLine { length, .. } => plotter.hline(0, 0, length, color),
            Shape::VLine { length, .. } => plotter.vline(0, 0, length, color),
            Shape::Line { x1, y1, x2, y2, .. } => {
                plotter.line(x1 as i64, y1 as i64, x2 as i64, y2 as i64, color)
            }
            Shape::Circle { radius, .. } => plotter.circle(radius, color),
            Shape::FilledCircle { radius, .. } => plotter.filled_circle(radius, color),
        }
    }
}

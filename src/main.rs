use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use displayio_pixels::cli::Cli;
use displayio_pixels::scene::{NodeId, SceneGraph, Shape};
use displayio_pixels::sinks::MemorySink;
use displayio_pixels::{DisplayError, DisplayOptions, PacingPolicy, PixelsDisplay, Rgba};

// === Constants ===

const BALL_RADIUS: u32 = 8;
const BALL_SPEED: i32 = 3;
const BACKGROUND: Rgba = Rgba::opaque(16, 24, 48);
const BALL_COLOR: Rgba = Rgba::opaque(240, 180, 40);
const BORDER_COLOR: Rgba = Rgba::opaque(200, 200, 200);

/// Ball bouncing inside the display bounds
struct Ball {
    node: NodeId,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Ball {
    fn step(&mut self, width: u32, height: u32) {
        let size = (2 * BALL_RADIUS + 1) as i32;
        let max_x = (width as i32 - size).max(0);
        let max_y = (height as i32 - size).max(0);

        self.x += self.dx;
        self.y += self.dy;

        if self.x <= 0 || self.x >= max_x {
            self.dx = -self.dx;
            self.x = self.x.clamp(0, max_x);
        }
        if self.y <= 0 || self.y >= max_y {
            self.dy = -self.dy;
            self.y = self.y.clamp(0, max_y);
        }
    }
}

fn build_scene(scene: &mut SceneGraph, width: u32, height: u32) -> Result<(NodeId, Ball)> {
    let root = scene.add_group(0, 0);
    let background = Shape::Rect {
        width,
        height,
        color: BACKGROUND,
    };
    let border = Shape::Outline {
        width,
        height,
        color: BORDER_COLOR,
    };
    let ball_shape = Shape::FilledCircle {
        radius: BALL_RADIUS,
        color: BALL_COLOR,
    };

    let background = scene.add_drawable(background, 0, 0);
    let border = scene.add_drawable(border, 0, 0);
    let ball = scene.add_drawable(ball_shape, 10, 10);

    for child in [background, border, ball] {
        scene.append(root, child).context("failed to build demo scene")?;
    }

    Ok((
        root,
        Ball {
            node: ball,
            x: 10,
            y: 10,
            dx: BALL_SPEED,
            dy: BALL_SPEED,
        },
    ))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => DisplayOptions::from_json_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => DisplayOptions::default(),
    };
    // Without a config the demo loop paces itself by waiting
    match cli.pacing {
        Some(pacing) => options.pacing = pacing,
        None if cli.config.is_none() => options.pacing = PacingPolicy::Wait,
        None => {}
    }
    if cli.rotate {
        options.rotation = 90;
    }

    let mut display = PixelsDisplay::new(
        cli.width,
        cli.height,
        options,
        SceneGraph::new(),
        MemorySink::open,
    )
    .context("failed to open display")?;

    let (width, height) = (display.width(), display.height());
    let (root, mut ball) = build_scene(display.renderer_mut(), width, height)?;
    display.show(Some(root));

    let started = Instant::now();
    let (mut refreshed, mut skipped, mut violations) = (0u32, 0u32, 0u32);

    for _ in 0..cli.frames {
        ball.step(width, height);
        display
            .renderer_mut()
            .set_position(ball.node, ball.x, ball.y)
            .context("failed to move ball")?;

        match display.refresh(cli.target_fps, cli.min_fps) {
            Ok(true) => refreshed += 1,
            Ok(false) => skipped += 1,
            Err(DisplayError::FrameRateViolation { elapsed, floor }) => {
                warn!("missed frame floor ({:?} > {:?}), resetting timing", elapsed, floor);
                violations += 1;
                display.reset_frame_timing();
            }
            Err(e) => return Err(e).context("refresh failed"),
        }
    }

    display.quit();
    info!("ran {} calls in {:.2?}", cli.frames, started.elapsed());

    let sink = display.sink();
    println!(
        "{}x{} display: {} refreshed, {} skipped, {} violations, {} writes, {} bytes",
        width,
        height,
        refreshed,
        skipped,
        violations,
        sink.writes(),
        sink.bytes_written()
    );

    Ok(())
}

// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::PacingPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "displayio-pixels")]
#[command(about = "Dirty-rectangle refresh demo on an in-memory pixel device", long_about = None)]
pub struct Cli {
    /// Requested display width in pixels
    #[arg(long, default_value_t = 320)]
    pub width: u32,

    /// Requested display height in pixels
    #[arg(long, default_value_t = 240)]
    pub height: u32,

    /// Number of refresh calls to make
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Target frame rate; 0 disables pacing
    #[arg(long = "target-fps", default_value_t = 30.0)]
    pub target_fps: f32,

    /// Minimum frame rate; 0 disables the floor check
    #[arg(long = "min-fps", default_value_t = 1.0)]
    pub min_fps: f32,

    /// Override the pacing policy from the config file
    #[arg(long, value_enum)]
    pub pacing: Option<PacingPolicy>,

    /// Start in landscape
    #[arg(long, default_value = "false")]
    pub rotate: bool,

    /// JSON display options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

// cli.rs - Command-line interface configuration
use clap::Parser;
use glam::Vec3;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "trackball-demo")]
#[command(about = "Virtual trackball demo", long_about = None)]
pub struct Cli {
    /// JSON file overriding trackball tuning parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 640)]
    pub height: u32,

    /// Pivot point for rotation and scaling
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub offset: Option<Vec<f32>>,
}

impl Cli {
    pub fn offset(&self) -> Vec3 {
        match self.offset.as_deref() {
            Some(&[x, y, z]) => Vec3::new(x, y, z),
            _ => Vec3::ZERO,
        }
    }
}

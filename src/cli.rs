// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "plot-surface")]
#[command(about = "Interactive 2D plotting surface", long_about = None)]
pub struct Cli {
    /// JSON view configuration; defaults apply when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Scene drawn over the grid and axes
    #[arg(long, value_enum, default_value_t = SceneKind::Function)]
    pub scene: SceneKind,

    /// Surface width in pixels (overrides the config file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels (overrides the config file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Hide the coordinate grid
    #[arg(long = "no-grid", default_value = "false")]
    pub no_grid: bool,

    /// Hide the axes
    #[arg(long = "no-axis", default_value = "false")]
    pub no_axis: bool,
}

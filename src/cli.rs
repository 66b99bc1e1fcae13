// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "merry-go-round")]
#[command(about = "Animated carousel scene with a scripted camera tour", long_about = None)]
pub struct Cli {
    /// Scene configuration (JSON). Built-in carousel scene when omitted
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Run without a window, stepping a fixed delta per frame
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Milliseconds per headless frame
    #[arg(long = "delta-ms", default_value_t = 16.0)]
    pub delta_ms: f32,

    /// Print a JSON report every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    pub report: u64,

    /// Print the effective scene configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,
}

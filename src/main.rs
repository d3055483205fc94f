//! Buffer trace plotter: reads a text file holding one buffer sample (in
//! milliseconds) per line, prints the minimum buffer and saves a line chart
//! of every sample against its packet number.
use buffer_plot::config::Config;
use buffer_plot::session::{TracePlotter, OUTPUT_PATH};

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(name = env!("CARGO_BIN_NAME"))]
/// Plot a buffer trace
///
/// The minimum buffer is printed to standard output and the chart is saved
/// to /home/jchen18/audio/figures/buffer3M_wired.png.
///
/// JSON Configuration Syntax:
///
/// Config = {
///     ( "chart" : Chart )*
/// };
/// Chart = {
///     ( "width" : number )*,
///     ( "height" : number )*,
///     ( "margin" : number )*,
///     ( "label_area" : number )*,
///     ( "title_font_size" : number )*,
///     ( "label_font_size" : number )*,
///     ( "line_width" : number )*,
/// };
pub struct Cli {
    /// Text file with one buffer sample per line
    #[arg(value_name = "INPUT")]
    input_path: PathBuf,

    /// Chart appearance configuration file (JSON format)
    #[arg(short = 'c')]
    config_path: Option<PathBuf>,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config_path.as_deref())?;
    let plotter = TracePlotter::new(&cli.input_path, Path::new(OUTPUT_PATH), &config.chart);
    plotter
        .run(&mut io::stdout().lock())
        .with_context(|| format!("Failed to plot {}", cli.input_path.display()))?;

    Ok(())
}

// Logs go to stderr so stdout only ever carries the minimum line.
fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::new(path)
            .with_context(|| format!("Failed to load config file {}", path.display())),
        None => Ok(Config::default()),
    }
}

use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use coop::core::config;
use coop::tui;

#[derive(Parser)]
#[command(name = "coop", about = "The pigeon landing page, in your terminal")]
struct Args {
    /// Contact number shown when the panel is revealed
    #[arg(short, long)]
    number: Option<String>,

    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config, args.number.as_deref());

    // Initialize file logger - writes to coop.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = resolved
        .log_level
        .parse()
        .unwrap_or(LevelFilter::Info);
    if let Ok(log_file) = File::create("coop.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Coo! coop starting up");

    tui::run(resolved)?;
    Ok(())
}

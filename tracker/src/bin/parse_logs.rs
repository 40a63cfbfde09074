use std::path::PathBuf;

use clap::Parser;
use parser::LogParser;
use tracker::{parse_batch, resolve_config, TrackerError};

#[derive(Parser, Debug)]
struct Params {
    /// YAML file overriding the built-in parser tables.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Also emit every match and game from the other player's seat.
    #[arg(long)]
    invert: bool,
    #[arg(long)]
    pretty: bool,
    logs: Vec<PathBuf>,
}

fn main() -> Result<(), TrackerError> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");
    let log_parser = LogParser::new(resolve_config(args.config)?);
    let mut batch = parse_batch(&args.logs, &log_parser);
    if args.invert {
        batch = batch.with_inverted();
    }
    let tables = batch.tables();
    let json = if args.pretty {
        serde_json::to_string_pretty(&tables)?
    } else {
        serde_json::to_string(&tables)?
    };
    println!("{json}");
    Ok(())
}

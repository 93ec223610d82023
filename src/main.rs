use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::Level;

use polyquery::commands::Session;
use polyquery::config::FileConfig;
use polyquery::input::load_polygons;

/// Answer geometric queries over a polygon collection
///
/// The polygon file holds one polygon per line: a vertex count followed by
/// that many `x y` integer pairs. Commands are read one per line from stdin
/// (or --commands) and each produces exactly one output line.
///
/// Commands:
///   AREA <EVEN|ODD|MEAN|n>        MAX <AREA|VERTEXES>
///   COUNT <EVEN|ODD|n>            MIN <AREA|VERTEXES>
///   PERMS <polygon>               INFRAME <polygon>
///   INTERSECTIONS <polygon>       RIGHTSHAPES
///   RMECHO [polygon]
///
/// Examples:
///   polyquery shapes.txt < queries.txt
///   polyquery shapes.txt --commands queries.txt -v
#[derive(Parser, Debug)]
#[command(name = "polyquery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon file (optional if set in the config file)
    file: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polyquery.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().is_some_and(|c| c.verbose);
    init_logging(verbose);

    let polygon_path = args
        .file
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.polygons.clone()));
    let commands_path = args
        .commands
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.commands.clone()));

    let Some(polygon_path) = polygon_path else {
        bail!("Missing polygon file argument");
    };

    let loaded = load_polygons(&polygon_path).with_context(|| {
        format!("Failed to read polygon file: {}", polygon_path.display())
    })?;
    if !loaded.skipped.is_empty() {
        tracing::info!(
            skipped = loaded.skipped.len(),
            "some polygon lines were ignored"
        );
    }

    let input: Box<dyn BufRead> = match commands_path {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open command file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(loaded.polygons);
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let stats = session
        .run(input, &mut output)
        .context("Failed while processing commands")?;

    tracing::info!(
        executed = stats.executed,
        failed = stats.failed,
        remaining = session.polygons().len(),
        "done"
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

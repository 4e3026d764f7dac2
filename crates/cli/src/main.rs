use area_selector_core::{Constraints, GestureScript, Rect, SelectorConfig, Size, init};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Override the border width from the environment
    #[arg(long, global = true)]
    border_width: Option<f64>,

    /// Log every commit and rejection to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded gesture script and print each committed selection
    Replay {
        /// Path to the JSON gesture script
        script: PathBuf,

        /// Print the commits as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check a rectangle against a container
    Validate {
        /// Container size as WIDTHxHEIGHT
        #[arg(long)]
        container: String,

        /// Rectangle as X,Y,WIDTH,HEIGHT
        rect: String,
    },
}

fn main() -> Result<()> {
    // Setup
    init();
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = SelectorConfig::load().context("Failed to load configuration")?;
    if let Some(width) = args.border_width {
        config
            .set_border_width(width)
            .context("Invalid --border-width")?;
    }

    match args.command {
        Commands::Replay { script, json } => replay(&script, config, json),
        Commands::Validate { container, rect } => validate(&container, &rect, config),
    }
}

fn replay(path: &Path, config: SelectorConfig, json: bool) -> Result<()> {
    let script = GestureScript::load(path)
        .with_context(|| format!("Failed to load gesture script {}", path.display()))?;
    debug!(path = %path.display(), events = script.events.len(), "Loaded gesture script");
    let commits = script
        .replay(config)
        .context("Gesture script has an invalid container or initial selection")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&commits)?);
        return Ok(());
    }

    if commits.is_empty() {
        println!("No commits");
    }
    for (index, rect) in commits.iter().enumerate() {
        println!("{:>3}: {}", index + 1, format_rect(rect));
    }
    Ok(())
}

fn validate(container: &str, rect: &str, config: SelectorConfig) -> Result<()> {
    let container = parse_size(container).context("Invalid --container")?;
    let rect = parse_rect(rect).context("Invalid rectangle")?;
    let constraints = Constraints::new(container, config.min_size);

    match constraints.check(&rect) {
        Ok(()) => println!("valid: {}", format_rect(&rect)),
        Err(reason) => println!("rejected: {} ({})", format_rect(&rect), reason),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_size(raw: &str) -> Result<Size> {
    let values = parse_numbers(raw, 'x')?;
    let &[width, height] = values.as_slice() else {
        bail!("expected WIDTHxHEIGHT, got {raw:?}");
    };
    Ok(Size::new(width, height))
}

fn parse_rect(raw: &str) -> Result<Rect> {
    let values = parse_numbers(raw, ',')?;
    let &[x, y, width, height] = values.as_slice() else {
        bail!("expected X,Y,WIDTH,HEIGHT, got {raw:?}");
    };
    Ok(Rect::new(x, y, width, height))
}

fn parse_numbers(raw: &str, separator: char) -> Result<Vec<f64>> {
    raw.split(separator)
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("{part:?} is not a number"))
        })
        .collect()
}

/// Helper to print a rectangle on one line
fn format_rect(rect: &Rect) -> String {
    format!(
        "origin=({}, {}) size={}x{}",
        rect.min_x(),
        rect.min_y(),
        rect.width(),
        rect.height()
    )
}

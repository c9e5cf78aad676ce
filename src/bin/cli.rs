//! Demand forecast CLI - offline scoring and artifact inspection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use demand_forecast::data::features::{CATEGORICAL_FEATURES, NUMERIC_FEATURES, NUM_NUMERIC};
use demand_forecast::{ArtifactPaths, ForecastRequest, ForecastService};

/// Default artifact directory (relative to working directory)
const DEFAULT_ARTIFACT_DIR: &str = ".";

#[derive(Parser)]
#[command(name = "forecast")]
#[command(author, version, about = "Retail demand forecast CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding onehot_encoder.json, standard_scaler.json and DL_model_tf.onnx
    #[arg(long, global = true, default_value = DEFAULT_ARTIFACT_DIR)]
    artifact_dir: PathBuf,

    /// Log artifact loading
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast demand for one request
    Predict {
        /// Request JSON file ("-" for stdin)
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Show the assembled and scaled feature row for one request
    Features {
        /// Request JSON file ("-" for stdin)
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Show encoder vocabulary and scaler layout
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let paths = ArtifactPaths::in_dir(&cli.artifact_dir);
    let service = ForecastService::load(&paths)
        .with_context(|| format!("Failed to load artifacts from {:?}", cli.artifact_dir))?;

    match cli.command {
        Commands::Predict { request } => cmd_predict(&service, &request),
        Commands::Features { request } => cmd_features(&service, &request),
        Commands::Inspect => cmd_inspect(&service),
    }
}

fn read_request(path: &Path) -> Result<ForecastRequest> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?
    };

    serde_json::from_str(&content).context("Invalid forecast request")
}

fn cmd_predict(service: &ForecastService, request: &Path) -> Result<()> {
    let req = read_request(request)?;
    let response = service.predict(&req).context("Prediction failed")?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn cmd_features(service: &ForecastService, request: &Path) -> Result<()> {
    let req = read_request(request)?;
    let names = service.feature_names()?;
    let raw = service.raw_features(&req)?;
    let scaled = service.featurize(&req)?;

    println!("{:<32} {:>12} {:>12}", "feature", "raw", "scaled");
    for ((name, raw), scaled) in names.iter().zip(&raw).zip(&scaled) {
        // Only show one-hot columns that are set
        if *raw == 0.0 && !is_numeric_or_date(name) {
            continue;
        }
        println!("{:<32} {:>12.4} {:>12.4}", name, raw, scaled);
    }
    Ok(())
}

fn is_numeric_or_date(name: &str) -> bool {
    name.starts_with("dayofweek_") || NUMERIC_FEATURES.contains(&name)
}

fn cmd_inspect(service: &ForecastService) -> Result<()> {
    let encoder = service
        .encoder()
        .context("Encoder artifact is not loaded")?;
    let scaler = service.scaler().context("Scaler artifact is not loaded")?;

    println!("Encoder: {} columns, {} outputs", encoder.n_features_in(), encoder.output_width());
    for (name, cats) in CATEGORICAL_FEATURES.iter().zip(&encoder.categories) {
        println!("  {:<20} {}", name, cats.join(", "));
    }

    println!(
        "Scaler: {} columns ({} numeric + {} one-hot + 2 date)",
        scaler.n_features(),
        NUM_NUMERIC,
        encoder.output_width()
    );
    println!("Health: {}", serde_json::to_string(&service.health())?);
    Ok(())
}

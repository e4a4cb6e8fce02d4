use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod config;
mod export;
mod workflow;

/// Plans a two-stage flocculant preparation and writes the report artifacts.
#[derive(Debug, Parser)]
#[command(name = "flocprep", version, about = "Two-stage flocculant preparation planner")]
struct Cli {
    /// Path to the preparation request YAML.
    #[arg(long, default_value = "flocprep-app/request.yaml")]
    request: PathBuf,

    /// Directory holding the SOP preset YAML files.
    #[arg(long, default_value = "data/presets")]
    presets: PathBuf,

    /// Root directory for per-run outputs.
    #[arg(long, default_value = "data/runs")]
    output_root: PathBuf,

    /// Title printed on the report artifacts.
    #[arg(long, default_value = "Flocculant Preparation Report")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Flocprep Application ---");

    let request_str = fs::read_to_string(&cli.request)
        .with_context(|| format!("Failed to read {}", cli.request.display()))?;
    let request: workflow::PreparationRequest = serde_yaml::from_str(&request_str)
        .with_context(|| format!("Failed to parse {}", cli.request.display()))?;

    let presets = config::PresetLibrary::load(&cli.presets)?;

    let session = workflow::run_preparation(&request, &presets)?;

    let output_dir = cli.output_root.join(format!(
        "preparation_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    // Keep the request next to the artifacts for traceability
    fs::copy(&cli.request, output_dir.join("request.yaml"))?;

    export::write_reports(&output_dir, &session, &cli.title)?;

    println!(
        "\nPreparation planned. Reports are in '{}'",
        output_dir.display()
    );

    Ok(())
}

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use photoplan_core::{Camera, DatasetSpec};
use photoplan_planner::{plan_photo_survey, PlanOptions};
use serde::{Deserialize, Serialize};

/// Photo-capture flight planner for a drone-mounted pinhole camera.
#[derive(Debug, Parser)]
#[command(author, version, about = "Boustrophedon photo-capture flight planner")]
struct Args {
    /// Path to JSON file with `camera` and `dataset` sections.
    #[arg(long)]
    input: String,

    /// Optional path to JSON PlanOptions. Defaults are used if omitted.
    #[arg(long)]
    options: Option<String>,

    /// Print only the plan summary, without the waypoint list.
    #[arg(long)]
    summary_only: bool,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    output: Option<String>,
}

/// Contents of the `--input` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlanInput {
    camera: Camera,
    dataset: DatasetSpec,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}

fn run_photo_plan_from_files(
    input_path: &str,
    options_path: Option<&str>,
    summary_only: bool,
) -> Result<String> {
    let input: PlanInput = load_json_file(Path::new(input_path))?;
    info!(
        "camera {}x{} px, height {} m, scan {} x {} m",
        input.camera.image_size_x_px,
        input.camera.image_size_y_px,
        input.dataset.height,
        input.dataset.scan_dimension_x,
        input.dataset.scan_dimension_y
    );

    let options = if let Some(path) = options_path {
        load_json_file::<PlanOptions>(Path::new(path))?
    } else {
        PlanOptions::default()
    };

    let plan = plan_photo_survey(&input.camera, &input.dataset, &options)
        .context("photo planning failed")?;
    info!(
        "{} waypoints at {:.3} m/s",
        plan.waypoints.len(),
        plan.capture_speed
    );

    let json = if summary_only {
        serde_json::to_string_pretty(&plan.summary())?
    } else {
        serde_json::to_string_pretty(&plan)?
    };
    Ok(json)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let json = run_photo_plan_from_files(&args.input, args.options.as_deref(), args.summary_only)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("failed to write {path}"))?;
            info!("plan written to {path}");
        }
        None => println!("{}", json),
    }
    Ok(())
}

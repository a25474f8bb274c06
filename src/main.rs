#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use thronecard_core::RunRecord;

/// Global resources root, set from command line
static RESOURCES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Record shown by this instance, loaded once at startup
static RUN_RECORD: OnceLock<RunRecord> = OnceLock::new();

/// Get the resources root (set from command line or default)
pub fn get_resources_dir() -> PathBuf {
    RESOURCES_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the record this instance renders
pub fn get_run_record() -> RunRecord {
    RUN_RECORD.get().cloned().unwrap_or_else(RunRecord::example)
}

/// Throne Card - run summary card viewer
#[derive(Parser, Debug)]
#[command(name = "thronecard-desktop")]
#[command(about = "Throne Card - render a run summary card")]
struct Args {
    /// Directory containing the `resources/` image tree
    #[arg(short, long)]
    resources: Option<PathBuf>,

    /// JSON run record file to render (defaults to the built-in example run)
    #[arg(short = 'f', long)]
    record: Option<PathBuf>,
}

fn load_record(path: &PathBuf) -> anyhow::Result<RunRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading record file {}", path.display()))?;
    let record: RunRecord = serde_json::from_str(&raw)
        .with_context(|| format!("parsing record file {}", path.display()))?;
    record
        .validate()
        .with_context(|| format!("validating record file {}", path.display()))?;
    Ok(record)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(dir) = args.resources {
        let _ = RESOURCES_DIR.set(dir);
    }

    let record = match &args.record {
        Some(path) => load_record(path)?,
        None => RunRecord::example(),
    };
    let title = format!("Throne Card - {} {}", record.character, record.level);
    let _ = RUN_RECORD.set(record);

    tracing::info!("Starting with resources dir: {:?}", get_resources_dir());

    // Window sized for a single portrait card
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(380.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

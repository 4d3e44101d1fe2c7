//! dentarch CLI - chart inspector and snapshot exporter
//!
//! Loads chart and AI-diagnosis JSON fixtures through the same controller
//! the embedding application uses, prints per-tooth summaries, and exports
//! declarative scene snapshots for downstream renderers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dentarch_chart::{ChartController, ChartOptions, LoadState};
use dentarch_ir::ToothNumber;

mod sources;

use sources::{JsonFileChartSource, JsonFileDiagnosisSource};

#[derive(Parser)]
#[command(name = "dentarch")]
#[command(about = "3D dental chart inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a per-tooth summary of a chart
    Info {
        /// Chart records JSON file
        chart: PathBuf,
        /// AI diagnosis JSON file
        #[arg(short, long)]
        diagnosis: Option<PathBuf>,
    },
    /// Export a scene snapshot as JSON
    Snapshot {
        /// Chart records JSON file
        chart: PathBuf,
        /// AI diagnosis JSON file
        #[arg(short, long)]
        diagnosis: Option<PathBuf>,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Tooth to select before the snapshot
        #[arg(short, long)]
        select: Option<String>,
        /// Frames to advance so animations settle
        #[arg(short, long, default_value_t = 120)]
        frames: u32,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { chart, diagnosis } => {
            let ctrl = load_controller(&chart, diagnosis.as_deref()).await?;
            show_info(&ctrl);
        }
        Commands::Snapshot {
            chart,
            diagnosis,
            output,
            select,
            frames,
        } => {
            let mut ctrl = load_controller(&chart, diagnosis.as_deref()).await?;
            if let Some(label) = select {
                let n: ToothNumber = label
                    .clone()
                    .try_into()
                    .with_context(|| format!("invalid tooth {label:?}"))?;
                ctrl.select_tooth(n);
            }
            for _ in 0..frames {
                ctrl.step(1.0 / 60.0);
            }
            let list = ctrl
                .render_list()
                .context("scene is not ready; chart data missing")?;
            let json = serde_json::to_string_pretty(&list)?;
            std::fs::write(&output, json)?;
            println!(
                "Wrote {} drawables, {} labels, {} badges to {}",
                list.drawables.len(),
                list.labels.len(),
                list.badges.len(),
                output.display()
            );
        }
    }

    Ok(())
}

async fn load_controller(
    chart: &std::path::Path,
    diagnosis: Option<&std::path::Path>,
) -> Result<ChartController<JsonFileChartSource, JsonFileDiagnosisSource>> {
    let chart_source = JsonFileChartSource::new(chart);
    let diagnosis_source = match diagnosis {
        Some(path) => JsonFileDiagnosisSource::new(path),
        None => JsonFileDiagnosisSource::empty(),
    };
    let mut ctrl = ChartController::new(chart_source, diagnosis_source, ChartOptions::default());
    ctrl.load_patient("local")
        .await
        .with_context(|| format!("failed to load chart from {}", chart.display()))?;
    Ok(ctrl)
}

fn show_info(ctrl: &ChartController<JsonFileChartSource, JsonFileDiagnosisSource>) {
    if *ctrl.state() != LoadState::Ready {
        println!("Chart not ready: {:?}", ctrl.state());
        return;
    }

    println!("Teeth: {}", ctrl.teeth().len());
    let flagged = ctrl.teeth().iter().filter(|t| t.highlight).count();
    println!("Teeth with findings: {flagged}");
    println!();

    for tooth in ctrl.teeth() {
        let mut line = format!("  {:>2}: {:?}", tooth.number.get(), tooth.status);
        if let Some(restoration) = tooth.restoration {
            line.push_str(&format!(", {restoration:?}"));
            if !tooth.surfaces.is_empty() {
                let codes: Vec<String> =
                    tooth.surfaces.iter().map(|s| format!("{s:?}")).collect();
                line.push_str(&format!(" [{}]", codes.join(", ")));
            }
        }
        if let Some(worst) = tooth.worst_finding() {
            line.push_str(&format!(
                ", {} finding(s), worst {:?}",
                tooth.ai_findings.len(),
                worst.severity
            ));
        }
        println!("{line}");
    }
}

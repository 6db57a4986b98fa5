mod bootstrap;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use pipeline::RunOutcome;
use viz_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;
    bootstrap::ensure_output_dir(&settings.output_dir)?;

    tracing::info!("superstore-viz v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, output directory: {}",
        settings.input.display(),
        settings.output_dir.display()
    );

    match pipeline::run(&settings)? {
        RunOutcome::Completed(report) => {
            tracing::info!(
                "Run complete: {} records, {} charts written ({:.2}s load, {:.2}s render)",
                report.rows_loaded,
                report.charts_written.len(),
                report.load_time_seconds,
                report.render_time_seconds,
            );
        }
        RunOutcome::NoData => {
            tracing::error!("Run terminated: the dataset could not be loaded");
        }
    }

    Ok(())
}

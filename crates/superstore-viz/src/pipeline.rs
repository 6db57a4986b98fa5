//! The load → aggregate → render pipeline.
//!
//! Runs the three aggregate/render pairs in sequence over a single loaded
//! table.  A missing dataset short-circuits the whole run before any chart
//! is produced; any later failure aborts the run.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};
use viz_charts::style::{self, ChartStyle};
use viz_core::formatting::format_currency;
use viz_core::models::Totals;
use viz_core::settings::Settings;
use viz_data::aggregator::SalesAggregator;
use viz_data::reader::load_sales_table;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced by a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Number of sales records loaded from the CSV.
    pub rows_loaded: usize,
    /// Whole-table sales/profit sums.
    pub grand_totals: Totals,
    /// Paths of the chart files written, in generation order.
    pub charts_written: Vec<PathBuf>,
    /// Wall-clock seconds spent loading the dataset.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent aggregating and rendering all charts.
    pub render_time_seconds: f64,
}

/// How a pipeline run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// All three charts were written.
    Completed(PipelineReport),
    /// The dataset was missing or unreadable; nothing was rendered.
    NoData,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline.
///
/// 1. Load the sales table from `settings.input`.
/// 2. On a data-load failure, report and return [`RunOutcome::NoData`]
///    without touching the renderer.
/// 3. Otherwise derive each summary view and render its chart into
///    `settings.output_dir`.
pub fn run(settings: &Settings) -> anyhow::Result<RunOutcome> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let load_start = Instant::now();
    let table = match load_sales_table(&settings.input) {
        Ok(table) => table,
        Err(err) if err.is_data_load() => {
            error!("{err}");
            return Ok(RunOutcome::NoData);
        }
        Err(err) => return Err(err.into()),
    };
    let load_time = load_start.elapsed().as_secs_f64();
    info!("Dataset loaded and prepared ({} records)", table.len());

    let chart_style = ChartStyle::default();
    let render_start = Instant::now();
    let mut charts_written: Vec<PathBuf> = Vec::with_capacity(3);

    // ── Step 2: Monthly trend ─────────────────────────────────────────────────
    info!("Generating chart 1: monthly sales and profit");
    let months = SalesAggregator::monthly_totals(&table);
    let path = settings.output_dir.join(style::MONTHLY_TREND_FILE);
    viz_charts::render_monthly_trend(&months, &chart_style, &path)?;
    charts_written.push(path);

    // ── Step 3: Sub-category bars ─────────────────────────────────────────────
    info!("Generating chart 2: sales by sub-category");
    let subcategories = SalesAggregator::totals_by_subcategory(&table);
    let path = settings.output_dir.join(style::SUBCATEGORY_FILE);
    viz_charts::render_subcategory_bars(&subcategories, &chart_style, &path)?;
    charts_written.push(path);

    // ── Step 4: Segment bars ──────────────────────────────────────────────────
    info!("Generating chart 3: sales by segment");
    let segments = SalesAggregator::totals_by_segment(&table);
    let path = settings.output_dir.join(style::SEGMENT_FILE);
    viz_charts::render_segment_bars(&segments, &chart_style, &path)?;
    charts_written.push(path);

    let render_time = render_start.elapsed().as_secs_f64();

    // ── Step 5: Report ────────────────────────────────────────────────────────
    let grand_totals = SalesAggregator::grand_totals(&table);
    info!(
        "All charts generated: total sales {}, total profit {}",
        format_currency(grand_totals.sales),
        format_currency(grand_totals.profit),
    );

    Ok(RunOutcome::Completed(PipelineReport {
        rows_loaded: table.len(),
        grand_totals,
        charts_written,
        load_time_seconds: load_time,
        render_time_seconds: render_time,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    const HEADER: &str = "Row ID,Order Date,Segment,Sub-Category,Sales,Profit";

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    fn settings(input: &Path, output_dir: &Path) -> Settings {
        Settings {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            log_level: "INFO".to_string(),
        }
    }

    fn sample_csv(dir: &Path) -> PathBuf {
        write_csv(
            dir,
            "store.csv",
            &[
                HEADER,
                "1,08/11/2016,Consumer,Bookcases,261.96,41.91",
                "2,08/11/2016,Consumer,Chairs,731.94,-219.58",
                "3,12/06/2017,Corporate,Labels,14.62,6.87",
            ],
        )
    }

    #[test]
    fn test_run_writes_all_three_charts() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let input = sample_csv(dir.path());

        let outcome = run(&settings(&input, out.path())).unwrap();

        match outcome {
            RunOutcome::Completed(report) => {
                assert_eq!(report.rows_loaded, 3);
                assert_eq!(report.charts_written.len(), 3);
                for chart in &report.charts_written {
                    assert!(chart.exists(), "missing chart {}", chart.display());
                }
                assert!((report.grand_totals.sales - 1008.52).abs() < 1e-9);
            }
            RunOutcome::NoData => panic!("expected a completed run"),
        }
    }

    #[test]
    fn test_run_missing_input_renders_nothing() {
        let out = TempDir::new().unwrap();
        let missing = out.path().join("nope.csv");

        let outcome = run(&settings(&missing, out.path())).unwrap();

        assert!(matches!(outcome, RunOutcome::NoData));
        // The output directory must stay untouched.
        let written = std::fs::read_dir(out.path()).unwrap().count();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_run_malformed_data_is_fatal() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let input = write_csv(
            dir.path(),
            "store.csv",
            &[HEADER, "1,32/13/2016,Consumer,Bookcases,1.0,0.5"],
        );

        let result = run(&settings(&input, out.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_twice_yields_identical_totals() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let input = sample_csv(dir.path());
        let settings = settings(&input, out.path());

        let first = match run(&settings).unwrap() {
            RunOutcome::Completed(report) => report,
            RunOutcome::NoData => panic!("expected a completed run"),
        };
        let second = match run(&settings).unwrap() {
            RunOutcome::Completed(report) => report,
            RunOutcome::NoData => panic!("expected a completed run"),
        };

        assert_eq!(first.rows_loaded, second.rows_loaded);
        assert_eq!(first.grand_totals, second.grand_totals);
    }

    #[test]
    fn test_run_empty_dataset_still_completes() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let input = write_csv(dir.path(), "store.csv", &[HEADER]);

        let outcome = run(&settings(&input, out.path())).unwrap();

        match outcome {
            RunOutcome::Completed(report) => {
                assert_eq!(report.rows_loaded, 0);
                assert_eq!(report.charts_written.len(), 3);
            }
            RunOutcome::NoData => panic!("empty table is not a load failure"),
        }
    }
}

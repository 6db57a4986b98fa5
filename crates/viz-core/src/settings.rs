use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Generate the three Superstore sales charts from a CSV dataset.
///
/// Chart appearance is fixed; these options only relocate the input file and
/// output directory and tune logging.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "superstore-viz",
    about = "Render Superstore sales summary charts to PNG files",
    version
)]
pub struct Settings {
    /// Path to the Superstore CSV dataset
    #[arg(long, default_value = "Superstore.csv")]
    pub input: PathBuf,

    /// Directory the three chart PNGs are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        // Defaults identical to running the binary with no arguments.
        Settings::parse_from(["superstore-viz"])
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

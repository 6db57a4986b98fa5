use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the chart generator.
#[derive(Error, Debug)]
pub enum VizError {
    /// The input dataset file could not be opened or read.
    ///
    /// This is the one failure kind the pipeline recognises and reports
    /// gracefully; everything else aborts the run.
    #[error("Failed to read dataset {path}: {source}")]
    DataLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the CSV header row.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// A date cell did not match any recognised day-first format.
    #[error("Row {row}: invalid date '{value}'")]
    DateParse { row: usize, value: String },

    /// A numeric cell could not be parsed as a float.
    #[error("Row {row}, column '{column}': invalid number '{value}'")]
    NumberParse {
        row: usize,
        column: String,
        value: String,
    },

    /// A chart could not be drawn or written to disk.
    #[error("Failed to render chart {name}: {message}")]
    Render { name: String, message: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    /// `true` when this is the "input file missing or unreadable" failure
    /// that the pipeline handles by reporting and stopping.
    pub fn is_data_load(&self) -> bool {
        matches!(self, VizError::DataLoad { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_data_load() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VizError::DataLoad {
            path: PathBuf::from("/some/Superstore.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read dataset"));
        assert!(msg.contains("/some/Superstore.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = VizError::MissingColumn("Order Date".to_string());
        assert_eq!(
            err.to_string(),
            "Dataset is missing required column 'Order Date'"
        );
    }

    #[test]
    fn test_error_display_date_parse() {
        let err = VizError::DateParse {
            row: 7,
            value: "not-a-date".to_string(),
        };
        assert_eq!(err.to_string(), "Row 7: invalid date 'not-a-date'");
    }

    #[test]
    fn test_error_display_number_parse() {
        let err = VizError::NumberParse {
            row: 3,
            column: "Sales".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Row 3, column 'Sales': invalid number 'abc'");
    }

    #[test]
    fn test_error_display_render() {
        let err = VizError::Render {
            name: "1_sales_profit_over_time.png".to_string(),
            message: "backend failure".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to render chart"));
        assert!(msg.contains("backend failure"));
    }

    #[test]
    fn test_is_data_load() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = VizError::DataLoad {
            path: PathBuf::from("x.csv"),
            source: io_err,
        };
        assert!(err.is_data_load());
        assert!(!VizError::MissingColumn("Sales".into()).is_data_load());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VizError = io_err.into();
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_data_load());
    }
}

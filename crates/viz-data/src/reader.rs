//! CSV loading for the Superstore dataset.
//!
//! Reads a windows-1252 encoded CSV file and converts each row into a
//! [`SalesRecord`] for downstream aggregation.

use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use encoding_rs::WINDOWS_1252;
use tracing::{debug, info};
use viz_core::models::{SalesRecord, SalesTable};
use viz_core::{Result, VizError};

/// Header names the dataset must carry.  All other columns are ignored.
const COL_ORDER_DATE: &str = "Order Date";
const COL_SALES: &str = "Sales";
const COL_PROFIT: &str = "Profit";
const COL_SUB_CATEGORY: &str = "Sub-Category";
const COL_SEGMENT: &str = "Segment";

/// Day-first date formats accepted in the `Order Date` column.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d/%m/%y"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the Superstore CSV at `path` into a [`SalesTable`].
///
/// A missing or unopenable file yields [`VizError::DataLoad`], the one
/// failure the pipeline reports gracefully.  Malformed headers, dates or
/// numbers are fatal errors naming the offending row.
pub fn load_sales_table(path: &Path) -> Result<SalesTable> {
    let raw = std::fs::read(path).map_err(|source| VizError::DataLoad {
        path: path.to_path_buf(),
        source,
    })?;

    // The dataset ships as windows-1252; decode before handing it to the
    // CSV parser, which expects UTF-8.
    let (text, _, _) = WINDOWS_1252.decode(&raw);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;
    debug!(
        "Resolved columns from {} header fields in {}",
        headers.len(),
        path.display()
    );

    let mut records: Vec<SalesRecord> = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // Row numbers are 1-based data rows, matching what a user sees
        // below the header in a spreadsheet.
        records.push(parse_record(&record, &columns, i + 1)?);
    }

    info!(
        "Loaded {} sales records from {}",
        records.len(),
        path.display()
    );

    Ok(SalesTable::new(records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Positions of the five required columns within the header row.
struct ColumnIndices {
    order_date: usize,
    sales: usize,
    profit: usize,
    sub_category: usize,
    segment: usize,
}

/// Locate each required column, failing with the first missing name.
fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| VizError::MissingColumn(name.to_string()))
    };

    Ok(ColumnIndices {
        order_date: position(COL_ORDER_DATE)?,
        sales: position(COL_SALES)?,
        profit: position(COL_PROFIT)?,
        sub_category: position(COL_SUB_CATEGORY)?,
        segment: position(COL_SEGMENT)?,
    })
}

/// Convert one CSV row into a [`SalesRecord`].
fn parse_record(record: &StringRecord, columns: &ColumnIndices, row: usize) -> Result<SalesRecord> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    Ok(SalesRecord {
        order_date: parse_dayfirst_date(field(columns.order_date), row)?,
        sales: parse_amount(field(columns.sales), COL_SALES, row)?,
        profit: parse_amount(field(columns.profit), COL_PROFIT, row)?,
        sub_category: field(columns.sub_category).to_string(),
        segment: field(columns.segment).to_string(),
    })
}

/// Parse a day-first date string, trying each accepted format in order.
fn parse_dayfirst_date(value: &str, row: usize) -> Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    Err(VizError::DateParse {
        row,
        value: value.to_string(),
    })
}

/// Parse a monetary cell as `f64`.
fn parse_amount(value: &str, column: &str, row: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|_| VizError::NumberParse {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

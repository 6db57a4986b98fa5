use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single order row read from the Superstore CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
    /// Sale amount in US dollars.
    pub sales: f64,
    /// Profit (possibly negative) in US dollars.
    pub profit: f64,
    /// Product sub-category name, e.g. "Chairs".
    pub sub_category: String,
    /// Customer segment name, e.g. "Consumer".
    pub segment: String,
}

impl SalesRecord {
    /// The `"YYYY-MM"` month key this record belongs to.
    ///
    /// Standard calendar-month bucketing: a record belongs to the month
    /// containing its order date.
    pub fn month_key(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.order_date.year(),
            self.order_date.month()
        )
    }
}

/// The full loaded dataset, in input-row order.
///
/// Owned by the pipeline for the duration of one run; referenced (never
/// mutated) by all three aggregation/render pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesTable {
    /// All records, in the order they appeared in the file.
    pub records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sales and profit sums accumulated across multiple records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Accumulated sales in US dollars.
    pub sales: f64,
    /// Accumulated profit in US dollars.
    pub profit: f64,
    /// Number of records folded into this total.
    pub count: u32,
}

impl Totals {
    /// Add a single record's amounts to the running totals.
    pub fn add_record(&mut self, record: &SalesRecord) {
        self.sales += record.sales;
        self.profit += record.profit;
        self.count += 1;
    }
}

/// Summed sales and profit for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month key in `"YYYY-MM"` form, e.g. `"2016-11"`.
    pub month: String,
    /// Combined totals for the month.
    pub totals: Totals,
}

/// Summed sales and profit for one named group (sub-category or segment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupTotals {
    /// The group name this row aggregates.
    pub name: String,
    /// Combined totals for the group.
    pub totals: Totals,
}

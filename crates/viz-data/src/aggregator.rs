//! Summary-view derivation over the loaded sales table.
//!
//! Each operation is a pure function of the table: re-running on identical
//! input produces identical totals.

use std::collections::BTreeMap;

use viz_core::models::{GroupTotals, MonthlyTotals, SalesRecord, SalesTable, Totals};

// ── SalesAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that groups sales records into the three summary views.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Bucket records by calendar month of the order date, summing sales and
    /// profit per bucket.  Key format: `"YYYY-MM"`.
    ///
    /// Returns months sorted ascending.  An empty table yields an empty view.
    pub fn monthly_totals(table: &SalesTable) -> Vec<MonthlyTotals> {
        // BTreeMap keys sort lexicographically, which for "YYYY-MM" strings
        // is chronological order.
        let mut map: BTreeMap<String, Totals> = BTreeMap::new();

        for record in &table.records {
            map.entry(record.month_key())
                .or_default()
                .add_record(record);
        }

        map.into_iter()
            .map(|(month, totals)| MonthlyTotals { month, totals })
            .collect()
    }

    /// Group records by product sub-category, summing sales and profit.
    ///
    /// Sorted by descending total sales; equal totals fall back to ascending
    /// group name so output order is reproducible.
    pub fn totals_by_subcategory(table: &SalesTable) -> Vec<GroupTotals> {
        Self::totals_by_group(table, |record| &record.sub_category)
    }

    /// Group records by customer segment, summing sales and profit.
    ///
    /// Same ordering rule as [`Self::totals_by_subcategory`].
    pub fn totals_by_segment(table: &SalesTable) -> Vec<GroupTotals> {
        Self::totals_by_group(table, |record| &record.segment)
    }

    /// Sum sales and profit across the whole table.
    pub fn grand_totals(table: &SalesTable) -> Totals {
        let mut totals = Totals::default();
        for record in &table.records {
            totals.add_record(record);
        }
        totals
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Generic grouping driver.
    ///
    /// `key_fn` selects the grouping column of a record.
    fn totals_by_group<'a>(
        table: &'a SalesTable,
        key_fn: impl Fn(&'a SalesRecord) -> &'a str,
    ) -> Vec<GroupTotals> {
        let mut map: BTreeMap<&str, Totals> = BTreeMap::new();

        for record in &table.records {
            map.entry(key_fn(record)).or_default().add_record(record);
        }

        let mut groups: Vec<GroupTotals> = map
            .into_iter()
            .map(|(name, totals)| GroupTotals {
                name: name.to_string(),
                totals,
            })
            .collect();

        // Descending sales, name ascending as the deterministic tie-break.
        groups.sort_by(|a, b| {
            b.totals
                .sales
                .total_cmp(&a.totals.sales)
                .then_with(|| a.name.cmp(&b.name))
        });

        groups
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

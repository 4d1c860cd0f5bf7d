//! Strike-statistics table extraction.
//!
//! The striking, clinch, and ground tables share one markup shape and are
//! told apart by how many same-shaped table bodies precede them in
//! document order. Each category is gated on its title label first; a page
//! without the label contributes no rows for that category, and a passed
//! title check with too few table bodies yields zero rows rather than an
//! error.

use scraper::Html;

use crate::dom::{body_rows, has_table_titled, tbodies};
use crate::types::{ClinchRow, GroundRow, StrikingRow};

/// Ordinal of each category among the page's same-shaped table bodies.
const STRIKING_ORDINAL: usize = 0;
const CLINCH_ORDINAL: usize = 1;
const GROUND_ORDINAL: usize = 2;

/// Title labels as rendered on the page. Striking is lowercase there.
const STRIKING_TITLE: &str = "striking";
const CLINCH_TITLE: &str = "Clinch";
const GROUND_TITLE: &str = "Ground";

/// Rows of the striking table, when the page carries one.
pub fn striking_stats(doc: &Html) -> Vec<StrikingRow> {
    if !has_table_titled(doc, STRIKING_TITLE) {
        return Vec::new();
    }
    category_rows(doc, STRIKING_ORDINAL, StrikingRow::COLUMNS)
        .iter()
        .map(|cells| StrikingRow::from_cells(cells))
        .collect()
}

/// Rows of the clinch table, when the page carries one.
pub fn clinch_stats(doc: &Html) -> Vec<ClinchRow> {
    if !has_table_titled(doc, CLINCH_TITLE) {
        return Vec::new();
    }
    category_rows(doc, CLINCH_ORDINAL, ClinchRow::COLUMNS)
        .iter()
        .map(|cells| ClinchRow::from_cells(cells))
        .collect()
}

/// Rows of the ground table, when the page carries one.
pub fn ground_stats(doc: &Html) -> Vec<GroundRow> {
    if !has_table_titled(doc, GROUND_TITLE) {
        return Vec::new();
    }
    category_rows(doc, GROUND_ORDINAL, GroundRow::COLUMNS)
        .iter()
        .map(|cells| GroundRow::from_cells(cells))
        .collect()
}

fn category_rows(doc: &Html, ordinal: usize, columns: usize) -> Vec<Vec<String>> {
    let Some(tbody) = tbodies(doc).nth(ordinal) else {
        tracing::debug!(ordinal, "titled stat table has no matching body");
        return Vec::new();
    };
    let rows = body_rows(tbody);
    for row in &rows {
        if row.len() != columns {
            tracing::debug!(expected = columns, got = row.len(), "stat row column count drifted");
        }
    }
    rows
}

//! Positional table rows.
//!
//! Every row category shares four leading columns (date, opponent, event,
//! result) followed by category-specific statistic codes. Rows are built
//! from the ordered cell texts of a table row; a row shorter than the
//! schema degrades to empty strings for the missing trailing fields.

use serde::{Deserialize, Serialize};

fn cell(cells: &[String], index: usize) -> String {
    cells.get(index).cloned().unwrap_or_default()
}

/// One bout in the fight-history table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightRow {
    pub date: String,
    pub opponent: String,
    pub event: String,
    pub result: String,
    /// How the bout was decided (KO/TKO, Submission, Decision, ...).
    pub decision: String,
    /// Round the bout ended in.
    pub rnd: String,
    /// Clock time within the final round.
    pub time: String,
}

impl FightRow {
    pub const COLUMNS: usize = 7;

    /// Column order of the fight-history table.
    pub const FIELDS: [&'static str; 7] =
        ["date", "opponent", "event", "result", "decision", "rnd", "time"];

    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            date: cell(cells, 0),
            opponent: cell(cells, 1),
            event: cell(cells, 2),
            result: cell(cells, 3),
            decision: cell(cells, 4),
            rnd: cell(cells, 5),
            time: cell(cells, 6),
        }
    }
}

/// One bout in the striking table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikingRow {
    pub date: String,
    pub opponent: String,
    pub event: String,
    pub result: String,
    /// Significant distance blows landed/attempted.
    pub sdbl_a: String,
    /// Significant head blows landed/attempted.
    pub sdhl_a: String,
    /// Significant leg blows landed/attempted.
    pub sdll_a: String,
    /// Total strikes landed.
    pub tsl: String,
    /// Total strikes attempted.
    pub tsa: String,
    /// Significant strikes landed.
    pub ssl: String,
    /// Significant strikes attempted.
    pub ssa: String,
    /// Total strikes landed/attempted.
    pub tsl_tsa: String,
    /// Knockdowns.
    pub kd: String,
    pub percent_body: String,
    pub percent_head: String,
    pub percent_leg: String,
}

impl StrikingRow {
    pub const COLUMNS: usize = 16;

    /// Column order of the striking table.
    pub const FIELDS: [&'static str; 16] = [
        "date", "opponent", "event", "result", "sdbl_a", "sdhl_a", "sdll_a", "tsl", "tsa", "ssl",
        "ssa", "tsl_tsa", "kd", "percent_body", "percent_head", "percent_leg",
    ];

    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            date: cell(cells, 0),
            opponent: cell(cells, 1),
            event: cell(cells, 2),
            result: cell(cells, 3),
            sdbl_a: cell(cells, 4),
            sdhl_a: cell(cells, 5),
            sdll_a: cell(cells, 6),
            tsl: cell(cells, 7),
            tsa: cell(cells, 8),
            ssl: cell(cells, 9),
            ssa: cell(cells, 10),
            tsl_tsa: cell(cells, 11),
            kd: cell(cells, 12),
            percent_body: cell(cells, 13),
            percent_head: cell(cells, 14),
            percent_leg: cell(cells, 15),
        }
    }
}

/// One bout in the clinch table.
///
/// Canonical 16-column layout; earlier revisions of the source data shifted
/// the tail columns by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinchRow {
    pub date: String,
    pub opponent: String,
    pub event: String,
    pub result: String,
    /// Significant clinch body strikes landed.
    pub scbl: String,
    /// Significant clinch body strikes attempted.
    pub scba: String,
    /// Significant clinch head strikes landed.
    pub schl: String,
    /// Significant clinch head strikes attempted.
    pub scha: String,
    /// Significant clinch leg strikes landed.
    pub scll: String,
    /// Significant clinch leg strikes attempted.
    pub scla: String,
    /// Reversals.
    pub rv: String,
    /// Slam rate.
    pub sr: String,
    /// Takedowns landed.
    pub tdl: String,
    /// Takedowns attempted.
    pub tda: String,
    /// Takedown slams.
    pub tds: String,
    /// Takedown accuracy.
    pub tk_acc: String,
}

impl ClinchRow {
    pub const COLUMNS: usize = 16;

    /// Column order of the clinch table.
    pub const FIELDS: [&'static str; 16] = [
        "date", "opponent", "event", "result", "scbl", "scba", "schl", "scha", "scll", "scla",
        "rv", "sr", "tdl", "tda", "tds", "tk_acc",
    ];

    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            date: cell(cells, 0),
            opponent: cell(cells, 1),
            event: cell(cells, 2),
            result: cell(cells, 3),
            scbl: cell(cells, 4),
            scba: cell(cells, 5),
            schl: cell(cells, 6),
            scha: cell(cells, 7),
            scll: cell(cells, 8),
            scla: cell(cells, 9),
            rv: cell(cells, 10),
            sr: cell(cells, 11),
            tdl: cell(cells, 12),
            tda: cell(cells, 13),
            tds: cell(cells, 14),
            tk_acc: cell(cells, 15),
        }
    }
}

/// One bout in the ground table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundRow {
    pub date: String,
    pub opponent: String,
    pub event: String,
    pub result: String,
    /// Significant ground body strikes landed.
    pub sgbl: String,
    /// Significant ground body strikes attempted.
    pub sgba: String,
    /// Significant ground head strikes landed.
    pub sghl: String,
    /// Significant ground head strikes attempted.
    pub sgha: String,
    /// Significant ground leg strikes landed.
    pub sgll: String,
    /// Significant ground leg strikes attempted.
    pub sgla: String,
    /// Advances.
    pub ad: String,
    /// Advance to back.
    pub adtb: String,
    /// Advance to half guard.
    pub adhg: String,
    /// Advance to mount.
    pub adtm: String,
    /// Advance to side control.
    pub adts: String,
    /// Submissions.
    pub sm: String,
}

impl GroundRow {
    pub const COLUMNS: usize = 16;

    /// Column order of the ground table.
    pub const FIELDS: [&'static str; 16] = [
        "date", "opponent", "event", "result", "sgbl", "sgba", "sghl", "sgha", "sgll", "sgla",
        "ad", "adtb", "adhg", "adtm", "adts", "sm",
    ];

    pub fn from_cells(cells: &[String]) -> Self {
        Self {
            date: cell(cells, 0),
            opponent: cell(cells, 1),
            event: cell(cells, 2),
            result: cell(cells, 3),
            sgbl: cell(cells, 4),
            sgba: cell(cells, 5),
            sghl: cell(cells, 6),
            sgha: cell(cells, 7),
            sgll: cell(cells, 8),
            sgla: cell(cells, 9),
            ad: cell(cells, 10),
            adtb: cell(cells, 11),
            adhg: cell(cells, 12),
            adtm: cell(cells, 13),
            adts: cell(cells, 14),
            sm: cell(cells, 15),
        }
    }
}

//! The aggregated, identity-keyed fighter record.

use serde::{Deserialize, Serialize};

use super::{ClinchRow, FightRow, GroundRow, StrikingRow};

/// Accumulated data for one fighter.
///
/// All scalar fields are display strings lifted straight from the page;
/// dates and win/loss records are not parsed at this layer. The JSON field
/// names are a compatibility contract for downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterRecord {
    /// Fighter's first name, normalized.
    pub first_name: String,

    /// Fighter's last name, normalized.
    pub last_name: String,

    /// Height and weight composite, e.g. `6' 4", 205 lbs`.
    pub height_and_weight: String,

    pub birthdate: String,

    pub team: String,

    pub nickname: String,

    /// Orthodox, Southpaw, or Switch.
    pub stance: String,

    /// Overall wins-losses-draws record.
    pub win_loss_record: String,

    /// Wins-losses by (technical) knockout.
    pub tko_record: String,

    /// Wins-losses by submission.
    pub sub_record: String,

    /// Per-bout striking statistics, newest first as listed on the page.
    pub striking_stats: Vec<StrikingRow>,

    /// Per-bout clinch statistics.
    pub clinch_stats: Vec<ClinchRow>,

    /// Per-bout ground statistics.
    pub ground_stats: Vec<GroundRow>,

    /// Chronological fight history rows.
    pub fights: Vec<FightRow>,
}

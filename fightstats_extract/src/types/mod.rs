//! Typed records produced by the extractors.

mod fighter;
mod rows;

pub use self::fighter::FighterRecord;
pub use self::rows::{ClinchRow, FightRow, GroundRow, StrikingRow};

//! Identity-keyed aggregation of partial fighter records.

use dashmap::DashMap;

use fightstats_extract::identity;
use fightstats_extract::types::FighterRecord;

/// Whether an upsert created a new entry or folded into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// Concurrent store of accumulated fighter records, keyed by normalized
/// name.
///
/// The map's entry lock serializes merges targeting one identity while
/// distinct identities proceed independently, so page-visit tasks can
/// upsert from any task without further coordination.
#[derive(Debug, Default)]
pub struct Roster {
    fighters: DashMap<String, FighterRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a partial record into the entry for `key`.
    ///
    /// Row sequences follow replace-if-nonempty: an incoming non-empty
    /// sequence replaces the stored one wholesale, an empty one never
    /// erases anything. Scalar fields backfill only while empty, and name
    /// parts still missing afterwards are derived from the key itself.
    pub fn upsert(&self, key: &str, partial: FighterRecord) -> UpsertOutcome {
        use dashmap::mapref::entry::Entry;

        match self.fighters.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get_mut();
                merge(existing, partial);
                fill_name_from_key(existing, key);
                UpsertOutcome::Updated
            }
            Entry::Vacant(vacant) => {
                let mut record = partial;
                fill_name_from_key(&mut record, key);
                vacant.insert(record);
                UpsertOutcome::Added
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    /// Snapshot of the accumulated records. Iteration order is not stable
    /// across runs; call only after the crawl barrier for final output.
    pub fn records(&self) -> Vec<FighterRecord> {
        self.fighters
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

fn merge(existing: &mut FighterRecord, incoming: FighterRecord) {
    if !incoming.fights.is_empty() {
        existing.fights = incoming.fights;
    }
    if !incoming.striking_stats.is_empty() {
        existing.striking_stats = incoming.striking_stats;
    }
    if !incoming.clinch_stats.is_empty() {
        existing.clinch_stats = incoming.clinch_stats;
    }
    if !incoming.ground_stats.is_empty() {
        existing.ground_stats = incoming.ground_stats;
    }

    fill_if_empty(&mut existing.first_name, incoming.first_name);
    fill_if_empty(&mut existing.last_name, incoming.last_name);
    fill_if_empty(&mut existing.height_and_weight, incoming.height_and_weight);
    fill_if_empty(&mut existing.birthdate, incoming.birthdate);
    fill_if_empty(&mut existing.team, incoming.team);
    fill_if_empty(&mut existing.nickname, incoming.nickname);
    fill_if_empty(&mut existing.stance, incoming.stance);
    fill_if_empty(&mut existing.win_loss_record, incoming.win_loss_record);
    fill_if_empty(&mut existing.tko_record, incoming.tko_record);
    fill_if_empty(&mut existing.sub_record, incoming.sub_record);
}

fn fill_if_empty(slot: &mut String, value: String) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value;
    }
}

fn fill_name_from_key(record: &mut FighterRecord, key: &str) {
    if !record.first_name.is_empty() && !record.last_name.is_empty() {
        return;
    }
    let (first, last) = identity::split_key(key);
    if record.first_name.is_empty() {
        record.first_name = first;
    }
    if record.last_name.is_empty() && !last.is_empty() {
        record.last_name = last;
    }
}

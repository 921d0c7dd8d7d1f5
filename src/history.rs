//! Bounded per-kind calculation history
//!
//! Session-lifetime state holding the most recent calculations, newest
//! first, capped at a fixed number of records per calculation kind. The
//! store is a plain owned value with no global instance: each session
//! constructs and owns its own.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Maximum number of records retained per calculation kind
pub const HISTORY_CAPACITY: usize = 10;

/// The five calculation kinds tracked by the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Commercial,
    Rational,
    Agios,
    Rates,
    Equivalent,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 5] = [
        CalculationKind::Commercial,
        CalculationKind::Rational,
        CalculationKind::Agios,
        CalculationKind::Rates,
        CalculationKind::Equivalent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Commercial => "commercial",
            CalculationKind::Rational => "rational",
            CalculationKind::Agios => "agios",
            CalculationKind::Rates => "rates",
            CalculationKind::Equivalent => "equivalent",
        }
    }
}

/// One completed calculation, immutable once built
///
/// Inputs and results are ordered label/display-value pairs. Labels are
/// stable keys independent of display locale; dates are rendered
/// ISO-8601 and currency formatting is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub kind: CalculationKind,
    pub timestamp: DateTime<Utc>,
    pub inputs: Vec<(String, String)>,
    pub results: Vec<(String, String)>,
}

impl CalculationRecord {
    /// Create a record stamped with the current time
    pub fn new(
        kind: CalculationKind,
        inputs: Vec<(String, String)>,
        results: Vec<(String, String)>,
    ) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
            inputs,
            results,
        }
    }
}

/// Bounded history of calculation records, one capped deque per kind
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: HashMap<CalculationKind, VecDeque<CalculationRecord>>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the head of its kind's sequence
    ///
    /// Evicts the oldest record of that kind once the cap is reached.
    /// Always succeeds.
    pub fn push(&mut self, record: CalculationRecord) {
        let kind = record.kind;
        let records = self.entries.entry(kind).or_default();
        records.push_front(record);
        if records.len() > HISTORY_CAPACITY {
            records.pop_back();
            debug!("history full for {}, evicted oldest record", kind.as_str());
        }
    }

    /// Records of one kind, newest first
    pub fn records(&self, kind: CalculationKind) -> impl Iterator<Item = &CalculationRecord> {
        self.entries.get(&kind).into_iter().flatten()
    }

    /// Number of records stored for one kind
    pub fn len(&self, kind: CalculationKind) -> usize {
        self.entries.get(&kind).map_or(0, VecDeque::len)
    }

    /// Number of records stored across all kinds
    pub fn total_len(&self) -> usize {
        self.entries.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(VecDeque::is_empty)
    }

    /// Remove all records of one kind; other kinds are untouched.
    /// Clearing an empty kind is a no-op.
    pub fn clear_kind(&mut self, kind: CalculationKind) {
        self.entries.remove(&kind);
    }

    /// Remove all records of all kinds
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: CalculationKind, tag: &str) -> CalculationRecord {
        CalculationRecord::new(
            kind,
            vec![("Valeur nominale".to_string(), tag.to_string())],
            vec![("Escompte".to_string(), tag.to_string())],
        )
    }

    #[test]
    fn test_push_keeps_newest_first() {
        let mut store = HistoryStore::new();
        store.push(record(CalculationKind::Commercial, "first"));
        store.push(record(CalculationKind::Commercial, "second"));

        let tags: Vec<&str> = store
            .records(CalculationKind::Commercial)
            .map(|r| r.inputs[0].1.as_str())
            .collect();
        assert_eq!(tags, vec!["second", "first"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut store = HistoryStore::new();
        for i in 0..12 {
            store.push(record(CalculationKind::Agios, &i.to_string()));
        }

        assert_eq!(store.len(CalculationKind::Agios), HISTORY_CAPACITY);

        // The 10 most recent survive, newest first: 11, 10, ..., 2
        let tags: Vec<String> = store
            .records(CalculationKind::Agios)
            .map(|r| r.inputs[0].1.clone())
            .collect();
        let expected: Vec<String> = (2..12).rev().map(|i| i.to_string()).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_kinds_do_not_interleave() {
        let mut store = HistoryStore::new();
        for i in 0..12 {
            store.push(record(CalculationKind::Commercial, &i.to_string()));
        }
        store.push(record(CalculationKind::Rational, "only"));

        assert_eq!(store.len(CalculationKind::Commercial), HISTORY_CAPACITY);
        assert_eq!(store.len(CalculationKind::Rational), 1);
        assert_eq!(store.total_len(), HISTORY_CAPACITY + 1);
    }

    #[test]
    fn test_clear_kind_leaves_others() {
        let mut store = HistoryStore::new();
        store.push(record(CalculationKind::Agios, "a"));
        store.push(record(CalculationKind::Rates, "b"));
        store.push(record(CalculationKind::Agios, "c"));

        store.clear_kind(CalculationKind::Agios);

        assert_eq!(store.len(CalculationKind::Agios), 0);
        assert_eq!(store.len(CalculationKind::Rates), 1);
    }

    #[test]
    fn test_clear_all_empties_every_kind() {
        let mut store = HistoryStore::new();
        for kind in CalculationKind::ALL {
            store.push(record(kind, "x"));
        }
        assert_eq!(store.total_len(), 5);

        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.total_len(), 0);
    }

    #[test]
    fn test_clearing_is_idempotent() {
        let mut store = HistoryStore::new();
        store.clear_kind(CalculationKind::Equivalent);
        store.clear_all();
        store.clear_all();
        assert!(store.is_empty());
    }
}

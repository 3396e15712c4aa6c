use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::scoring::composite_score;

pub const UNKNOWN_POSITION: &str = "Unknown";

/// The five self-reported ratings of a participant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratings {
    pub rank: f64,
    pub iq: f64,
    pub tactical: f64,
    pub speed: f64,
    pub confidence: f64,
}

impl Ratings {
    pub fn score(&self) -> f64 {
        composite_score(
            self.rank,
            self.iq,
            self.tactical,
            self.speed,
            self.confidence,
        )
    }
}

/// One participant's ratings, position, and derived score.
///
/// The score is computed at construction and on deserialization, so it always
/// matches the ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRecord", into = "StoredRecord")]
pub struct ParticipantRecord {
    ratings: Ratings,
    position: String,
    score: f64,
}

impl ParticipantRecord {
    pub fn new(ratings: Ratings, position: Option<String>) -> Self {
        let position = position
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string());

        Self {
            score: ratings.score(),
            ratings,
            position,
        }
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// On-disk shape of a record. `score` is written for readers of the document
/// but ignored when loading.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    rank: f64,
    iq: f64,
    tactical: f64,
    speed: f64,
    confidence: f64,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    score: Option<f64>,
}

impl From<StoredRecord> for ParticipantRecord {
    fn from(stored: StoredRecord) -> Self {
        ParticipantRecord::new(
            Ratings {
                rank: stored.rank,
                iq: stored.iq,
                tactical: stored.tactical,
                speed: stored.speed,
                confidence: stored.confidence,
            },
            stored.position,
        )
    }
}

impl From<ParticipantRecord> for StoredRecord {
    fn from(record: ParticipantRecord) -> Self {
        StoredRecord {
            rank: record.ratings.rank,
            iq: record.ratings.iq,
            tactical: record.ratings.tactical,
            speed: record.ratings.speed,
            confidence: record.ratings.confidence,
            position: Some(record.position),
            score: Some(record.score),
        }
    }
}

/// All participant records keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<(String, ParticipantRecord)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParticipantRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, record)| record)
    }

    /// Inserts a record, replacing any existing record for `name` in place.
    /// Returns true when an existing record was replaced.
    pub fn upsert(&mut self, name: String, record: ParticipantRecord) -> bool {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => {
                *slot = record;
                true
            }
            None => {
                self.entries.push((name, record));
                false
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParticipantRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Records sorted by score, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<(&str, &ParticipantRecord)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.score().total_cmp(&a.score()));
        ranked
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of participant names to records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
        let mut roster = Roster::new();
        while let Some((name, record)) = access.next_entry::<String, ParticipantRecord>()? {
            roster.upsert(name, record);
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}

use tracing::debug;

use super::{
    models::{ParticipantRecord, Ratings, Roster},
    RosterError,
};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

const RATING_FIELDS: [&str; 5] = ["rank", "iq", "tactical", "speed", "confidence"];

/// A single validated line of a roster submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub name: String,
    pub record: ParticipantRecord,
}

/// Parses `Name, Rank, IQ, Tactical, Speed, Confidence[, Position]` lines.
///
/// Blank lines are skipped. The first invalid line aborts the whole batch.
pub fn parse_roster(text: &str) -> Result<Vec<ParsedLine>, RosterError> {
    let mut parsed = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        parsed.push(parse_line(index + 1, raw)?);
    }

    if parsed.is_empty() {
        return Err(RosterError::EmptySubmission);
    }

    Ok(parsed)
}

fn parse_line(line: usize, raw: &str) -> Result<ParsedLine, RosterError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();

    if fields.len() < 6 {
        return Err(RosterError::MalformedLine {
            line,
            reason: format!(
                "expected at least 6 comma-separated fields \
                 (Name, Rank, IQ, Tactical, Speed, Confidence), got {}",
                fields.len()
            ),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(RosterError::MalformedLine {
            line,
            reason: "name is empty".to_string(),
        });
    }

    let mut values = [0.0; 5];
    for (slot, (field, raw_value)) in values
        .iter_mut()
        .zip(RATING_FIELDS.iter().zip(&fields[1..6]))
    {
        *slot = parse_rating(line, *field, raw_value)?;
    }
    let [rank, iq, tactical, speed, confidence] = values;

    let position = fields.get(6).map(|p| p.to_string());
    if fields.len() > 7 {
        debug!(line, extra = fields.len() - 7, "Ignoring extra fields");
    }

    Ok(ParsedLine {
        name: name.to_string(),
        record: ParticipantRecord::new(
            Ratings {
                rank,
                iq,
                tactical,
                speed,
                confidence,
            },
            position,
        ),
    })
}

fn parse_rating(line: usize, field: &'static str, raw: &str) -> Result<f64, RosterError> {
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| RosterError::MalformedLine {
            line,
            reason: format!("{} must be a number, got '{}'", field, raw),
        })?;

    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(RosterError::RangeViolation { line, field, value });
    }

    Ok(value)
}

/// Parses `text` and merges it into a copy of `current`.
///
/// Returns the merged roster without persisting it. On error `current` is
/// untouched and nothing from the batch is applied.
pub fn parse_and_merge(text: &str, current: &Roster) -> Result<Roster, RosterError> {
    let parsed = parse_roster(text)?;

    let mut updated = current.clone();
    for ParsedLine { name, record } in parsed {
        if updated.upsert(name.clone(), record) {
            debug!(name = %name, "Replaced existing participant");
        }
    }

    Ok(updated)
}

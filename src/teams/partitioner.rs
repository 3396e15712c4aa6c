use tracing::debug;

use crate::roster::{ParticipantRecord, Roster, RosterError};

pub const DEFAULT_TEAM_COUNT: usize = 3;
pub const MAX_TEAM_COUNT: usize = 64;

/// Rejects team counts outside `1..=MAX_TEAM_COUNT`.
pub fn validate_team_count(group_count: usize) -> Result<(), RosterError> {
    if group_count == 0 || group_count > MAX_TEAM_COUNT {
        return Err(RosterError::InvalidGroupCount(group_count));
    }
    Ok(())
}

/// A transient grouping of participants. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub members: Vec<(String, ParticipantRecord)>,
}

impl Team {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn total_score(&self) -> f64 {
        self.members.iter().map(|(_, record)| record.score()).sum()
    }

    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Deals participants into `group_count` teams by score rank.
///
/// The participant at sorted position `i` joins team `i % group_count`. There is
/// no snake order and no rebalancing afterwards.
pub fn partition(roster: &Roster, group_count: usize) -> Result<Vec<Team>, RosterError> {
    validate_team_count(group_count)?;

    let mut teams = vec![Team::default(); group_count];
    for (index, (name, record)) in roster.ranked().into_iter().enumerate() {
        teams[index % group_count]
            .members
            .push((name.to_string(), record.clone()));
    }

    debug!(
        participants = roster.len(),
        teams = group_count,
        "Partitioned roster"
    );
    Ok(teams)
}

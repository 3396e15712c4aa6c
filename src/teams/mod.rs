pub mod partitioner;

pub use partitioner::{partition, validate_team_count, Team, DEFAULT_TEAM_COUNT, MAX_TEAM_COUNT};

// Public API - what other modules can use
pub use handlers::{decide, help, leaderboard, reset, start, stats, teams};

mod errors;
mod handlers;
pub mod models;
pub mod parser;
pub mod repository;
pub mod service;

pub use errors::RosterError;
pub use models::{ParticipantRecord, Ratings, Roster, UNKNOWN_POSITION};
pub use parser::{parse_and_merge, parse_roster, ParsedLine};
pub use repository::{InMemoryRosterRepository, JsonFileRosterRepository, RosterRepository};
pub use service::RosterService;

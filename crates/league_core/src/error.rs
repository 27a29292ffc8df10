//! Error types for the league engine

use thiserror::Error;

/// Errors surfaced by roster building, result recording, and session I/O.
///
/// All of these are recoverable conditions returned to the caller; nothing
/// in the engine panics or silently substitutes a default value.
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("a competition needs at least two teams, got {count}")]
    InsufficientTeams { count: usize },

    #[error("duplicate team name: {name}")]
    DuplicateTeam { name: String },

    #[error("team names must not be empty")]
    EmptyTeamName,

    #[error("no such fixture in this competition: {home} vs {away}")]
    UnknownFixture { home: String, away: String },

    #[error("goal counts must be non-negative, got {home_goals}-{away_goals}")]
    InvalidScore { home_goals: i64, away_goals: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

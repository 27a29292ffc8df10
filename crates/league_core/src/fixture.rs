//! Fixtures, scores, and round-robin generation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LeagueError;
use crate::roster::{Roster, Team};

/// Round-robin generation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every unordered pair meets once; the earlier-rostered team is at home.
    Single,
    /// Every ordered pair meets once, i.e. home and away.
    #[default]
    Double,
}

/// One scheduled match with a designated home and away side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
}

impl Fixture {
    pub fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }

    /// Whether the given team plays in this fixture, on either side.
    pub fn involves(&self, team: &Team) -> bool {
        &self.home == team || &self.away == team
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// A recorded final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl Score {
    /// Validate raw goal counts.
    ///
    /// The caller hands over whatever its acquisition layer parsed; negative
    /// values and counts beyond `u32::MAX` surface here as `InvalidScore`
    /// instead of wrapping or truncating.
    pub fn new(home_goals: i64, away_goals: i64) -> Result<Self, LeagueError> {
        let goals = |count: i64| {
            u32::try_from(count).map_err(|_| LeagueError::InvalidScore {
                home_goals,
                away_goals,
            })
        };
        Ok(Score {
            home_goals: goals(home_goals)?,
            away_goals: goals(away_goals)?,
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home_goals, self.away_goals)
    }
}

/// Generate the full fixture list for a competition.
///
/// Output order follows roster order and is identical for identical input;
/// the generator performs no randomization. `Single` emits the upper triangle
/// of the pairing matrix (n*(n-1)/2 fixtures), `Double` every off-diagonal
/// cell (n*(n-1) fixtures).
pub fn generate(roster: &Roster, mode: Mode) -> Vec<Fixture> {
    let teams = roster.teams();
    let mut fixtures = Vec::new();
    match mode {
        Mode::Single => {
            for i in 0..teams.len() {
                for j in (i + 1)..teams.len() {
                    fixtures.push(Fixture::new(teams[i].clone(), teams[j].clone()));
                }
            }
        }
        Mode::Double => {
            for i in 0..teams.len() {
                for j in 0..teams.len() {
                    if i != j {
                        fixtures.push(Fixture::new(teams[i].clone(), teams[j].clone()));
                    }
                }
            }
        }
    }
    fixtures
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod fixture_tests;

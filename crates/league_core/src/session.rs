//! Competition session: the single owner of roster and results

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LeagueError;
use crate::fixture::{self, Fixture, Mode};
use crate::roster::{Roster, Team};
use crate::standings::{compute, PointsScheme, TeamRecord};
use crate::store::ResultStore;

/// A single round-robin competition.
///
/// Owns the roster and the result store; fixture generation and standings
/// computation are pure functions over that state. All mutation goes through
/// `&mut self`, so a session shared between writers needs an external
/// `Mutex` around the whole value; readers of [`standings`](Self::standings)
/// see a consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    name: String,
    mode: Mode,
    scheme: PointsScheme,
    roster: Roster,
    store: ResultStore,
}

impl Competition {
    /// Create a competition with the default 3/1/0 points scheme.
    ///
    /// The full fixture list is generated up front; fewer than two distinct
    /// teams is an error, not a degenerate empty competition.
    pub fn new<I, S>(name: &str, team_names: I, mode: Mode) -> Result<Self, LeagueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_scheme(name, team_names, mode, PointsScheme::default())
    }

    pub fn with_scheme<I, S>(
        name: &str,
        team_names: I,
        mode: Mode,
        scheme: PointsScheme,
    ) -> Result<Self, LeagueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Roster::build(team_names)?;
        if roster.len() < 2 {
            return Err(LeagueError::InsufficientTeams { count: roster.len() });
        }
        let fixtures = fixture::generate(&roster, mode);
        info!(
            "competition {:?}: {} teams, {} fixtures",
            name,
            roster.len(),
            fixtures.len()
        );
        Ok(Self {
            name: name.to_string(),
            mode,
            scheme,
            store: ResultStore::new(fixtures),
            roster,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scheme(&self) -> PointsScheme {
        self.scheme
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn fixtures(&self) -> &[Fixture] {
        self.store.fixtures()
    }

    /// Record a result by team names.
    pub fn record_result(
        &mut self,
        home: &str,
        away: &str,
        home_goals: i64,
        away_goals: i64,
    ) -> Result<(), LeagueError> {
        let fixture = Fixture::new(Team::new(home), Team::new(away));
        self.store.record(&fixture, home_goals, away_goals)?;
        debug!("recorded {}: {}-{}", fixture, home_goals, away_goals);
        Ok(())
    }

    /// Current standings, recomputed from scratch on every call.
    pub fn standings(&self) -> Vec<TeamRecord> {
        compute(&self.roster, &self.store, &self.scheme)
    }

    /// Save a session snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), LeagueError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("saved competition {:?} to {}", self.name, path.display());
        Ok(())
    }

    /// Load a previously saved session snapshot.
    pub fn load(path: &Path) -> Result<Self, LeagueError> {
        let contents = std::fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&contents)?;
        info!(
            "loaded competition {:?} ({}/{} results)",
            session.name,
            session.store.recorded_count(),
            session.fixtures().len()
        );
        Ok(session)
    }
}

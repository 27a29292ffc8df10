//! Teams and the competition roster

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::LeagueError;

/// A team identifier. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Team(name.to_string())
    }
}

/// Ordered sequence of unique teams.
///
/// Insertion order is preserved and drives fixture-generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// Build a roster from team names.
    ///
    /// Empty names and duplicates (case-sensitive exact match) are rejected
    /// outright rather than deduplicated. A roster of fewer than two teams is
    /// constructible here; the minimum-size check belongs to the competition
    /// constructor.
    pub fn build<I, S>(names: I) -> Result<Self, LeagueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut teams = Vec::new();
        let mut seen = HashSet::new();
        for name in names {
            let name = name.into();
            if name.is_empty() {
                return Err(LeagueError::EmptyTeamName);
            }
            if !seen.insert(name.clone()) {
                return Err(LeagueError::DuplicateTeam { name });
            }
            teams.push(Team(name));
        }
        Ok(Roster { teams })
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn contains(&self, team: &Team) -> bool {
        self.teams.contains(team)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_order() {
        let roster = Roster::build(["SLB", "FCP", "SCP"]).unwrap();
        let names: Vec<&str> = roster.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["SLB", "FCP", "SCP"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Roster::build(["FCP", "SLB", "FCP"]).unwrap_err();
        assert!(matches!(err, LeagueError::DuplicateTeam { name } if name == "FCP"));
    }

    #[test]
    fn test_case_sensitive_names_are_distinct() {
        let roster = Roster::build(["fcp", "FCP"]).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Roster::build(["FCP", ""]).unwrap_err();
        assert!(matches!(err, LeagueError::EmptyTeamName));
    }

    #[test]
    fn test_single_team_roster_is_constructible() {
        // Too small for a competition, but valid as a roster
        let roster = Roster::build(["FCP"]).unwrap();
        assert_eq!(roster.len(), 1);
    }
}

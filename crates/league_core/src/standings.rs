//! Standings computation and ranking

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::roster::{Roster, Team};
use crate::store::ResultStore;

/// Points awarded per won/drawn/lost match.
///
/// Points are always derived from the W/D/L counts after aggregation, never
/// accumulated inside the fold, so swapping schemes touches nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsScheme {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsScheme {
    /// The common 3/1/0 football scheme.
    fn default() -> Self {
        Self { win: 3, draw: 1, loss: 0 }
    }
}

impl PointsScheme {
    /// The classic two-points-for-a-win scheme.
    pub fn two_point() -> Self {
        Self { win: 2, draw: 1, loss: 0 }
    }

    pub fn points_for(&self, won: u32, drawn: u32, lost: u32) -> u32 {
        self.win * won + self.draw * drawn + self.loss * lost
    }
}

/// Aggregated statistics for one team, freshly derived from recorded results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Points under the scheme the table was computed with.
    pub points: u32,
}

impl TeamRecord {
    fn zeroed(team: Team) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    /// Goals for minus goals against.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// Compute the ranked standings table from the roster and recorded results.
///
/// Pure and idempotent: unplayed fixtures are skipped entirely (a missing
/// score is never treated as 0-0), and identical inputs always produce an
/// identical table.
pub fn compute(roster: &Roster, store: &ResultStore, scheme: &PointsScheme) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> =
        roster.iter().cloned().map(TeamRecord::zeroed).collect();

    for (fixture, score) in store.recorded() {
        let home = records.iter().position(|r| r.team == fixture.home);
        let away = records.iter().position(|r| r.team == fixture.away);
        // A store built for this roster always resolves both sides; results
        // from a foreign store are skipped rather than panicking.
        let (Some(home), Some(away)) = (home, away) else {
            continue;
        };

        records[home].played += 1;
        records[away].played += 1;
        records[home].goals_for += score.home_goals;
        records[home].goals_against += score.away_goals;
        records[away].goals_for += score.away_goals;
        records[away].goals_against += score.home_goals;

        match score.home_goals.cmp(&score.away_goals) {
            Ordering::Greater => {
                records[home].won += 1;
                records[away].lost += 1;
            }
            Ordering::Less => {
                records[away].won += 1;
                records[home].lost += 1;
            }
            Ordering::Equal => {
                records[home].drawn += 1;
                records[away].drawn += 1;
            }
        }
    }

    for record in &mut records {
        record.points = scheme.points_for(record.won, record.drawn, record.lost);
    }

    records.sort_by(rank_order);
    records
}

/// Tie-break chain: points, goal difference, and goals for, all descending.
/// A full tie falls back to team name ascending so the order is always
/// deterministic and reproducible.
fn rank_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;

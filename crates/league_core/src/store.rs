//! Recorded results for a competition's fixture list

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::fixture::{Fixture, Score};

/// Scores recorded against a generated fixture list.
///
/// The store only accepts results for fixtures it was built with. A fixture
/// without a recorded score has not been played: readers get `None`, never a
/// default 0-0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultStore {
    fixtures: Vec<Fixture>,
    // Slot per fixture, same order as `fixtures`
    scores: Vec<Option<Score>>,
}

impl ResultStore {
    /// Build an empty store over the generated fixture list.
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        let scores = vec![None; fixtures.len()];
        Self { fixtures, scores }
    }

    fn index_of(&self, fixture: &Fixture) -> Option<usize> {
        self.fixtures.iter().position(|f| f == fixture)
    }

    /// Record the final score of a fixture.
    ///
    /// Fails with `UnknownFixture` for a fixture the generator never
    /// produced and `InvalidScore` for negative goal counts. Re-recording a
    /// fixture overwrites the previous score (last write wins).
    pub fn record(
        &mut self,
        fixture: &Fixture,
        home_goals: i64,
        away_goals: i64,
    ) -> Result<(), LeagueError> {
        let idx = self
            .index_of(fixture)
            .ok_or_else(|| LeagueError::UnknownFixture {
                home: fixture.home.name().to_string(),
                away: fixture.away.name().to_string(),
            })?;
        let score = Score::new(home_goals, away_goals)?;
        if let Some(previous) = self.scores[idx] {
            debug!("overwriting {}: {} -> {}", fixture, previous, score);
        }
        self.scores[idx] = Some(score);
        Ok(())
    }

    /// Score of a fixture, or `None` if it has not been played yet.
    pub fn get(&self, fixture: &Fixture) -> Option<Score> {
        self.index_of(fixture).and_then(|idx| self.scores[idx])
    }

    /// The full fixture list this store was built with, in generation order.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Played fixtures with their scores, in fixture-list order.
    pub fn recorded(&self) -> impl Iterator<Item = (&Fixture, Score)> {
        self.fixtures
            .iter()
            .zip(self.scores.iter())
            .filter_map(|(fixture, score)| score.map(|s| (fixture, s)))
    }

    pub fn recorded_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// True once every fixture has a recorded score.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|s| s.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{generate, Mode};
    use crate::roster::{Roster, Team};

    fn store() -> ResultStore {
        let roster = Roster::build(["A", "B", "C"]).unwrap();
        ResultStore::new(generate(&roster, Mode::Single))
    }

    fn fixture(home: &str, away: &str) -> Fixture {
        Fixture::new(Team::new(home), Team::new(away))
    }

    #[test]
    fn test_record_and_get() {
        let mut store = store();
        store.record(&fixture("A", "B"), 2, 1).unwrap();
        assert_eq!(
            store.get(&fixture("A", "B")),
            Some(Score { home_goals: 2, away_goals: 1 })
        );
        assert_eq!(store.recorded_count(), 1);
    }

    #[test]
    fn test_absent_fixture_reads_as_not_played() {
        let store = store();
        assert_eq!(store.get(&fixture("A", "B")), None);
        assert!(!store.is_complete());
    }

    #[test]
    fn test_unknown_fixture_rejected() {
        let mut store = store();
        // (B, A) was never generated in single mode; neither was team D
        let err = store.record(&fixture("B", "A"), 1, 0).unwrap_err();
        assert!(matches!(err, LeagueError::UnknownFixture { .. }));
        let err = store.record(&fixture("A", "D"), 1, 0).unwrap_err();
        assert!(matches!(err, LeagueError::UnknownFixture { .. }));
    }

    #[test]
    fn test_negative_score_rejected_and_not_stored() {
        let mut store = store();
        let err = store.record(&fixture("A", "B"), 1, -2).unwrap_err();
        assert!(matches!(err, LeagueError::InvalidScore { .. }));
        assert_eq!(store.get(&fixture("A", "B")), None);
    }

    #[test]
    fn test_rerecord_overwrites() {
        let mut store = store();
        store.record(&fixture("A", "B"), 0, 0).unwrap();
        store.record(&fixture("A", "B"), 3, 1).unwrap();
        assert_eq!(
            store.get(&fixture("A", "B")),
            Some(Score { home_goals: 3, away_goals: 1 })
        );
        assert_eq!(store.recorded_count(), 1);
    }

    #[test]
    fn test_is_complete() {
        let mut store = store();
        for f in store.fixtures().to_vec() {
            store.record(&f, 1, 1).unwrap();
        }
        assert!(store.is_complete());
        assert_eq!(store.recorded_count(), 3);
    }
}

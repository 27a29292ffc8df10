//! Text rendering of fixtures, results, and the standings table
//!
//! Presentation only; nothing here feeds back into the engine.

use crate::fixture::Fixture;
use crate::standings::TeamRecord;
use crate::store::ResultStore;

/// Render the standings as a column-aligned text table.
pub fn render_table(records: &[TeamRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.team.name().len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = width
    ));
    out.push_str(&"-".repeat(width + 36));
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}\n",
            record.team.name(),
            record.played,
            record.won,
            record.drawn,
            record.lost,
            record.goals_for,
            record.goals_against,
            record.goal_difference(),
            record.points,
            width = width
        ));
    }
    out
}

/// Render the numbered fixture list in generation order.
pub fn render_fixtures(fixtures: &[Fixture]) -> String {
    let mut out = String::new();
    for (i, fixture) in fixtures.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, fixture));
    }
    out
}

/// Render recorded results, skipping unplayed fixtures.
pub fn render_results(store: &ResultStore) -> String {
    let mut out = String::new();
    for (fixture, score) in store.recorded() {
        out.push_str(&format!(
            "{} {} - {} {}\n",
            fixture.home, score.home_goals, score.away_goals, fixture.away
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{generate, Mode};
    use crate::roster::Roster;
    use crate::standings::{compute, PointsScheme};

    #[test]
    fn test_table_lists_teams_in_rank_order() {
        let roster = Roster::build(["Azuis", "Verdes"]).unwrap();
        let mut store = ResultStore::new(generate(&roster, Mode::Double));
        let fixtures = store.fixtures().to_vec();
        store.record(&fixtures[0], 2, 0).unwrap();

        let table = compute(&roster, &store, &PointsScheme::default());
        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Team"));
        assert!(lines[2].starts_with("Azuis"));
        assert!(lines[3].starts_with("Verdes"));
        assert!(lines[2].contains("+2"));
        assert!(lines[3].contains("-2"));
    }

    #[test]
    fn test_results_skip_unplayed_fixtures() {
        let roster = Roster::build(["A", "B", "C"]).unwrap();
        let mut store = ResultStore::new(generate(&roster, Mode::Single));
        let fixtures = store.fixtures().to_vec();
        store.record(&fixtures[1], 1, 3).unwrap();

        let rendered = render_results(&store);
        assert_eq!(rendered, "A 1 - 3 C\n");
    }

    #[test]
    fn test_fixture_list_is_numbered() {
        let roster = Roster::build(["A", "B"]).unwrap();
        let fixtures = generate(&roster, Mode::Double);
        let rendered = render_fixtures(&fixtures);
        assert_eq!(rendered, "  1. A vs B\n  2. B vs A\n");
    }
}

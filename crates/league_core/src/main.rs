//! League CLI
//!
//! Load a competition from a TOML file and print fixtures, results, or the
//! standings table.

use league_core::{
    render_fixtures, render_results, render_table, Competition, Mode, PointsScheme,
};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::process::ExitCode;

/// On-disk competition description.
///
/// ```toml
/// name = "Campeonato"
/// mode = "single"            # or "double" (default)
/// teams = ["FCP", "SLB", "SCP"]
///
/// [points]                   # optional, defaults to 3/1/0
/// win = 3
/// draw = 1
/// loss = 0
///
/// [[results]]
/// home = "FCP"
/// away = "SLB"
/// score = [3, 2]
/// ```
#[derive(Debug, Deserialize)]
struct CompetitionFile {
    name: String,
    #[serde(default)]
    mode: Mode,
    teams: Vec<String>,
    #[serde(default)]
    points: Option<PointsScheme>,
    #[serde(default)]
    results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
struct ResultEntry {
    home: String,
    away: String,
    score: [i64; 2],
}

fn print_usage() {
    println!("League Standings Runner");
    println!();
    println!("Usage:");
    println!("  league table <competition.toml>");
    println!("  league fixtures <competition.toml>");
    println!("  league results <competition.toml>");
    println!("  league export <competition.toml> <session.json>");
    println!();
    println!("Examples:");
    println!("  league table liga.toml");
    println!("  league export liga.toml liga-session.json");
}

fn load_competition(path: &str) -> Result<Competition, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    let file: CompetitionFile =
        toml::from_str(&contents).map_err(|e| format!("failed to parse {}: {}", path, e))?;

    let scheme = file.points.unwrap_or_default();
    let mut comp = Competition::with_scheme(&file.name, file.teams, file.mode, scheme)
        .map_err(|e| e.to_string())?;
    for entry in &file.results {
        comp.record_result(&entry.home, &entry.away, entry.score[0], entry.score[1])
            .map_err(|e| format!("result {} vs {}: {}", entry.home, entry.away, e))?;
    }
    Ok(comp)
}

fn show_table(path: &str) -> Result<(), String> {
    let comp = load_competition(path)?;
    println!("=== {} ===", comp.name());
    println!();
    print!("{}", render_table(&comp.standings()));
    let played = comp.store().recorded_count();
    let total = comp.fixtures().len();
    if played < total {
        println!();
        println!("({}/{} fixtures played)", played, total);
    }
    Ok(())
}

fn show_fixtures(path: &str) -> Result<(), String> {
    let comp = load_competition(path)?;
    println!("=== {} fixtures ===", comp.name());
    print!("{}", render_fixtures(comp.fixtures()));
    Ok(())
}

fn show_results(path: &str) -> Result<(), String> {
    let comp = load_competition(path)?;
    println!("=== {} results ===", comp.name());
    print!("{}", render_results(comp.store()));
    Ok(())
}

fn export_session(path: &str, out: &str) -> Result<(), String> {
    let comp = load_competition(path)?;
    comp.save(Path::new(out))
        .map_err(|e| format!("failed to save {}: {}", out, e))?;
    println!("Saved session to {}", out);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "table" if args.len() >= 3 => show_table(&args[2]),
        "fixtures" if args.len() >= 3 => show_fixtures(&args[2]),
        "results" if args.len() >= 3 => show_results(&args[2]),
        "export" if args.len() >= 4 => export_session(&args[2], &args[3]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown or incomplete command: {}", cmd);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_file_parses() {
        let file: CompetitionFile = toml::from_str(
            r#"
            name = "Campeonato"
            mode = "single"
            teams = ["FCP", "SLB", "SCP"]

            [[results]]
            home = "FCP"
            away = "SLB"
            score = [3, 2]
            "#,
        )
        .unwrap();

        assert_eq!(file.name, "Campeonato");
        assert_eq!(file.mode, Mode::Single);
        assert_eq!(file.teams.len(), 3);
        assert_eq!(file.results[0].score, [3, 2]);
        assert!(file.points.is_none());
    }

    #[test]
    fn test_command_errors_propagate() {
        // Each command path must surface a failure instead of swallowing it,
        // so main can map it to a non-zero exit code.
        assert!(show_table("/no/such/file.toml").is_err());
        assert!(show_fixtures("/no/such/file.toml").is_err());
        assert!(show_results("/no/such/file.toml").is_err());
        assert!(export_session("/no/such/file.toml", "/tmp/out.json").is_err());
        assert!(load_competition("/no/such/file.toml")
            .unwrap_err()
            .contains("failed to read"));
    }

    #[test]
    fn test_mode_defaults_to_double() {
        let file: CompetitionFile = toml::from_str(
            r#"
            name = "Liga"
            teams = ["A", "B"]
            "#,
        )
        .unwrap();
        assert_eq!(file.mode, Mode::Double);
        assert!(file.results.is_empty());
    }
}

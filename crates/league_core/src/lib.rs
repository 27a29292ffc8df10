//! Round-robin league standings engine
//!
//! This crate provides the core of a round-robin competition:
//! - Fixture generation (single round-robin or home-and-away double)
//! - Result recording with validation and last-write-wins overwrites
//! - Standings computation with a deterministic tie-break chain
//!   (points, goal difference, goals for, team name)
//!
//! # Usage
//!
//! ```
//! use league_core::{Competition, Mode};
//!
//! let mut comp = Competition::new("demo", ["FCP", "SLB", "SCP"], Mode::Single)?;
//! comp.record_result("FCP", "SLB", 3, 2)?;
//! let table = comp.standings();
//! assert_eq!(table[0].team.name(), "FCP");
//! # Ok::<(), league_core::LeagueError>(())
//! ```

mod error;
mod fixture;
mod report;
mod roster;
mod session;
mod standings;
mod store;

pub use error::LeagueError;
pub use fixture::{generate, Fixture, Mode, Score};
pub use report::{render_fixtures, render_results, render_table};
pub use roster::{Roster, Team};
pub use session::Competition;
pub use standings::{compute, PointsScheme, TeamRecord};
pub use store::ResultStore;

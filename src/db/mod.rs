//! Database layer (SQLite).

pub mod sqlite;

pub use sqlite::{SortOrder, WorkoutStore};

/// Table names as constants.
pub mod tables {
    /// Workout records
    pub const WORKOUTS: &str = "athlete_data";
}

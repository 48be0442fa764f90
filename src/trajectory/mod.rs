//! Savings trajectories, named goals and goal file loading

mod data;
pub mod loader;

pub use data::{SavingsGoal, SavingsTrajectory, MONTHS_PER_YEAR};
pub use loader::{load_default_goals, load_goals, load_goals_from_reader, DEFAULT_GOALS_PATH};

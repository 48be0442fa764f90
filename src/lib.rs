//! Savings Projection - goal projection engine for college savings plans
//!
//! This library provides:
//! - Future balance of a savings trajectory (lump sum + monthly contributions, monthly compounding)
//! - Surplus/shortfall against a target goal
//! - Closed-form solve for the monthly contribution that reaches a target
//! - Month-by-month accumulation schedules
//! - Parallel batch evaluation and return-rate sweeps over named goals

pub mod error;
pub mod trajectory;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use trajectory::{SavingsGoal, SavingsTrajectory};
pub use projection::{
    GoalComparison, ProjectionCalculator, ProjectionResult, RequiredContributionResult,
    ProjectionEngine, ProjectionSchedule, ScheduleConfig,
};
pub use scenario::{GoalEvaluation, GoalStatus, ScenarioRunner};

//! Savings projection: closed-form calculator and month-by-month schedules

mod calculator;
mod engine;
mod schedule;
mod state;

pub use calculator::{
    round_money, GoalComparison, ProjectionCalculator, ProjectionResult,
    RequiredContributionResult, MONEY_DP,
};
pub use engine::{ProjectionEngine, ScheduleConfig, DEFAULT_MAX_MONTHS};
pub use schedule::{BalanceRow, ProjectionSchedule, ScheduleSummary};
pub use state::AccumulationState;

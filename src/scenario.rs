//! Scenario runner for goal evaluation
//!
//! Evaluates a goal end to end (projection, comparison, required
//! contribution), fans batches out over rayon, and sweeps a goal across
//! alternative return rates.

use log::{debug, warn};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::projection::{ProjectionCalculator, ProjectionEngine, ProjectionSchedule, ScheduleConfig};
use crate::trajectory::SavingsGoal;

/// Where a goal stands at its target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    Surplus,
    OnTrack,
    Shortfall,
}

impl GoalStatus {
    fn from_difference(difference: Decimal) -> Self {
        if difference.is_zero() {
            GoalStatus::OnTrack
        } else if difference.is_sign_positive() {
            GoalStatus::Surplus
        } else {
            GoalStatus::Shortfall
        }
    }
}

/// Result of evaluating one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    pub name: String,
    pub annual_return_rate_percent: Decimal,
    pub target_goal: Decimal,
    pub projected_balance: Decimal,
    pub goal_difference: Decimal,
    pub required_monthly_contribution: Decimal,
    pub status: GoalStatus,
}

/// Goal evaluator with a shared schedule configuration
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use savings_projection::{SavingsGoal, SavingsTrajectory, ScenarioRunner};
///
/// let goal = SavingsGoal::new(
///     "College",
///     SavingsTrajectory::new(dec!(10000), dec!(500), dec!(0), 5),
///     dec!(45000),
/// );
/// let eval = ScenarioRunner::new().evaluate(&goal).unwrap();
/// assert_eq!(eval.projected_balance, dec!(40000.00));
/// assert_eq!(eval.goal_difference, dec!(-5000.00));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose schedules use the given configuration
    pub fn with_schedule_config(config: ScheduleConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Project, compare and solve for one goal
    pub fn evaluate(&self, goal: &SavingsGoal) -> Result<GoalEvaluation, ProjectionError> {
        let projection = ProjectionCalculator::project(&goal.trajectory)?;
        let comparison =
            ProjectionCalculator::compare_to_goal(projection.projected_balance, goal.target_goal);
        let required = ProjectionCalculator::required_contribution(&goal.trajectory, goal.target_goal)?;

        Ok(GoalEvaluation {
            name: goal.name.clone(),
            annual_return_rate_percent: goal.trajectory.annual_return_rate_percent,
            target_goal: goal.target_goal,
            projected_balance: projection.projected_balance,
            goal_difference: comparison.goal_difference,
            required_monthly_contribution: required.required_monthly_contribution,
            status: GoalStatus::from_difference(comparison.goal_difference),
        })
    }

    /// Evaluate goals in parallel; output order follows input order
    pub fn evaluate_batch(&self, goals: &[SavingsGoal]) -> Vec<Result<GoalEvaluation, ProjectionError>> {
        debug!("evaluating {} goals", goals.len());
        let results: Vec<_> = goals.par_iter().map(|goal| self.evaluate(goal)).collect();

        for (goal, result) in goals.iter().zip(&results) {
            if let Err(err) = result {
                warn!("goal '{}' failed: {}", goal.name, err);
            }
        }
        results
    }

    /// Re-evaluate one goal under each annual rate
    pub fn rate_sweep(
        &self,
        goal: &SavingsGoal,
        annual_rates_percent: &[Decimal],
    ) -> Result<Vec<GoalEvaluation>, ProjectionError> {
        annual_rates_percent
            .iter()
            .map(|&rate| {
                let scenario = SavingsGoal {
                    trajectory: goal.trajectory.with_annual_return_rate(rate),
                    ..goal.clone()
                };
                self.evaluate(&scenario)
            })
            .collect()
    }

    /// Month-by-month schedule for a goal's trajectory
    pub fn schedule(&self, goal: &SavingsGoal) -> Result<ProjectionSchedule, ProjectionError> {
        self.engine.schedule(&goal.trajectory)
    }
}

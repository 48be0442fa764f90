//! Closed-form savings projection math
//!
//! Future value of a lump sum plus an ordinary annuity of monthly
//! contributions, and the inverse solve for the contribution that reaches a
//! target balance.

use rust_decimal::prelude::*;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::trajectory::SavingsTrajectory;

/// Number of fractional digits in reported money amounts
pub const MONEY_DP: u32 = 2;

/// Round a money amount to cents, half away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}

/// Projected balance at the target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub projected_balance: Decimal,
}

/// Signed gap between a projected balance and a target (positive = surplus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalComparison {
    pub goal_difference: Decimal,
}

impl GoalComparison {
    pub fn is_surplus(&self) -> bool {
        self.goal_difference.is_sign_positive() && !self.goal_difference.is_zero()
    }

    pub fn is_shortfall(&self) -> bool {
        self.goal_difference.is_sign_negative() && !self.goal_difference.is_zero()
    }
}

/// Monthly contribution needed to reach a target
///
/// Negative means the current savings alone overshoot the target; zero means
/// either the target is met exactly or there is no time left to contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredContributionResult {
    pub required_monthly_contribution: Decimal,
}

/// Stateless projection calculator
pub struct ProjectionCalculator;

impl ProjectionCalculator {
    /// Project the balance at the end of the trajectory's horizon
    ///
    /// A zero or negative horizon returns the current savings unchanged.
    pub fn project(trajectory: &SavingsTrajectory) -> Result<ProjectionResult, ProjectionError> {
        let months = trajectory.months();
        if months <= 0 {
            return Ok(ProjectionResult {
                projected_balance: round_money(trajectory.current_savings),
            });
        }
        trajectory.validate()?;

        let r = trajectory.monthly_rate();
        let lump = Self::lump_sum_future_value(trajectory.current_savings, r, months)?;
        let annuity = trajectory
            .monthly_contribution
            .checked_mul(Self::annuity_factor(r, months)?)
            .ok_or(ProjectionError::Overflow {
                operation: "contribution future value",
            })?;
        let total = lump.checked_add(annuity).ok_or(ProjectionError::Overflow {
            operation: "projected balance",
        })?;

        Ok(ProjectionResult {
            projected_balance: round_money(total),
        })
    }

    /// Difference between a projected balance and a target goal
    pub fn compare_to_goal(projected_balance: Decimal, target_goal: Decimal) -> GoalComparison {
        GoalComparison {
            goal_difference: projected_balance - target_goal,
        }
    }

    /// Solve for the monthly contribution that brings the trajectory to `target_goal`
    ///
    /// The trajectory's own `monthly_contribution` is ignored.
    pub fn required_contribution(
        trajectory: &SavingsTrajectory,
        target_goal: Decimal,
    ) -> Result<RequiredContributionResult, ProjectionError> {
        let months = trajectory.months();
        if months <= 0 {
            return Ok(RequiredContributionResult {
                required_monthly_contribution: round_money(Decimal::ZERO),
            });
        }
        trajectory.validate()?;

        let r = trajectory.monthly_rate();
        let fv_lump = Self::lump_sum_future_value(trajectory.current_savings, r, months)?;
        let remaining_needed = target_goal.checked_sub(fv_lump).ok_or(ProjectionError::Overflow {
            operation: "remaining goal",
        })?;
        // Positive for any months > 0 once r > -1
        let factor = Self::annuity_factor(r, months)?;
        let required = remaining_needed
            .checked_div(factor)
            .ok_or(ProjectionError::Overflow {
                operation: "required contribution",
            })?;

        Ok(RequiredContributionResult {
            required_monthly_contribution: round_money(required),
        })
    }

    /// `(1 + r)^months`
    pub fn growth_factor(r: Decimal, months: i64) -> Result<Decimal, ProjectionError> {
        (Decimal::ONE + r)
            .checked_powi(months)
            .ok_or(ProjectionError::Overflow {
                operation: "growth factor",
            })
    }

    /// Future value of `amount` left to compound for `months`
    pub fn lump_sum_future_value(
        amount: Decimal,
        r: Decimal,
        months: i64,
    ) -> Result<Decimal, ProjectionError> {
        if r.is_zero() {
            return Ok(amount);
        }
        amount
            .checked_mul(Self::growth_factor(r, months)?)
            .ok_or(ProjectionError::Overflow {
                operation: "lump sum future value",
            })
    }

    /// Future value of 1 paid at the end of each month: `((1 + r)^n - 1) / r`
    pub fn annuity_factor(r: Decimal, months: i64) -> Result<Decimal, ProjectionError> {
        if r.is_zero() {
            return Ok(Decimal::from(months));
        }
        let growth = Self::growth_factor(r, months)?;
        (growth - Decimal::ONE)
            .checked_div(r)
            .ok_or(ProjectionError::Overflow {
                operation: "annuity factor",
            })
    }
}

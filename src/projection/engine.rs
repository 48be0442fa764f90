//! Schedule engine: steps a trajectory month by month

use log::debug;
use rust_decimal::Decimal;

use super::calculator::round_money;
use super::schedule::{BalanceRow, ProjectionSchedule};
use super::state::AccumulationState;
use crate::error::ProjectionError;
use crate::trajectory::SavingsTrajectory;

/// Default row cap: 100 years of months
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Configuration for a schedule run
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Round reported row amounts to cents (accumulation stays unrounded)
    pub rounded_output: bool,

    /// Longest horizon accepted, in months
    pub max_months: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            rounded_output: true,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Builds month-by-month schedules
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ScheduleConfig,
}

impl ProjectionEngine {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Schedule of a trajectory; empty when the horizon is zero or negative
    pub fn schedule(&self, trajectory: &SavingsTrajectory) -> Result<ProjectionSchedule, ProjectionError> {
        let mut schedule = ProjectionSchedule::new(trajectory.current_savings);
        let months = trajectory.months();
        if months <= 0 {
            return Ok(schedule);
        }
        if months > i64::from(self.config.max_months) {
            return Err(ProjectionError::HorizonTooLong {
                months,
                max_months: self.config.max_months,
            });
        }
        trajectory.validate()?;

        let r = trajectory.monthly_rate();
        let mut state = AccumulationState::from_trajectory(trajectory);
        debug!("scheduling {} months at monthly rate {}", months, r);

        for _ in 0..months {
            state.advance_month();
            let row = self.step_month(trajectory, r, &mut state)?;
            schedule.add_row(row);
        }

        schedule.total_contributions = state.total_contributions;
        schedule.total_growth = state.total_growth;
        schedule.final_balance = state.closing_balance;
        Ok(schedule)
    }

    /// Credit growth then the end-of-month contribution
    fn step_month(
        &self,
        trajectory: &SavingsTrajectory,
        r: Decimal,
        state: &mut AccumulationState,
    ) -> Result<BalanceRow, ProjectionError> {
        let overflow = ProjectionError::Overflow {
            operation: "schedule balance",
        };
        let growth = state.opening_balance.checked_mul(r).ok_or(overflow.clone())?;
        let contribution = trajectory.monthly_contribution;
        state.closing_balance = state
            .opening_balance
            .checked_add(growth)
            .and_then(|b| b.checked_add(contribution))
            .ok_or(overflow.clone())?;
        state.total_growth = state.total_growth.checked_add(growth).ok_or(overflow.clone())?;
        state.total_contributions = state
            .total_contributions
            .checked_add(contribution)
            .ok_or(overflow)?;

        let present = |amount: Decimal| {
            if self.config.rounded_output {
                round_money(amount)
            } else {
                amount
            }
        };

        Ok(BalanceRow {
            month: state.month,
            year: state.year,
            month_in_year: state.month_in_year,
            opening_balance: present(state.opening_balance),
            growth: present(growth),
            contribution: present(contribution),
            closing_balance: present(state.closing_balance),
        })
    }
}

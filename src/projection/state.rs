//! Running balance state while stepping a trajectory month by month

use rust_decimal::Decimal;

use crate::trajectory::{SavingsTrajectory, MONTHS_PER_YEAR};

/// Balance state at a point in the schedule
#[derive(Debug, Clone)]
pub struct AccumulationState {
    /// Current month (1-indexed, 0 before the first step)
    pub month: u32,

    /// Year of the schedule (1-indexed)
    pub year: u32,

    /// Month within the year (1-12)
    pub month_in_year: u32,

    /// Balance at the start of the current month
    pub opening_balance: Decimal,

    /// Balance at the end of the current month
    pub closing_balance: Decimal,

    /// Sum of contributions made so far
    pub total_contributions: Decimal,

    /// Sum of growth credited so far
    pub total_growth: Decimal,
}

impl AccumulationState {
    /// Initial state before the first month
    pub fn from_trajectory(trajectory: &SavingsTrajectory) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            opening_balance: trajectory.current_savings,
            closing_balance: trajectory.current_savings,
            total_contributions: Decimal::ZERO,
            total_growth: Decimal::ZERO,
        }
    }

    /// Move to the next month; the previous closing balance becomes the opening one
    pub fn advance_month(&mut self) {
        let per_year = MONTHS_PER_YEAR as u32;
        self.month += 1;
        self.year = (self.month - 1) / per_year + 1;
        self.month_in_year = (self.month - 1) % per_year + 1;
        self.opening_balance = self.closing_balance;
    }
}

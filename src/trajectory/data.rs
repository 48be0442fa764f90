//! Savings trajectory and goal records

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Months per year used for the monthly compounding convention
pub const MONTHS_PER_YEAR: i64 = 12;

/// Parameters of a savings projection
///
/// Rates are nominal annual percentages (`6` means 6%/year) compounded
/// monthly. Callers must keep the implied monthly rate above -100%, i.e.
/// `annual_return_rate_percent > -1200`; see [`SavingsTrajectory::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTrajectory {
    /// Balance saved so far
    pub current_savings: Decimal,

    /// Contribution made at the end of every month (negative = withdrawal)
    pub monthly_contribution: Decimal,

    /// Expected annual return, in percent
    pub annual_return_rate_percent: Decimal,

    /// Whole years until the target date; zero or negative means "now"
    pub years_until_target: i32,
}

impl SavingsTrajectory {
    pub fn new(
        current_savings: Decimal,
        monthly_contribution: Decimal,
        annual_return_rate_percent: Decimal,
        years_until_target: i32,
    ) -> Self {
        Self {
            current_savings,
            monthly_contribution,
            annual_return_rate_percent,
            years_until_target,
        }
    }

    /// Trajectory with no further contributions, as used when solving for one
    pub fn without_contribution(
        current_savings: Decimal,
        annual_return_rate_percent: Decimal,
        years_until_target: i32,
    ) -> Self {
        Self::new(current_savings, Decimal::ZERO, annual_return_rate_percent, years_until_target)
    }

    /// Copy of this trajectory with a different monthly contribution
    pub fn with_monthly_contribution(self, monthly_contribution: Decimal) -> Self {
        Self {
            monthly_contribution,
            ..self
        }
    }

    /// Copy of this trajectory with a different annual return rate
    pub fn with_annual_return_rate(self, annual_return_rate_percent: Decimal) -> Self {
        Self {
            annual_return_rate_percent,
            ..self
        }
    }

    /// Number of monthly compounding periods to the target date
    pub fn months(&self) -> i64 {
        i64::from(self.years_until_target) * MONTHS_PER_YEAR
    }

    /// Monthly rate as a fraction: `annual% / 100 / 12`
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_return_rate_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
    }

    /// Check the `r > -1` precondition of the compounding formulas
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.monthly_rate() <= Decimal::NEGATIVE_ONE {
            return Err(ProjectionError::InvalidReturnRate {
                annual_rate_percent: self.annual_return_rate_percent,
            });
        }
        Ok(())
    }
}

/// A named savings target: the trajectory plus the balance it should reach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub trajectory: SavingsTrajectory,
    pub target_goal: Decimal,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, trajectory: SavingsTrajectory, target_goal: Decimal) -> Self {
        Self {
            name: name.into(),
            trajectory,
            target_goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_and_monthly_rate() {
        let t = SavingsTrajectory::new(dec!(10000), dec!(500), dec!(6), 10);
        assert_eq!(t.months(), 120);
        assert_eq!(t.monthly_rate(), dec!(0.005));
    }

    #[test]
    fn test_negative_horizon_gives_negative_months() {
        let t = SavingsTrajectory::without_contribution(dec!(10000), dec!(6), -5);
        assert_eq!(t.months(), -60);
        assert_eq!(t.monthly_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_validate_rejects_rate_at_minus_100_pct_monthly() {
        let t = SavingsTrajectory::new(dec!(1000), dec!(0), dec!(-1200), 1);
        assert_eq!(
            t.validate(),
            Err(ProjectionError::InvalidReturnRate {
                annual_rate_percent: dec!(-1200)
            })
        );

        // Just above the boundary is fine, as are ordinary negative returns
        assert!(t.with_annual_return_rate(dec!(-1199)).validate().is_ok());
        assert!(t.with_annual_return_rate(dec!(-5)).validate().is_ok());
    }

    #[test]
    fn test_with_monthly_contribution_keeps_other_fields() {
        let t = SavingsTrajectory::new(dec!(2500), dec!(100), dec!(4), 3);
        let u = t.with_monthly_contribution(dec!(250));
        assert_eq!(u.monthly_contribution, dec!(250));
        assert_eq!(u.current_savings, t.current_savings);
        assert_eq!(u.annual_return_rate_percent, t.annual_return_rate_percent);
        assert_eq!(u.years_until_target, t.years_until_target);
    }
}

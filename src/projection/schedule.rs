//! Month-by-month schedule output

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of a projection schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub month: u32,
    pub year: u32,
    pub month_in_year: u32,
    pub opening_balance: Decimal,
    /// Growth credited on the opening balance
    pub growth: Decimal,
    /// Contribution paid at the end of the month
    pub contribution: Decimal,
    pub closing_balance: Decimal,
}

/// Complete schedule for one trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSchedule {
    pub rows: Vec<BalanceRow>,

    /// Starting balance, reported when there are no rows
    pub starting_balance: Decimal,

    /// Unrounded totals carried by the engine
    pub(crate) total_contributions: Decimal,
    pub(crate) total_growth: Decimal,
    pub(crate) final_balance: Decimal,
}

impl ProjectionSchedule {
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            rows: Vec::new(),
            starting_balance,
            total_contributions: Decimal::ZERO,
            total_growth: Decimal::ZERO,
            final_balance: starting_balance,
        }
    }

    pub fn add_row(&mut self, row: BalanceRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Totals over the whole schedule, rounded to cents
    pub fn summary(&self) -> ScheduleSummary {
        use super::calculator::round_money;

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_contributions: round_money(self.total_contributions),
            total_growth: round_money(self.total_growth),
            final_balance: round_money(self.final_balance),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_contributions: Decimal,
    pub total_growth: Decimal,
    pub final_balance: Decimal,
}

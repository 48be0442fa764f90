//! Load savings goals from CSV
//!
//! Expected header:
//! `Name,CurrentSavings,MonthlyContribution,ExpectedReturnRate,YearsUntilTarget,TargetGoal`

use super::{SavingsGoal, SavingsTrajectory};
use crate::error::LoadError;
use csv::Reader;
use log::debug;
use rust_decimal::Decimal;
use std::path::Path;

/// Default goal file location, relative to the working directory
pub const DEFAULT_GOALS_PATH: &str = "data/goals.csv";

/// Environment variable overriding [`DEFAULT_GOALS_PATH`]
pub const GOALS_PATH_ENV: &str = "SAVINGS_GOALS_PATH";

/// Raw CSV row matching the goal file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "CurrentSavings", with = "rust_decimal::serde::str")]
    current_savings: Decimal,
    #[serde(rename = "MonthlyContribution", with = "rust_decimal::serde::str")]
    monthly_contribution: Decimal,
    #[serde(rename = "ExpectedReturnRate", with = "rust_decimal::serde::str")]
    expected_return_rate: Decimal,
    #[serde(rename = "YearsUntilTarget")]
    years_until_target: i32,
    #[serde(rename = "TargetGoal", with = "rust_decimal::serde::str")]
    target_goal: Decimal,
}

impl CsvRow {
    fn into_goal(self, row: usize) -> Result<SavingsGoal, LoadError> {
        let trajectory = SavingsTrajectory::new(
            self.current_savings,
            self.monthly_contribution,
            self.expected_return_rate,
            self.years_until_target,
        );
        trajectory
            .validate()
            .map_err(|source| LoadError::InvalidRow { row, source })?;

        Ok(SavingsGoal::new(self.name.trim(), trajectory, self.target_goal))
    }
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<SavingsGoal>, LoadError> {
    let path = path.as_ref();
    debug!("loading goals from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_goals_from_reader(file)
}

/// Load goals from any reader (e.g., string buffer, stdin)
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<SavingsGoal>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut goals = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        goals.push(row.into_goal(index + 1)?);
    }

    debug!("loaded {} goals", goals.len());
    Ok(goals)
}

/// Load goals from `$SAVINGS_GOALS_PATH`, falling back to `data/goals.csv`
pub fn load_default_goals() -> Result<Vec<SavingsGoal>, LoadError> {
    load_goals(default_goals_path())
}

/// Goal file path after applying the environment override
pub fn default_goals_path() -> String {
    goals_path_from(std::env::var(GOALS_PATH_ENV).ok())
}

/// Override if present and non-empty, otherwise [`DEFAULT_GOALS_PATH`]
fn goals_path_from(override_path: Option<String>) -> String {
    override_path
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GOALS_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use rust_decimal_macros::dec;

    const HEADER: &str =
        "Name,CurrentSavings,MonthlyContribution,ExpectedReturnRate,YearsUntilTarget,TargetGoal\n";

    #[test]
    fn test_load_goals_from_reader() {
        let data = format!(
            "{HEADER}College Projection 2025,10000,500,6,10,100000\nShort horizon,8500.00,0,5.5,0,20000\n"
        );
        let goals = load_goals_from_reader(data.as_bytes()).expect("goals should load");
        assert_eq!(goals.len(), 2);

        let first = &goals[0];
        assert_eq!(first.name, "College Projection 2025");
        assert_eq!(first.trajectory.current_savings, dec!(10000));
        assert_eq!(first.trajectory.monthly_contribution, dec!(500));
        assert_eq!(first.trajectory.annual_return_rate_percent, dec!(6));
        assert_eq!(first.trajectory.years_until_target, 10);
        assert_eq!(first.target_goal, dec!(100000));

        assert_eq!(goals[1].trajectory.annual_return_rate_percent, dec!(5.5));
        assert_eq!(goals[1].trajectory.years_until_target, 0);
    }

    #[test]
    fn test_large_amounts_keep_every_digit() {
        let data = format!("{HEADER}big,1234567890123456.78,0.10,6,10,98765432109876543.21\n");
        let goals = load_goals_from_reader(data.as_bytes()).expect("goals should load");
        assert_eq!(goals[0].trajectory.current_savings, dec!(1234567890123456.78));
        assert_eq!(goals[0].trajectory.monthly_contribution, dec!(0.10));
        assert_eq!(goals[0].target_goal, dec!(98765432109876543.21));
        assert_eq!(goals[0].target_goal.to_string(), "98765432109876543.21");
    }

    #[test]
    fn test_goals_path_override() {
        assert_eq!(goals_path_from(Some("/tmp/plans.csv".to_string())), "/tmp/plans.csv");
        assert_eq!(goals_path_from(None), DEFAULT_GOALS_PATH);
        assert_eq!(goals_path_from(Some("  ".to_string())), DEFAULT_GOALS_PATH);
    }

    #[test]
    fn test_invalid_rate_reports_row_number() {
        let data = format!("{HEADER}ok,1000,10,4,2,5000\nbad,1000,10,-1500,2,5000\n");
        let err = load_goals_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(source, ProjectionError::InvalidReturnRate { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_amount_is_csv_error() {
        let data = format!("{HEADER}broken,lots,10,4,2,5000\n");
        let err = load_goals_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_load_sample_goal_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_GOALS_PATH);
        let goals = load_goals(path).expect("sample goal file should load");
        assert!(!goals.is_empty());
        assert!(goals.iter().all(|g| !g.name.is_empty()));
    }

    #[test]
    fn test_load_default_goals() {
        // Unit tests run from the package root
        if std::env::var(GOALS_PATH_ENV).is_err() {
            let goals = load_default_goals().expect("default goal file should load");
            assert_eq!(goals.len(), 5);
            assert_eq!(goals[3].name, "Emergency tuition buffer");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_goals("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}

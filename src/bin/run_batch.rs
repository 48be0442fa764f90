//! Evaluate every goal in a goal file
//!
//! Reads `data/goals.csv` (or `$SAVINGS_GOALS_PATH`, or `--input`), evaluates
//! the goals in parallel and prints a table or JSON, optionally writing the
//! evaluations to CSV.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use savings_projection::trajectory::{load_goals, loader::default_goals_path};
use savings_projection::{GoalEvaluation, GoalStatus, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Evaluate all savings goals in a CSV goal file")]
struct Cli {
    #[arg(long, help = "Goal file; defaults to $SAVINGS_GOALS_PATH or data/goals.csv")]
    input: Option<PathBuf>,
    #[arg(long, help = "Write evaluations to this CSV file")]
    output: Option<PathBuf>,
    #[arg(long, help = "Print JSON instead of a table")]
    json: bool,
}

#[derive(Serialize)]
struct FailedGoal {
    name: String,
    error: String,
}

#[derive(Serialize)]
struct BatchResponse {
    goal_count: usize,
    evaluations: Vec<GoalEvaluation>,
    failures: Vec<FailedGoal>,
    total_target: Decimal,
    total_projected: Decimal,
    execution_time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let input = cli.input.unwrap_or_else(|| PathBuf::from(default_goals_path()));
    let goals = load_goals(&input).with_context(|| format!("loading {}", input.display()))?;
    info!("loaded {} goals from {}", goals.len(), input.display());

    let runner = ScenarioRunner::new();
    let mut evaluations = Vec::with_capacity(goals.len());
    let mut failures = Vec::new();
    for (goal, result) in goals.iter().zip(runner.evaluate_batch(&goals)) {
        match result {
            Ok(eval) => evaluations.push(eval),
            Err(err) => failures.push(FailedGoal {
                name: goal.name.clone(),
                error: err.to_string(),
            }),
        }
    }

    let total_target: Decimal = evaluations.iter().map(|e| e.target_goal).sum();
    let total_projected: Decimal = evaluations.iter().map(|e| e.projected_balance).sum();

    if let Some(path) = &cli.output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        for eval in &evaluations {
            writer.serialize(eval)?;
        }
        writer.flush()?;
        info!("evaluations written to {}", path.display());
    }

    if cli.json {
        let response = BatchResponse {
            goal_count: goals.len(),
            evaluations,
            failures,
            total_target,
            total_projected,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!(
        "{:<40} {:>14} {:>14} {:>14} {:>12} {:>10}",
        "Goal", "Target", "Projected", "Difference", "Required/mo", "Status"
    );
    println!("{}", "-".repeat(109));
    for eval in &evaluations {
        let status = match eval.status {
            GoalStatus::Surplus => "surplus",
            GoalStatus::OnTrack => "on track",
            GoalStatus::Shortfall => "shortfall",
        };
        println!(
            "{:<40} {:>14} {:>14} {:>14} {:>12} {:>10}",
            eval.name,
            eval.target_goal,
            eval.projected_balance,
            eval.goal_difference,
            eval.required_monthly_contribution,
            status,
        );
    }
    for failure in &failures {
        println!("{:<40} error: {}", failure.name, failure.error);
    }

    println!("\nTotal target:    ${}", total_target);
    println!("Total projected: ${}", total_projected);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

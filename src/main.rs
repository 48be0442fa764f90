//! Savings projection CLI
//!
//! Projects a savings trajectory, solves for the required monthly
//! contribution, or prints a month-by-month schedule.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use savings_projection::{
    projection::{ProjectionCalculator, ProjectionEngine, ScheduleConfig},
    SavingsTrajectory,
};

#[derive(Parser, Debug)]
#[command(
    name = "savings-projection",
    about = "Savings goal projection: future balance, goal gap and required monthly contribution"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the balance at the target date
    Project(ProjectArgs),
    /// Solve for the monthly contribution that reaches a target
    Required(RequiredArgs),
    /// Print the month-by-month schedule as CSV
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug)]
struct TrajectoryArgs {
    #[arg(long, help = "Balance saved so far")]
    current_savings: Decimal,
    #[arg(long, allow_negative_numbers = true, help = "Expected annual return in percent, e.g. 6")]
    rate: Decimal,
    #[arg(long, allow_negative_numbers = true, help = "Whole years until the target date")]
    years: i32,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[command(flatten)]
    trajectory: TrajectoryArgs,
    #[arg(
        long,
        default_value_t = Decimal::ZERO,
        allow_negative_numbers = true,
        help = "Contribution at the end of each month"
    )]
    monthly_contribution: Decimal,
    #[arg(long, allow_negative_numbers = true, help = "Target balance to compare against")]
    target: Option<Decimal>,
    #[arg(long, help = "Print JSON instead of text")]
    json: bool,
}

#[derive(Args, Debug)]
struct RequiredArgs {
    #[command(flatten)]
    trajectory: TrajectoryArgs,
    #[arg(long, allow_negative_numbers = true, help = "Target balance at the target date")]
    target: Decimal,
    #[arg(long, help = "Print JSON instead of text")]
    json: bool,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    trajectory: TrajectoryArgs,
    #[arg(long, default_value_t = Decimal::ZERO, allow_negative_numbers = true)]
    monthly_contribution: Decimal,
    #[arg(long, help = "Write CSV here instead of stdout")]
    output: Option<PathBuf>,
    #[arg(long, help = "Report unrounded amounts")]
    unrounded: bool,
}

#[derive(Serialize)]
struct ProjectResponse {
    projected_balance: Decimal,
    target_goal: Option<Decimal>,
    goal_difference: Option<Decimal>,
}

#[derive(Serialize)]
struct RequiredResponse {
    target_goal: Decimal,
    required_monthly_contribution: Decimal,
}

fn trajectory_from(args: &TrajectoryArgs, monthly_contribution: Decimal) -> SavingsTrajectory {
    SavingsTrajectory::new(args.current_savings, monthly_contribution, args.rate, args.years)
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let trajectory = trajectory_from(&args.trajectory, args.monthly_contribution);
    info!("projecting {:?}", trajectory);
    let result = ProjectionCalculator::project(&trajectory).context("projection failed")?;
    let difference = args
        .target
        .map(|target| ProjectionCalculator::compare_to_goal(result.projected_balance, target));

    if args.json {
        let response = ProjectResponse {
            projected_balance: result.projected_balance,
            target_goal: args.target,
            goal_difference: difference.map(|d| d.goal_difference),
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!("Projected balance: ${}", result.projected_balance);
    if let (Some(target), Some(cmp)) = (args.target, difference) {
        println!("Target goal:       ${}", target);
        if cmp.is_surplus() {
            println!("Surplus:           ${}", cmp.goal_difference);
        } else if cmp.is_shortfall() {
            println!("Shortfall:         ${}", cmp.goal_difference.abs());
        } else {
            println!("On track: projection meets the goal exactly");
        }
    }
    Ok(())
}

fn run_required(args: RequiredArgs) -> Result<()> {
    let trajectory = trajectory_from(&args.trajectory, Decimal::ZERO);
    info!("solving contribution for {:?} -> {}", trajectory, args.target);
    let result = ProjectionCalculator::required_contribution(&trajectory, args.target)
        .context("required contribution failed")?;

    if args.json {
        let response = RequiredResponse {
            target_goal: args.target,
            required_monthly_contribution: result.required_monthly_contribution,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!(
            "Required monthly contribution: ${}",
            result.required_monthly_contribution
        );
    }
    Ok(())
}

fn run_schedule(args: ScheduleArgs) -> Result<()> {
    let trajectory = trajectory_from(&args.trajectory, args.monthly_contribution);
    let engine = ProjectionEngine::new(ScheduleConfig {
        rounded_output: !args.unrounded,
        ..ScheduleConfig::default()
    });
    let schedule = engine.schedule(&trajectory).context("schedule failed")?;

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    for row in &schedule.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let summary = schedule.summary();
    if let Some(path) = &args.output {
        println!("Schedule written to {}", path.display());
    }
    eprintln!(
        "{} months, contributions ${}, growth ${}, final balance ${}",
        summary.total_months, summary.total_contributions, summary.total_growth, summary.final_balance
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project(args) => run_project(args),
        Command::Required(args) => run_required(args),
        Command::Schedule(args) => run_schedule(args),
    }
}

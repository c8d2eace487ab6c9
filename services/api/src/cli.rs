use crate::commands::{
    run_assessment, run_decision, run_org_analytics, run_plan, run_survey, DecideArgs,
    EmployeeArgs, SurveyArgs,
};
use crate::server;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hr_copilot::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hr-copilot",
    about = "Rule-driven HR decision support from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct GlobalArgs {
    /// Survey CSV synced onto employees before answering (overrides APP_SURVEY_CSV)
    #[arg(long, global = true)]
    pub(crate) survey: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Full assessment of one employee
    Assess(EmployeeArgs),
    /// Action plan for one employee
    Plan(EmployeeArgs),
    /// Team structure and skill-gap analytics
    Org,
    /// Answer a strategic question
    Decide(DecideArgs),
    /// Classify a survey export and sync it onto the sample organisation
    Survey(SurveyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let global = cli.global;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, global).await,
        Command::Assess(args) => run_assessment(args, &global),
        Command::Plan(args) => run_plan(args, &global),
        Command::Org => run_org_analytics(&global),
        Command::Decide(args) => run_decision(args, &global),
        Command::Survey(args) => run_survey(args),
    }
}

use crate::demo::{
    run_demo, run_format_phone, run_start_date, run_validate, DemoArgs, FormatPhoneArgs,
    StartDateArgs, ValidateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use onboarding::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Employee Onboarding",
    about = "Validate onboarding drafts and serve the onboarding form rules over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a saved onboarding draft step by step and print the review
    Validate(ValidateArgs),
    /// Apply the progressive phone mask to raw input
    FormatPhone(FormatPhoneArgs),
    /// Check a start date against the window and department weekend rules
    StartDate(StartDateArgs),
    /// Walk a scripted applicant through every step of the form
    Demo(DemoArgs),
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
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
        Command::FormatPhone(args) => {
            run_format_phone(args);
            Ok(())
        }
        Command::StartDate(args) => run_start_date(args),
        Command::Demo(args) => run_demo(args),
    }
}

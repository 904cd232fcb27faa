use crate::commands::{run_cohort, run_score, CohortArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use employability::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Employability Scorer",
    about = "Score student career profiles and serve the employability API",
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
    /// Score a single stored profile document
    Score(ScoreArgs),
    /// Score a cohort of students and summarize the results
    Cohort(CohortArgs),
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
        Command::Score(args) => run_score(args),
        Command::Cohort(args) => run_cohort(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["employability-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cohort_accepts_csv_output() {
        let cli = Cli::try_parse_from([
            "employability-api",
            "cohort",
            "--profiles",
            "students.json",
            "--csv",
            "scores.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Cohort(args)) => {
                assert_eq!(args.profiles.to_str(), Some("students.json"));
                assert_eq!(
                    args.csv.as_deref().and_then(|p| p.to_str()),
                    Some("scores.csv")
                );
            }
            other => panic!("expected cohort command, got {other:?}"),
        }
    }
}

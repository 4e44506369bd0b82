use crate::demo::{run_demo, run_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_cost::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Cost Estimator",
    about = "Estimate the net cost of a hire in Italy under the 2025 subsidy rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service with the estimator form (default command)
    Serve(ServeArgs),
    /// Estimate a single hire and optionally export the PDF report
    Estimate(EstimateArgs),
    /// Print estimates for a set of representative hiring profiles
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
        Command::Estimate(args) => run_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hiring_cost::workflows::hiring::{ContractType, Region};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn estimate_arguments_parse_with_defaults() {
        let cli = Cli::try_parse_from(["hiring-cost-api", "estimate", "--salary", "30000"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Estimate(args)) => {
                assert_eq!(args.contract, ContractType::Permanent);
                assert_eq!(args.region, Region::Campania);
                assert_eq!(args.employees, 5);
                assert_eq!(args.age, 24);
                assert!(!args.female);
                assert!(args.pdf.is_none());
            }
            other => panic!("expected estimate command, got {other:?}"),
        }
    }

    #[test]
    fn age_outside_bounds_is_rejected() {
        let result = Cli::try_parse_from([
            "hiring-cost-api",
            "estimate",
            "--salary",
            "30000",
            "--age",
            "70",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["hiring-cost-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}

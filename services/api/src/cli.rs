use crate::demo::{
    run_assess, run_categories, run_demo, run_regions, AssessArgs, CategoriesArgs, DemoArgs,
    RegionsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rainwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rainwise",
    about = "Classify sites into rainwater-harvesting systems and size, cost and plan them",
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
    /// Assess a single site and print the feasibility report
    Assess(AssessArgs),
    /// List the catalogued harvesting-system categories
    Categories(CategoriesArgs),
    /// Classify every region of a hydrogeology CSV export
    Regions(RegionsArgs),
    /// Walk through a few sample sites end to end
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
        Command::Assess(args) => run_assess(args),
        Command::Categories(args) => run_categories(args),
        Command::Regions(args) => run_regions(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainwise::assessment::ComplexityPreference;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rainwise-api"]).expect("empty args parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_site_flags() {
        let cli = Cli::try_parse_from([
            "rainwise-api",
            "assess",
            "--roof-area",
            "100",
            "--rainfall",
            "800",
            "--soil-type",
            "loamy",
            "--complexity",
            "simple",
            "--json",
        ])
        .expect("assess args parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.roof_area, Some(100.0));
                assert_eq!(args.soil_type.as_deref(), Some("loamy"));
                assert_eq!(args.complexity, Some(ComplexityPreference::Simple));
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_complexity_is_rejected() {
        let err = Cli::try_parse_from(["rainwise-api", "assess", "--complexity", "expert"])
            .expect_err("invalid complexity rejected");
        assert!(err.to_string().contains("expert"));
    }
}

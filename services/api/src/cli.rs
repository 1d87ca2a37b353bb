use crate::recommend::{run_catalog, run_recommend, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ps_recommender::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PS Package Recommender",
    about = "Recommend a professional services package from a project questionnaire",
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
    /// Answer the questionnaire from flags and print the recommendation
    Recommend(RecommendArgs),
    /// Print the active pricing catalog as JSON
    Catalog,
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
        Command::Recommend(args) => run_recommend(args),
        Command::Catalog => run_catalog(),
    }
}

use crate::demo::{
    run_categories, run_demo, run_lead_table, run_score, CategoriesArgs, DemoArgs, LeadTableArgs,
    ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use social_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Social Lead Desk",
    about = "Score, filter, and review social-media leads from the command line",
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
    /// Score a single piece of text
    Score(ScoreArgs),
    /// Browse scored leads from a dataset or the bundled sample posts
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Walk through the dashboard views end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Print one page of the filtered results table
    Table(LeadTableArgs),
    /// Print the hot/warm/cold cards, or the members of one category
    Categories(CategoriesArgs),
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
        Command::Leads {
            command: LeadsCommand::Table(args),
        } => run_lead_table(args),
        Command::Leads {
            command: LeadsCommand::Categories(args),
        } => run_categories(args),
        Command::Demo(args) => run_demo(args),
    }
}

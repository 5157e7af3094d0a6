use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod browse;
mod search;
mod seed;
mod serve;
mod settings;

#[derive(Parser)]
#[command(name = "advocates")]
#[command(about = "Search and browse the advocate directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the search API
    Serve(serve::ServeArgs),

    /// Browse the directory in the terminal
    #[command(alias = "b")]
    Browse(browse::BrowseArgs),

    /// Run a single search and print the results
    #[command(alias = "s")]
    Search(search::SearchArgs),

    /// Import advocates into the database
    Seed(seed::SeedArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The browser owns the terminal, so it stays quiet unless asked (RUST_LOG still wins)
    let default_filter = match (&cli.command, cli.debug) {
        (_, true) => "debug",
        (Commands::Browse(_), false) => "off",
        (_, false) => "error",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Serve(args) => serve::execute(args),
        Commands::Browse(args) => browse::execute(args),
        Commands::Search(args) => search::execute(args),
        Commands::Seed(args) => seed::execute(args),
    }
}

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "finlit-cli", version, about = "Finlit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily check-in
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Learning progress and points
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Article completion
    Article {
        #[command(subcommand)]
        action: commands::article::ArticleAction,
    },
    /// Achievement catalog and unlock state
    Achievements {
        #[command(subcommand)]
        action: commands::achievements::AchievementsAction,
    },
    /// Profile summary
    Stats,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Article { action } => commands::article::run(action),
        Commands::Achievements { action } => commands::achievements::run(action),
        Commands::Stats => commands::stats::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

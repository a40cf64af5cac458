use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// menuhub - Restaurant menu data access
#[derive(Parser)]
#[command(name = "menuhub")]
#[command(about = "Assemble, export and import partner menus", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Read and copy partner menus
    Menu {
        #[command(subcommand)]
        command: MenuCommands,
    },
}

#[derive(Subcommand)]
enum MenuCommands {
    /// Print the assembled menu of a partner as JSON
    Show {
        #[arg(long)]
        partner: String,

        /// Only this menu
        #[arg(long)]
        menu: Option<i64>,

        /// Order and filter rows for a point of sale
        #[arg(long)]
        pos: bool,
    },
    /// Write a menu export document
    Export {
        #[arg(long)]
        partner: String,

        /// Reporting category group shared with other partners
        #[arg(long)]
        group: Option<i64>,

        /// Output file, stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Upload a menu export document into a partner
    Import {
        #[arg(long)]
        partner: String,

        #[arg(long)]
        group: Option<i64>,

        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menuhub::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menuhub::observability::init_observability(
        "menuhub",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Migrate => menuhub::migrate::migrate(&config).await,
        Commands::Reset => menuhub::migrate::reset(&config).await,
        Commands::Menu { command } => match command {
            MenuCommands::Show { partner, menu, pos } => {
                cli::menu::show(config, partner, menu, pos).await
            }
            MenuCommands::Export {
                partner,
                group,
                out,
            } => cli::menu::export(config, partner, group, out).await,
            MenuCommands::Import {
                partner,
                group,
                file,
            } => cli::menu::import(config, partner, group, file).await,
        },
    }
}

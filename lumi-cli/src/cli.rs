use clap::{Parser, Subcommand};

use crate::{commands, error::CliError};

#[derive(Debug, Parser)]
#[command(name = "lumi")]
#[command(about = "Terminal client for the MKA portfolio and its LUMI assistant")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open an interactive chat with the LUMI assistant
    Chat {
        /// Send a single message and print the reply instead of opening the shell
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Browse the project archives
    Work {
        /// Show one project by id
        #[arg(short, long)]
        id: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the author profile
    About {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show collaboration tracks and contact channels
    Contact {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Chat { message }) => commands::run_chat(message).await,
            Some(Commands::Work { id, format }) => commands::show_work(id, format).await,
            Some(Commands::About { format }) => commands::show_about(format).await,
            Some(Commands::Contact { format }) => commands::show_contact(format).await,
            Some(Commands::Version) => self.handle_version().await,
            None => {
                // No subcommand provided, show help
                println!("lumi - terminal client for the MKA portfolio");
                println!("Run 'lumi --help' for usage information.");
                Ok(())
            }
        }
    }

    async fn handle_version(&self) -> Result<(), CliError> {
        println!("lumi CLI version: {}", env!("CARGO_PKG_VERSION"));
        println!("Author: {}", env!("CARGO_PKG_AUTHORS"));
        println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
        Ok(())
    }
}

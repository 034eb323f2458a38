use clap::{Parser, Subcommand};

use crate::logging::LoggingConfig;

mod push;

#[derive(Debug, Parser)]
#[command(
    name = "shelf",
    about = "Sync product catalogs to Polar",
    version,
    long_about = None,
    arg_required_else_help = true
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sync products to the Polar store and write them to a module
    Push(push::PushArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Push(args) => push::run(args).await,
        }
    }
}

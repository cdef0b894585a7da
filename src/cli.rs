//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shortener - submit a long URL, get a short code, follow it back
#[derive(Parser, Debug)]
#[command(name = "shortener")]
#[command(version)]
#[command(about = "A small URL shortening service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print or write an example configuration file
    GenerateConfig {
        /// Output path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// 未指定子命令时按 serve 处理
    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::GenerateConfig { output, force }) => Commands::GenerateConfig {
                output: output.clone(),
                force: *force,
            },
            Some(Commands::Serve) | None => Commands::Serve,
        }
    }
}

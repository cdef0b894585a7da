use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use shortener::cli::{Cli, Commands};
use shortener::config::{get_config, init_config};
use shortener::errors::ShortenerError;
use shortener::runtime::modes::{run_generate_config, run_server};
use shortener::system::logging::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ShortenerError>() {
                Some(err) => eprintln!("{}", err.format_colored()),
                None => eprintln!("{} {:#}", "[ERROR]".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command() {
        Commands::GenerateConfig { output, force } => {
            run_generate_config(output.as_deref(), force)
        }
        Commands::Serve => {
            init_config()?;
            let config = get_config();
            // guard 必须存活到进程结束，否则缓冲中的日志会丢失
            let _guard = init_logging(&config.logging)?;
            run_server(config).await
        }
    }
}

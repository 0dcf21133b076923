mod args;
mod form;
mod paths;
mod terminal;

use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use gobarber_lib::navigate::NavigationHistory;
use gobarber_lib::{ApiClient, SignUpController};
use simplelog::{Config, WriteLogger};

use crate::args::Args;
use crate::form::Exit;
use crate::terminal::{TerminalAnswers, TerminalNotifier};

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let path = args.log_file.clone().unwrap_or_else(paths::log_file);
    paths::ensure_parent(&path)
        .with_context(|| format!("Failed to create log directory for {}", path.display()))?;
    let log_file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;
    Ok(())
}

async fn run(args: Args) -> anyhow::Result<Exit> {
    init_logging(&args)?;
    log::info!("gobarber-signup against {}", args.api_url);

    let client = ApiClient::builder()
        .url(&args.api_url)
        .timeout(args.timeout())
        .build()
        .with_context(|| format!("Invalid API URL {}", args.api_url))?;

    let history = Arc::new(NavigationHistory::new());
    let controller = SignUpController::new(client, Arc::new(TerminalNotifier), history.clone());

    let mut answers = TerminalAnswers::stdin();
    form::run(&controller, history.as_ref(), &mut answers).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(Exit::Registered | Exit::SignIn) => {
            println!("Continue at the sign-in page.");
            ExitCode::SUCCESS
        }
        Ok(Exit::Abandoned | Exit::EndOfInput) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

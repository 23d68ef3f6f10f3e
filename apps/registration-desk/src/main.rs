mod config;
mod console;
mod logging;

#[cfg(test)]
mod config_test;

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use registration::infra::storage::db;
use registration::{
    FormController, RegistrationRepository, SeaOrmRegistrationRepository, Shop,
};

use crate::config::{AppConfig, CliOverrides};
use crate::console::RegisterInput;

/// Registration desk - collects registrations into a local `SQLite` store
#[derive(Parser)]
#[command(name = "registration-desk")]
#[command(about = "Registration desk - collects registrations into a local SQLite store")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keep the record store in memory (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive registration form
    Run,
    /// Validate configuration, open the store and exit
    Check,
    /// Register one person without the interactive form
    Register(RegisterArgs),
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    surname: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    phone: String,
    /// Shop number (1-11) or name
    #[arg(long)]
    shop: Option<Shop>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (REGDESK__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        verbose: cli.verbose,
        mock: cli.mock,
    });
    let home_dir = config.home_path()?;

    let _log_guard = logging::init_logging(&config.logging, &home_dir)?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_form(&config, &home_dir).await,
        Commands::Check => check_config(&config, &home_dir).await,
        Commands::Register(args) => register(&config, &home_dir, args).await,
    }
}

async fn build_controller(
    config: &AppConfig,
    home_dir: &Path,
) -> Result<FormController<SeaOrmRegistrationRepository>> {
    let conn = db::connect(&config.database, home_dir)
        .await
        .context("failed to open the record store")?;
    let repo = SeaOrmRegistrationRepository::new(conn);
    repo.init()
        .await
        .context("failed to prepare the record store")?;
    tracing::info!(in_memory = config.database.in_memory, "record store ready");
    Ok(FormController::new(Arc::new(repo)))
}

async fn run_form(config: &AppConfig, home_dir: &Path) -> Result<ExitCode> {
    let mut controller = build_controller(config, home_dir).await?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    console::run_session(&mut controller, stdin, &mut stdout).await?;
    Ok(ExitCode::SUCCESS)
}

async fn check_config(config: &AppConfig, home_dir: &Path) -> Result<ExitCode> {
    tracing::info!("Checking configuration...");
    build_controller(config, home_dir).await?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}

async fn register(config: &AppConfig, home_dir: &Path, args: RegisterArgs) -> Result<ExitCode> {
    let mut controller = build_controller(config, home_dir).await?;
    let input = RegisterInput {
        surname: args.surname,
        first_name: args.first_name,
        phone: args.phone,
        shop: args.shop,
    };

    match console::register_once(&mut controller, &input).await {
        Ok(registration) => {
            let mut stdout = std::io::stdout();
            console::print_status(&controller, &mut stdout)?;
            writeln!(stdout, "Registration id: {}", registration.id())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, "registration refused");
            let mut stderr = std::io::stderr();
            console::print_status(&controller, &mut stderr)?;
            if controller.status().text().is_none() {
                writeln!(stderr, "{}", e.to_string().red())?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

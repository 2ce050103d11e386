//! BioShelf inventory CLI.

use chrono::Local;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use bioshelf_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use bioshelf_cli::commands::{
    run_dashboard, run_import, run_inventory, run_remove, run_show, run_types,
};
use bioshelf_cli::logging::{LogConfig, LogFormat, init_logging};
use bioshelf_store::JsonStore;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut store = JsonStore::open(&cli.db)?;
    let today = Local::now().date_naive();
    match &cli.command {
        Command::Import(args) => {
            run_import(&mut store, &args.file, args.dry_run)?;
            Ok(())
        }
        Command::Inventory(args) => run_inventory(&store, args, today),
        Command::Dashboard(args) => run_dashboard(&store, today, args.json),
        Command::Show(args) => run_show(&store, &args.id, args.json, today),
        Command::Remove(args) => run_remove(&mut store, &args.id),
        Command::Types => run_types(&store),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

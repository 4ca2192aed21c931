//! `parkreg` - CLI for the parking registry
//!
//! This binary registers and removes vehicles and prints the resulting table.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use parkreg::cli::{Cli, Command, ConfigCommand, OutputFormatArg};
use parkreg::{init_logging, Config, OutputFormat, Registry, SqliteStorage, SystemClock};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Register(cmd) => {
            let mut registry = open_registry(&config)?;
            registry.register(&cmd.name, &cmd.plate)?;
            print_table(&registry, output_format(&config, cmd.format))
        }
        Command::Remove(cmd) => {
            let mut registry = open_registry(&config)?;
            if !registry.remove(&cmd.plate)? {
                eprintln!("No vehicle with plate {} is registered.", cmd.plate);
            }
            print_table(&registry, output_format(&config, cmd.format))
        }
        Command::List(cmd) => {
            let registry = open_registry(&config)?;
            print_table(&registry, output_format(&config, cmd.format))
        }
        Command::Clear(cmd) => {
            let mut registry = open_registry(&config)?;
            if cmd.yes {
                registry.clear()?;
                println!("All vehicles removed.");
            } else {
                println!(
                    "This will remove all {} registered vehicles.",
                    registry.table().len()
                );
                println!("Use --yes to confirm.");
            }
            Ok(())
        }
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_registry(config: &Config) -> parkreg::Result<Registry<SqliteStorage, SystemClock>> {
    let storage = SqliteStorage::open(config.database_path())?.with_quota(config.quota());
    Registry::open(storage, config.storage.namespace.as_str(), SystemClock)
}

fn output_format(config: &Config, arg: Option<OutputFormatArg>) -> OutputFormat {
    arg.map_or(config.display.format, OutputFormat::from)
}

fn print_table(registry: &Registry<SqliteStorage, SystemClock>, format: OutputFormat) -> CliResult {
    let table = registry.table();
    match format {
        OutputFormat::Table if table.is_empty() => println!("No vehicles registered."),
        OutputFormat::Table => println!("{}", table.to_text_table()),
        OutputFormat::Plain => {
            if !table.is_empty() {
                println!("{}", table.to_plain());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&registry.records()?)?);
        }
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> CliResult {
    let registry = open_registry(config)?;
    let stats = registry.store().storage().stats()?;
    let vehicles = registry.table().len();

    if json {
        let status = serde_json::json!({
            "database_path": config.database_path(),
            "namespace": config.storage.namespace,
            "vehicles": vehicles,
            "stored_bytes": stats.value_bytes,
            "quota_bytes": config.quota(),
            "database_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("parkreg status");
        println!("--------------");
        println!("Database:      {}", config.database_path().display());
        println!("Namespace:     {}", config.storage.namespace);
        println!("Vehicles:      {vehicles}");
        println!("Stored bytes:  {}", stats.value_bytes);
        match config.quota() {
            Some(quota) => println!("Quota:         {quota} bytes"),
            None => println!("Quota:         unlimited"),
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> CliResult {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!("  Namespace:      {}", config.storage.namespace);
                println!("  Quota (bytes):  {}", config.storage.quota_bytes);
                println!();
                println!("[Display]");
                println!("  Format:         {:?}", config.display.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

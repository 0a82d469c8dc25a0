use clap::Parser;
use colored::Colorize;

use gridess::cli::args::{Cli, Commands};
use gridess::cli::commands;
use gridess::config::{Config, Paths};
use gridess::error::GridessError;
use gridess::storage::Database;
use gridess::students::StudentStorage;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GridessError> {
    let cli = Cli::parse();

    let base = Paths::default();
    let config_path = cli.config.clone().unwrap_or_else(|| base.config_file.clone());
    let config = Config::load_from_path(&config_path)?;
    let paths = match cli.db.clone().or_else(|| config.database.clone()) {
        Some(database) => base.with_database(database),
        None => base,
    };

    let format = cli.output.unwrap_or(config.general.default_output);
    let language = config.general.language;

    let output = match cli.command {
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
        command => {
            // The log file lives beside the database, so its directory must exist first.
            paths.ensure_dirs()?;
            gridess::logging::init(&paths.log_file, cli.verbose);
            let storage = open_storage(&paths)?;

            match command {
                Some(Commands::Add(args)) => commands::add(&storage, &args, format)?,
                Some(Commands::List) => commands::list(&storage, language, format)?,
                _ => {
                    gridess::tui::run(&storage, language)?;
                    String::new()
                }
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Open the database, creating the file and schema on first run.
fn open_storage(paths: &Paths) -> Result<StudentStorage, GridessError> {
    let db = Database::open_at(&paths.database)?;
    Ok(StudentStorage::with_database(db))
}

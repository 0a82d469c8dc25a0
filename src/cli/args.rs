use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "gridess")]
#[command(about = "Record student entries into a local SQLite database")]
#[command(long_about = "gridess - a student entry form

Opens a terminal form with Name, Age and Note fields, a Save action and a
read-only transcript of every stored student. Records are kept in
students.db next to the executable.

QUICK START:
  gridess                                  Open the form
  gridess add --name Alice --age 20        Add a record without the form
  gridess list                             Print the transcript

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Database file to use instead of students.db next to the executable
    #[arg(long, env = "GRIDESS_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file to use instead of gridess.yaml next to the executable
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug details to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the entry form (default)
    Ui,

    /// Add a student record
    ///
    /// Applies the same validation as the form: the name must not be blank
    /// and the age, when given, must be a whole number.
    ///
    /// # Examples
    ///
    ///   gridess add --name "Alice" --age 20 --note "Good student"
    ///   gridess add --name "Bob"
    #[command(alias = "a")]
    Add(AddArgs),

    /// Print every stored record in id order
    #[command(alias = "ls")]
    List,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Student name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Age as a whole number; leave out for none
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,

    /// Free-text note
    #[arg(long, default_value = "")]
    pub note: String,
}

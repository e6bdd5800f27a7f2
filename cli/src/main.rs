#![deny(missing_docs)]

//! # Classdoc CLI
//!
//! Runs the introspection engine over a class model dumped by the source
//! parser and prints the result as JSON.
//!
//! Supported Commands:
//! - `fields`: flattened field list of a class.
//! - `enum-sample`: representative value of an enum.
//! - `type-args`: bound type arguments of a field's type.
//! - `groups`: validation groups of a method's parameters.

use classdoc_core::{ClassModel, IntrospectionConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::inspect::Session;

mod error;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Class-model introspection for API docs")]
struct Cli {
    /// Class model dump (JSON or YAML) produced by the source parser.
    #[clap(long, env = "CLASSDOC_MODEL")]
    model: PathBuf,

    /// Optional config file overriding the default lookup tables.
    #[clap(long, env = "CLASSDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[clap(long, default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the flattened field list of a class.
    Fields(inspect::FieldsArgs),
    /// Print a representative value for an enum.
    EnumSample(inspect::EnumSampleArgs),
    /// Print the actual type arguments of a field's type.
    TypeArgs(inspect::TypeArgsArgs),
    /// Print validation groups of a method's parameters.
    Groups(inspect::GroupsArgs),
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => IntrospectionConfig::from_path(path)?,
        None => IntrospectionConfig::default(),
    };
    let model = ClassModel::from_path(&cli.model)?;
    tracing::debug!(classes = model.len(), "cli: model ready");
    let session = Session { model, config };

    let output = match &cli.command {
        Commands::Fields(args) => inspect::fields(&session, args)?,
        Commands::EnumSample(args) => inspect::enum_sample(&session, args)?,
        Commands::TypeArgs(args) => inspect::type_args(&session, args)?,
        Commands::Groups(args) => inspect::groups(&session, args)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::{
    parts::PartsArgs, schema::SchemaArgs, shapes::ShapesArgs, validate::ValidateArgs,
};
use crate::config::INPUT_ENV_VAR;

#[derive(Debug, Parser)]
#[command(
    name = "chatlens",
    version,
    about = "Shape discovery and schema validation for chat archive exports"
)]
pub struct Cli {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct RuntimeArgs {
    /// Export document; defaults to data/chatgpt-export/conversations.json under --cwd.
    #[arg(long, global = true, value_name = "PATH", env = INPUT_ENV_VAR)]
    pub input: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH")]
    pub home_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cluster every object of the export by its key set.
    Shapes(ShapesArgs),
    /// Check the export against its schema.
    Validate(ValidateArgs),
    /// Check each object-valued content part on its own.
    Parts(PartsArgs),
    /// Print the JSON Schema of the typed export model.
    Schema(SchemaArgs),
}

impl Command {
    #[must_use]
    pub const fn emits_json(&self) -> bool {
        match self {
            Self::Shapes(args) => args.json,
            Self::Parts(args) => args.json,
            Self::Schema(_) => true,
            Self::Validate(_) => false,
        }
    }
}

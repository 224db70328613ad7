#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod models;
pub mod schema;
pub mod shapes;
pub mod utils;
pub mod validate;

pub use cli::app::{Cli, Command};

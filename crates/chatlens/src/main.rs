#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chatlens::cli::app::{Cli, Command, RuntimeArgs};
use chatlens::cli::commands;
use chatlens::config::RuntimePaths;
use clap::Parser;
use clap::error::ErrorKind;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME_FAILURE: i32 = 1;
const EXIT_VALIDATION_FAILURE: i32 = 2;
const EXIT_USAGE_ERROR: i32 = 64;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return exit_code_for_parse_error(error),
    };
    init_tracing(cli.runtime.verbose);

    let command_name = command_name(&cli.command);
    let banner = !cli.command.emits_json();
    if banner {
        println!("chatlens: starting `{command_name}`");
    }

    match execute(cli) {
        Ok(()) => {
            if banner {
                println!("chatlens: completed `{command_name}` (exit_code={EXIT_SUCCESS})");
            }
            EXIT_SUCCESS
        }
        Err(error) => {
            let exit_code = classify_runtime_error(&error);
            eprintln!("chatlens: failed `{command_name}` (exit_code={exit_code})");
            eprintln!("{error:#}");
            exit_code
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Shapes(args) => {
            let runtime_paths = resolve_runtime_paths(&cli.runtime)?;
            commands::shapes::run(&args, &runtime_paths)
        }
        Command::Validate(args) => {
            let runtime_paths = resolve_runtime_paths(&cli.runtime)?;
            commands::validate::run(&args, &runtime_paths)
        }
        Command::Parts(args) => {
            let runtime_paths = resolve_runtime_paths(&cli.runtime)?;
            commands::parts::run(&args, &runtime_paths)
        }
        Command::Schema(args) => commands::schema::run(&args),
    }
}

fn classify_runtime_error(error: &anyhow::Error) -> i32 {
    if error
        .downcast_ref::<commands::validate::ValidationCommandFailure>()
        .is_some()
    {
        EXIT_VALIDATION_FAILURE
    } else {
        EXIT_RUNTIME_FAILURE
    }
}

fn exit_code_for_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            EXIT_SUCCESS
        }
        _ => {
            let _ = error.print();
            EXIT_USAGE_ERROR
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Shapes(_) => "shapes",
        Command::Validate(_) => "validate",
        Command::Parts(_) => "parts",
        Command::Schema(_) => "schema",
    }
}

fn resolve_runtime_paths(args: &RuntimeArgs) -> Result<RuntimePaths> {
    let home_dir = match &args.home_dir {
        Some(path) => path.clone(),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("HOME is not set; pass --home-dir"))?,
    };

    let cwd = match &args.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    chatlens::config::resolve_runtime_paths(&home_dir, &cwd, args.input.as_deref())
}

//! wp-scaffold CLI - Turns the WordPress starter kit into a named project

use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wp_scaffold_core::tui::RunArgs;
use wp_scaffold_core::{ProductConfig, ScaffoldError};

/// 10up WordPress starter kit
#[derive(Clone)]
pub struct WpScaffoldConfig;

impl ProductConfig for WpScaffoldConfig {
    fn name(&self) -> &'static str {
        "wp-scaffold"
    }

    fn display_name(&self) -> &'static str {
        "10up WP Scaffold"
    }

    fn cli_description(&self) -> &'static str {
        "Interactive CLI that turns the WordPress starter kit into a new project"
    }
}

#[derive(Parser, Debug)]
#[command(name = "wp-scaffold")]
#[command(version)]
pub struct Args {
    /// Root of the starter kit checkout (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// `RUST_LOG` directives, falling back to warnings only
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    let config = WpScaffoldConfig;
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of a prompt (e.g. while files are being rewritten)
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let run_args = RunArgs {
        root: args.root.unwrap_or_else(|| PathBuf::from(".")),
    };

    let result = wp_scaffold_core::run(&config, run_args);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if ScaffoldError::is_abort(&err) => {
            eprintln!();
            eprintln!("{}", "Aborted. No changes were made.".yellow());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

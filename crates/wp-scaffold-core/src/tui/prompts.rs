//! Charm-style CLI prompts using cliclack

use crate::config::Configuration;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::{templates, workflow};
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// CLI arguments for a scaffolding run
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Root of the starter kit to rewrite
    pub root: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// `Prompter` backed by the terminal
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn select<T: Clone + Eq>(&mut self, message: &str, items: &[(T, &str)]) -> Result<T> {
        let mut select = cliclack::select(message);
        for (value, label) in items {
            select = select.item(value.clone(), *label, "");
        }
        select.interact().map_err(interrupted)
    }

    fn text(&mut self, message: &str, placeholder: &str, required: &str) -> Result<String> {
        let required = required.to_string();
        let value: String = cliclack::input(message)
            .placeholder(placeholder)
            .validate(move |input: &String| {
                if input.trim().is_empty() {
                    Err(required.clone())
                } else {
                    Ok(())
                }
            })
            .interact()
            .map_err(interrupted)?;
        Ok(value)
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        let value: String = cliclack::input(message)
            .default_input(default)
            .required(false)
            .interact()
            .map_err(interrupted)?;
        Ok(value)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        cliclack::confirm(message)
            .initial_value(default)
            .interact()
            .map_err(interrupted)
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        cliclack::note(title, body)?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        cliclack::log::step(title)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// cliclack reports Esc / Ctrl+C as an interrupted read
fn interrupted(err: io::Error) -> anyhow::Error {
    if err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Aborted.into()
    } else {
        err.into()
    }
}

/// Run the CLI with interactive prompts
pub fn run<C: ProductConfig>(product: &C, args: RunArgs) -> Result<()> {
    cliclack::intro(product.display_name())?;

    // Step 1: Ask everything up front; nothing is written before confirmation
    let mut prompter = CliclackPrompter;
    let Some(config) = workflow::prepare(&mut prompter, &args.root)? else {
        cliclack::outro_cancel("Aborted. No changes were made.")?;
        return Ok(());
    };

    // Step 2: Rewrite the tree
    let spinner = cliclack::spinner();
    spinner.start("Applying changes...");

    let report = match templates::apply(product, &args.root, &config) {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Failed to apply changes");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Updated {} of {} files",
        report.substitution.changed, report.substitution.scanned
    ));

    for change in &report.changes {
        cliclack::log::step(change.to_string())?;
    }

    // Step 3: Show next steps
    print_next_steps(product, &config)?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(product: &C, config: &Configuration) -> Result<()> {
    let steps = product.next_steps(config);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Done! Your project has been scaffolded.")?;

    Ok(())
}

//! CLI commands

mod flutter;
mod server;

pub use flutter::FlutterCommand;
pub use server::{ServerCommand, ServerOutput};

use crate::config::FieldgenConfig;
use crate::project;
use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use fieldgen::field::ModelSpec;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

static WROTE: Emoji = Emoji("✓ ", "+ ");
static REGISTERED: Emoji = Emoji("↳ ", "> ");

/// Settings shared by every command of one invocation
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Loaded configuration
    pub config: FieldgenConfig,
    /// Project root given on the command line
    pub root: Option<PathBuf>,
    /// Whether missing inputs may be prompted for
    pub interactive: bool,
}

impl Invocation {
    /// Create an invocation, prompting only when stdin is a terminal
    #[must_use]
    pub fn new(config: FieldgenConfig, root: Option<PathBuf>) -> Self {
        Self {
            config,
            root,
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Project root for a project identified by `marker`
    ///
    /// # Errors
    ///
    /// Returns an error if no root was given and discovery fails.
    pub fn project_root(&self, marker: &str) -> Result<PathBuf> {
        project::resolve(self.root.as_deref(), marker)
    }
}

/// Model name and field spec
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Model name (e.g. `Todo`, `user_profile`)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Field spec (e.g. `title:z,done:b,tags:z[]`)
    #[arg(short, long, value_name = "SPEC")]
    pub fields: Option<String>,
}

impl ModelArgs {
    /// Build the model spec, prompting for missing values when interactive
    ///
    /// # Errors
    ///
    /// Returns an error if prompting fails or the name or spec is empty.
    pub fn resolve(&self, interactive: bool) -> Result<ModelSpec> {
        let name = value_or_prompt(self.name.as_deref(), "Model name", interactive)?;
        let fields = value_or_prompt(
            self.fields.as_deref(),
            "Fields (name:type, comma separated)",
            interactive,
        )?;

        Ok(ModelSpec::from_input(&name, &fields)?)
    }
}

fn value_or_prompt(value: Option<&str>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value.to_string()),
        None if interactive => dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase())),
        None => Ok(String::new()),
    }
}

/// Read source text from `input`, or from stdin when no file is given
fn read_input(input: Option<&Path>, interactive: bool) -> Result<String> {
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if interactive {
        eprintln!(
            "{}",
            style("Paste the source, then press Ctrl-D:").cyan().bold()
        );
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn report_written(path: &Path, description: &str) {
    eprintln!(
        "  {}{} ({})",
        style(WROTE).green(),
        style(path.display()).dim(),
        style(description).dim()
    );
}

fn report_registered(path: &Path, line: &str) {
    eprintln!(
        "  {}{} {}",
        style(REGISTERED).green(),
        style(path.display()).dim(),
        style(line).yellow()
    );
}

//! Flutter client generation

use super::{report_written, Invocation, ModelArgs};
use crate::workspace;
use anyhow::Result;
use clap::Subcommand;
use console::style;
use fieldgen::emit::dart_model;
use fieldgen::naming::Naming;
use std::path::PathBuf;

/// Flutter code generation commands
#[derive(Debug, Clone, Subcommand)]
pub enum FlutterCommand {
    /// Generate a Dart model class in the models directory
    ///
    /// Examples:
    ///   fieldgen flutter model --name Todo --fields title:z,done:b
    ///   fieldgen flutter model -n user_profile -f display_name,tags:z[]
    Model {
        #[command(flatten)]
        model: ModelArgs,
    },
}

impl FlutterCommand {
    /// Execute the command, returning the path of the written file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model name or field spec is empty
    /// - The project root cannot be found
    /// - The model file already exists
    /// - The file cannot be written
    pub fn execute(&self, invocation: &Invocation) -> Result<PathBuf> {
        match self {
            Self::Model { model } => generate_model(model, invocation),
        }
    }
}

fn generate_model(args: &ModelArgs, invocation: &Invocation) -> Result<PathBuf> {
    let spec = args.resolve(invocation.interactive)?;
    let settings = &invocation.config.flutter;
    let root = invocation.project_root(&settings.marker)?;

    eprintln!(
        "\n{} {}",
        style("Generating Dart model:").cyan().bold(),
        style(Naming::to_pascal_case(&spec.name)).green().bold()
    );

    let source = dart_model::render(&spec)?;
    let path = settings.model_path(&root, &Naming::to_module_name(&spec.name));
    workspace::write_new_file(&path, &source, false)?;

    report_written(&path, "model");
    Ok(path)
}

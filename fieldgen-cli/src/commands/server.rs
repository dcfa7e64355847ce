//! Rust server generation
//!
//! # Example
//!
//! ```bash
//! fieldgen server dao --name account --fields email:z,active:b --new-file
//! fieldgen server from-sql --input migrations/0001_accounts/up.sql
//! fieldgen server to-api-type --input src/models.rs
//! ```

use super::{read_input, report_registered, report_written, Invocation, ModelArgs};
use crate::config::ServerSettings;
use crate::workspace::{self, RegistryUpdate};
use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use fieldgen::ddl::extract_model_spec;
use fieldgen::emit::{api_converter, dao, rust_model, DaoMode};
use fieldgen::field::ModelSpec;
use fieldgen::naming::Naming;
use std::path::{Path, PathBuf};

/// Rust server code generation commands
#[derive(Debug, Clone, Subcommand)]
pub enum ServerCommand {
    /// Print a `Queryable` model struct
    Model {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Generate a Data Access Object
    ///
    /// Without `--new-file` the DAO is printed. With it, the DAO is written to
    /// its own module and registered in the crate root and the DAO re-exports.
    Dao {
        #[command(flatten)]
        model: ModelArgs,

        /// Write a standalone `<model>_dao.rs` module
        #[arg(long)]
        new_file: bool,

        /// Overwrite an existing DAO module
        #[arg(long, requires = "new_file")]
        force: bool,
    },

    /// Derive a model struct from a `CREATE TABLE` statement
    ///
    /// The struct is appended to the models file unless `--stdout` is given.
    FromSql {
        /// File with the DDL (default: stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print instead of appending to the models file
        #[arg(long)]
        stdout: bool,
    },

    /// Generate a `ToApiType` impl from a model struct definition
    ToApiType {
        /// File with exactly one `pub struct` (default: stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Result of a server command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerOutput {
    /// Generated source for the caller to print
    Source(String),
    /// Files that were written or updated
    Files(Vec<PathBuf>),
}

impl ServerCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Inputs are empty or cannot be read
    /// - The DDL has no `CREATE TABLE` statement
    /// - The converter input has zero or several structs
    /// - The project root cannot be found
    /// - A generated file cannot be written
    pub fn execute(&self, invocation: &Invocation) -> Result<ServerOutput> {
        match self {
            Self::Model { model } => {
                let spec = model.resolve(invocation.interactive)?;
                Ok(ServerOutput::Source(rust_model::render(&spec)?))
            }
            Self::Dao {
                model,
                new_file,
                force,
            } => {
                let spec = model.resolve(invocation.interactive)?;
                if *new_file {
                    generate_dao_module(&spec, *force, invocation).map(ServerOutput::Files)
                } else {
                    Ok(ServerOutput::Source(dao::render(&spec, DaoMode::Inline)?))
                }
            }
            Self::FromSql { input, stdout } => {
                let ddl = read_input(input.as_deref(), invocation.interactive)?;
                let spec = extract_model_spec(&ddl)?;
                let source = rust_model::render(&spec)?;

                if *stdout {
                    return Ok(ServerOutput::Source(source));
                }

                let settings = &invocation.config.server;
                let root = invocation.project_root(&settings.marker)?;
                let path = settings.models_path(&root);
                workspace::append_to_file(&path, &source)?;

                report_written(&path, &format!("appended {}", Naming::to_pascal_case(&spec.name)));
                Ok(ServerOutput::Files(vec![path]))
            }
            Self::ToApiType { input } => {
                let selection = read_input(input.as_deref(), invocation.interactive)?;
                Ok(ServerOutput::Source(api_converter::render(&selection)?))
            }
        }
    }
}

fn generate_dao_module(
    spec: &ModelSpec,
    force: bool,
    invocation: &Invocation,
) -> Result<Vec<PathBuf>> {
    let settings = &invocation.config.server;
    let root = invocation.project_root(&settings.marker)?;

    eprintln!(
        "\n{} {}",
        style("Generating DAO module for").cyan().bold(),
        style(Naming::to_pascal_case(&spec.name)).green().bold()
    );

    let source = dao::render(spec, DaoMode::NewFile)?;
    let dao_path = settings.dao_path(&root, &Naming::dao_module_name(&spec.name));
    workspace::write_new_file(&dao_path, &source, force)?;
    report_written(&dao_path, "dao");

    let mut files = vec![dao_path.clone()];
    for (path, anchor, line) in registry_edits(settings, &root, &spec.name) {
        // The DAO file stays on disk if a registry update fails
        let update = workspace::upsert_registry(&path, &anchor, &line).with_context(|| {
            format!(
                "DAO written to {} but registering it in {} failed",
                dao_path.display(),
                path.display()
            )
        })?;

        if update == RegistryUpdate::Inserted {
            report_registered(&path, &line);
            files.push(path);
        }
    }

    Ok(files)
}

fn registry_edits(
    settings: &ServerSettings,
    root: &Path,
    model: &str,
) -> [(PathBuf, String, String); 2] {
    let lines = dao::registry_lines(model);
    [
        (
            settings.lib_registry_path(root),
            settings.module_anchor.clone(),
            lines.module_decl,
        ),
        (
            settings.dao_registry_path(root),
            settings.reexport_anchor.clone(),
            lines.reexport,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_edits_follow_settings() {
        let settings = ServerSettings::default();
        let [lib, reexport] = registry_edits(&settings, Path::new("/app"), "account");

        assert_eq!(
            lib,
            (
                PathBuf::from("/app/src/lib.rs"),
                "pub mod".to_string(),
                "pub mod account_dao;".to_string()
            )
        );
        assert_eq!(
            reexport,
            (
                PathBuf::from("/app/src/dao.rs"),
                "pub use".to_string(),
                "pub use crate::account_dao::AccountDao;".to_string()
            )
        );
    }

    #[test]
    fn test_inline_dao_is_returned() {
        let command = ServerCommand::Dao {
            model: ModelArgs {
                name: Some("account".to_string()),
                fields: Some("email:z".to_string()),
            },
            new_file: false,
            force: false,
        };

        let ServerOutput::Source(source) = command.execute(&Invocation::default()).unwrap() else {
            panic!("expected printed source");
        };
        assert!(source.contains("pub struct AccountDao<'a>"));
    }
}

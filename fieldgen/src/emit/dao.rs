//! Data Access Object emitter
//!
//! Generates a diesel `Insertable` record, a DAO struct bound to a
//! connection, and a `create` method whose parameters mirror the fields of
//! the model. The output is meant either to be pasted next to existing code
//! ([`DaoMode::Inline`]) or written as its own module ([`DaoMode::NewFile`]),
//! in which case the module must also be registered in the crate root and
//! the DAO re-export file; see [`registry_lines`].

use super::{model_metadata, templates, TemplateRenderer};
use crate::error::Result;
use crate::field::ModelSpec;
use crate::naming::Naming;

/// Where the generated DAO will live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaoMode {
    /// Snippet for insertion into an existing file
    #[default]
    Inline,
    /// Standalone module with its own header and imports
    NewFile,
}

/// Lines that register a new DAO module with the surrounding crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLines {
    /// Module declaration for the crate root (`pub mod account_dao;`)
    pub module_decl: String,
    /// Re-export for the DAO registry file
    pub reexport: String,
}

/// Render the DAO for `spec`
///
/// The insertable record only gets a lifetime parameter when at least one
/// field is rendered as a borrowed type.
///
/// # Errors
///
/// Returns [`crate::GenError::Render`] if template rendering fails.
pub fn render(spec: &ModelSpec, mode: DaoMode) -> Result<String> {
    tracing::debug!(model = %spec.name, ?mode, "rendering dao");

    let mut metadata = model_metadata(spec);
    metadata["new_file"] = serde_json::Value::Bool(mode == DaoMode::NewFile);

    TemplateRenderer::new().render(templates::DAO, &metadata)
}

/// Registry lines for the DAO module generated for `model`
///
/// # Examples
///
/// ```
/// # use fieldgen::emit::dao::registry_lines;
/// let lines = registry_lines("UserProfile");
/// assert_eq!(lines.module_decl, "pub mod user_profile_dao;");
/// assert_eq!(lines.reexport, "pub use crate::user_profile_dao::UserProfileDao;");
/// ```
#[must_use]
pub fn registry_lines(model: &str) -> RegistryLines {
    let module = Naming::dao_module_name(model);
    let pascal = Naming::to_pascal_case(model);

    RegistryLines {
        module_decl: format!("pub mod {module};"),
        reexport: format!("pub use crate::{module}::{pascal}Dao;"),
    }
}

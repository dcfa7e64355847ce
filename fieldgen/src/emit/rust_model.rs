//! Server-side queryable struct emitter

use super::{model_metadata, templates, TemplateRenderer};
use crate::error::Result;
use crate::field::ModelSpec;

/// Render a `Queryable` Rust struct for `spec`
///
/// Unlike the Dart model no implicit `id` is added: when the struct is
/// derived from DDL, the id column is already part of the spec.
///
/// # Errors
///
/// Returns [`crate::GenError::Render`] if template rendering fails.
pub fn render(spec: &ModelSpec) -> Result<String> {
    tracing::debug!(model = %spec.name, fields = spec.fields.len(), "rendering rust model");
    TemplateRenderer::new().render(templates::RUST_MODEL, &model_metadata(spec))
}

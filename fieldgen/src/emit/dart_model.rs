//! Dart value-object model emitter

use super::{model_metadata, templates, TemplateRenderer};
use crate::error::Result;
use crate::field::ModelSpec;

/// Render an immutable Dart model class for `spec`
///
/// The class always carries a leading `final int id;` in addition to the
/// fields of the spec. Map keys are `snake_case`, Dart members are
/// camelCase.
///
/// # Errors
///
/// Returns [`crate::GenError::Render`] if template rendering fails.
///
/// # Examples
///
/// ```
/// # use fieldgen::field::ModelSpec;
/// # use fieldgen::emit::dart_model;
/// let spec = ModelSpec::from_input("Todo", "title:z,done:b").unwrap();
/// let source = dart_model::render(&spec).unwrap();
/// assert!(source.contains("class Todo extends Equatable {"));
/// assert!(source.contains("  final bool done;"));
/// ```
pub fn render(spec: &ModelSpec) -> Result<String> {
    tracing::debug!(model = %spec.name, fields = spec.fields.len(), "rendering dart model");
    TemplateRenderer::new().render(templates::DART_MODEL, &model_metadata(spec))
}

//! Source emitters
//!
//! Each emitter is a pure function from a [`ModelSpec`] (or, for the API
//! converter, a selected source snippet) to generated text. The templates
//! live in [`templates`]. The per-field metadata they consume is built once
//! here, so every emitter sees the same derived names and the same
//! [`Dialect`] type table.

pub mod api_converter;
pub mod dao;
pub mod dart_model;
pub mod rust_model;
pub mod templates;

pub use dao::DaoMode;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::field::{FieldDescriptor, ModelSpec};
use crate::naming::Naming;
use handlebars::Handlebars;
use serde::Serialize;

/// Handlebars renderer for generated source code
///
/// HTML escaping is disabled: the output is Dart and Rust, where `<`, `&`
/// and `'` are part of ordinary type names.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with escaping disabled
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render `template` against `data`
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenError::Render`] if the template is malformed or a
    /// helper fails.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Template variables shared by the model-driven emitters
fn model_metadata(spec: &ModelSpec) -> serde_json::Value {
    let borrows = spec
        .fields
        .iter()
        .any(|field| Dialect::RustInsertable.borrows(field.type_tag));

    serde_json::json!({
        "name": spec.name,
        "struct_name": Naming::to_pascal_case(&spec.name),
        "module_name": Naming::to_module_name(&spec.name),
        "table_name": Naming::to_table_name(&spec.name),
        "fields": build_field_metadata(&spec.fields),
        "borrows": borrows,
    })
}

fn build_field_metadata(fields: &[FieldDescriptor]) -> Vec<serde_json::Value> {
    fields
        .iter()
        .map(|field| {
            serde_json::json!({
                "name": field.raw_name,
                "snake": Naming::to_snake_case(&field.raw_name),
                "camel": Naming::to_camel_case(&field.raw_name),
                "dart_type": field.type_tag.target_type(Dialect::DartModel),
                "rust_type": field.type_tag.target_type(Dialect::RustModel),
                "insertable_type": field.type_tag.target_type(Dialect::RustInsertable),
                "is_collection": field.is_collection(),
            })
        })
        .collect()
}

//! Model-to-API-type converter emitter
//!
//! Reads a selected Rust struct definition and generates a `ToApiType` impl
//! that copies every `pub` field from the database model into the API type
//! of the same name.

use super::{templates, TemplateRenderer};
use crate::error::{GenError, Result};
use crate::naming::Naming;
use regex::Regex;
use std::sync::LazyLock;

static STRUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*pub struct (\w+)\s*\{").expect("Invalid regex"));

static STRUCT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*pub (\w+): *([a-zA-Z0-9_<>:]*),?").expect("Invalid regex")
});

/// Render a `ToApiType` impl for the single struct in `selection`
///
/// `String` and `Vec` fields are copied with `clone()`, everything else by
/// value.
///
/// # Errors
///
/// - [`GenError::NoStructDefinition`] if `selection` has no `pub struct`
/// - [`GenError::MultipleStructDefinitions`] if it has more than one
/// - [`GenError::Render`] if template rendering fails
///
/// # Examples
///
/// ```
/// # use fieldgen::emit::api_converter;
/// let selection = "pub struct Account {\n    pub id: ID,\n    pub email: String,\n}";
/// let source = api_converter::render(selection).unwrap();
/// assert!(source.contains("            email: self.email.clone(),"));
/// ```
pub fn render(selection: &str) -> Result<String> {
    let mut name: Option<String> = None;
    let mut fields = Vec::new();

    for line in selection.lines() {
        if let Some(caps) = STRUCT_NAME.captures(line) {
            if let Some(first) = &name {
                return Err(GenError::MultipleStructDefinitions {
                    first: first.clone(),
                    second: caps[1].to_string(),
                });
            }
            name = Some(caps[1].to_string());
            continue;
        }

        if name.is_none() {
            continue;
        }

        if let Some(caps) = STRUCT_FIELD.captures(line) {
            let field = &caps[1];
            fields.push(serde_json::json!({
                "name": field,
                "expr": copy_expression(field, caps[2].trim()),
            }));
        }
    }

    let name = name.ok_or(GenError::NoStructDefinition)?;
    tracing::debug!(%name, fields = fields.len(), "rendering api converter");

    TemplateRenderer::new().render(
        templates::API_CONVERTER,
        &serde_json::json!({
            "struct_name": Naming::to_pascal_case(&name),
            "fields": fields,
        }),
    )
}

fn copy_expression(field: &str, ty: &str) -> String {
    if ty == "String" || ty.starts_with("Vec") {
        format!("self.{field}.clone()")
    } else {
        format!("self.{field}")
    }
}

//! Field descriptor parser and model data types
//!
//! A field spec is a comma-separated list of `name[:code]` entries. The type
//! code selects one of a fixed set of abstract types; every emitter maps that
//! abstract type to its own target language through [`crate::dialect`].
//!
//! # Type Codes
//!
//! | code | type | collection |
//! |------|------|------------|
//! | `id` | identifier | no |
//! | `z` | text (default) | no |
//! | `b` | boolean | no |
//! | `dt` | date-time | no |
//! | `i`, `i32` | 32-bit integer | no |
//! | `i64` | 64-bit integer | no |
//! | `d` | float | no |
//! | `z[]` | text list | yes |
//! | `i[]`, `i32[]` | 32-bit integer list | yes |
//! | `i64[]` | 64-bit integer list | yes |
//! | `b[]` | boolean list | yes |
//!
//! Parsing is deliberately permissive: an unknown code becomes text and a
//! missing code defaults to text. Duplicate names are kept.
//!
//! # Examples
//!
//! ```text
//! name:z,age:i,active:b,tags:z[]
//! title,done:b              → title is text
//! price:money               → price is text (unknown code)
//! ```

use crate::error::{GenError, Result};
use std::fmt;

/// Abstract field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Primary or foreign key identifier
    Id,
    /// Text
    Text,
    /// Boolean
    Bool,
    /// Date-time
    DateTime,
    /// 32-bit integer
    Int32,
    /// 64-bit integer
    Int64,
    /// Floating point
    Float,
    /// Ordered text collection
    TextArray,
    /// Ordered 32-bit integer collection
    Int32Array,
    /// Ordered 64-bit integer collection
    Int64Array,
    /// Ordered boolean collection
    BoolArray,
}

impl TypeTag {
    /// Every type tag, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Id,
        Self::Text,
        Self::Bool,
        Self::DateTime,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::TextArray,
        Self::Int32Array,
        Self::Int64Array,
        Self::BoolArray,
    ];

    /// Resolve a type code, falling back to [`TypeTag::Text`] for anything
    /// unrecognized
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::field::TypeTag;
    /// assert_eq!(TypeTag::from_code("i64"), TypeTag::Int64);
    /// assert_eq!(TypeTag::from_code("i[]"), TypeTag::Int32Array);
    /// assert_eq!(TypeTag::from_code("bogus"), TypeTag::Text);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "id" => Self::Id,
            "z" => Self::Text,
            "b" => Self::Bool,
            "dt" => Self::DateTime,
            "i" | "i32" => Self::Int32,
            "i64" => Self::Int64,
            "d" => Self::Float,
            "z[]" => Self::TextArray,
            "i[]" | "i32[]" => Self::Int32Array,
            "i64[]" => Self::Int64Array,
            "b[]" => Self::BoolArray,
            unknown => {
                tracing::debug!(code = unknown, "unrecognized type code, using text");
                Self::Text
            }
        }
    }

    /// Canonical short code for this tag
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Text => "z",
            Self::Bool => "b",
            Self::DateTime => "dt",
            Self::Int32 => "i",
            Self::Int64 => "i64",
            Self::Float => "d",
            Self::TextArray => "z[]",
            Self::Int32Array => "i[]",
            Self::Int64Array => "i64[]",
            Self::BoolArray => "b[]",
        }
    }

    /// Whether values of this type are ordered collections
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            Self::TextArray | Self::Int32Array | Self::Int64Array | Self::BoolArray
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parsed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name as written by the user or extracted from SQL, not case-normalized
    pub raw_name: String,
    /// Resolved abstract type
    pub type_tag: TypeTag,
}

impl FieldDescriptor {
    /// Create a descriptor
    pub fn new(raw_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            raw_name: raw_name.into(),
            type_tag,
        }
    }

    /// Parse a single `name[:code]` entry
    ///
    /// The entry is split on the first `:`; without one the type defaults to
    /// text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::field::{FieldDescriptor, TypeTag};
    /// let field = FieldDescriptor::parse("tags:z[]");
    /// assert_eq!(field.raw_name, "tags");
    /// assert!(field.is_collection());
    ///
    /// let field = FieldDescriptor::parse("title");
    /// assert_eq!(field.type_tag, TypeTag::Text);
    /// ```
    #[must_use]
    pub fn parse(entry: &str) -> Self {
        let entry = entry.trim();
        let (name, code) = entry.split_once(':').unwrap_or((entry, "z"));
        Self::new(name.trim(), TypeTag::from_code(code.trim()))
    }

    /// Whether this field holds an ordered collection
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.type_tag.is_collection()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.raw_name;
        let tag = self.type_tag;
        write!(f, "{name}:{tag}")
    }
}

/// Parse a comma-separated field spec, preserving input order
///
/// Blank entries are skipped, so an empty spec yields no descriptors.
/// Duplicate names are not rejected.
///
/// # Examples
///
/// ```
/// # use fieldgen::field::{parse_fields, TypeTag};
/// let fields = parse_fields("name:z,age:i,active:b");
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields[1].type_tag, TypeTag::Int32);
/// assert!(parse_fields("").is_empty());
/// ```
#[must_use]
pub fn parse_fields(spec: &str) -> Vec<FieldDescriptor> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(FieldDescriptor::parse)
        .collect()
}

/// Entity-level input to every emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    /// Model name as given, not case-normalized
    pub name: String,
    /// Fields in input order
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSpec {
    /// Create a model spec from already-parsed fields
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Build a model spec from raw user input
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptyInput`] if the name is blank or the spec
    /// contains no field entries.
    pub fn from_input(name: &str, spec: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GenError::EmptyInput("model name"));
        }

        let fields = parse_fields(spec);
        if fields.is_empty() {
            return Err(GenError::EmptyInput("field spec"));
        }

        Ok(Self::new(name, fields))
    }

    /// Canonical comma-separated spec for the fields
    #[must_use]
    pub fn field_spec(&self) -> String {
        self.fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_entries() {
        let fields = parse_fields("name:z,age:i,active:b");
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("name", TypeTag::Text),
                FieldDescriptor::new("age", TypeTag::Int32),
                FieldDescriptor::new("active", TypeTag::Bool),
            ]
        );
    }

    #[test]
    fn test_parse_default_type() {
        let field = FieldDescriptor::parse("title");
        assert_eq!(field.raw_name, "title");
        assert_eq!(field.type_tag, TypeTag::Text);
    }

    #[test]
    fn test_parse_unknown_code_falls_back_to_text() {
        let fields = parse_fields("foo:bogus");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].type_tag, TypeTag::Text);
        assert_eq!(fields[0].raw_name, "foo");
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let field = FieldDescriptor::parse("weird:i:extra");
        assert_eq!(field.raw_name, "weird");
        assert_eq!(field.type_tag, TypeTag::Text);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let fields = parse_fields("  title : z ,  tags :z[] ");
        assert_eq!(fields[0], FieldDescriptor::new("title", TypeTag::Text));
        assert_eq!(fields[1], FieldDescriptor::new("tags", TypeTag::TextArray));
    }

    #[test]
    fn test_parse_all_codes() {
        let cases = [
            ("id", TypeTag::Id),
            ("z", TypeTag::Text),
            ("b", TypeTag::Bool),
            ("dt", TypeTag::DateTime),
            ("i", TypeTag::Int32),
            ("i32", TypeTag::Int32),
            ("i64", TypeTag::Int64),
            ("d", TypeTag::Float),
            ("z[]", TypeTag::TextArray),
            ("i[]", TypeTag::Int32Array),
            ("i32[]", TypeTag::Int32Array),
            ("i64[]", TypeTag::Int64Array),
            ("b[]", TypeTag::BoolArray),
        ];

        for (code, expected) in cases {
            assert_eq!(TypeTag::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_collection_flag() {
        let collections: Vec<_> = TypeTag::ALL
            .into_iter()
            .filter(|tag| tag.is_collection())
            .collect();
        assert_eq!(
            collections,
            vec![
                TypeTag::TextArray,
                TypeTag::Int32Array,
                TypeTag::Int64Array,
                TypeTag::BoolArray
            ]
        );
    }

    #[test]
    fn test_code_round_trips_through_parser() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_code(tag.code()), tag);
        }
    }

    #[test]
    fn test_empty_spec() {
        assert!(parse_fields("").is_empty());
        assert!(parse_fields(" , ,").is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let fields = parse_fields("num:i,num:i64");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].raw_name, fields[1].raw_name);
        assert_eq!(fields[1].type_tag, TypeTag::Int64);
    }

    #[test]
    fn test_model_spec_from_input() {
        let spec = ModelSpec::from_input(" Todo ", "title:z,done:b").unwrap();
        assert_eq!(spec.name, "Todo");
        assert_eq!(spec.fields.len(), 2);
        assert_eq!(spec.field_spec(), "title:z,done:b");
    }

    #[test]
    fn test_model_spec_rejects_empty_input() {
        assert!(matches!(
            ModelSpec::from_input("", "title:z"),
            Err(GenError::EmptyInput("model name"))
        ));
        assert!(matches!(
            ModelSpec::from_input("Todo", "  "),
            Err(GenError::EmptyInput("field spec"))
        ));
    }

    #[test]
    fn test_display() {
        let field = FieldDescriptor::parse("created_at:dt");
        assert_eq!(field.to_string(), "created_at:dt");
        assert_eq!(FieldDescriptor::parse("n:i32").to_string(), "n:i");
    }
}

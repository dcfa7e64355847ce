//! Target-language type tables
//!
//! Each emitter renders field types through exactly one [`Dialect`]. Keeping
//! one exhaustive `match` per dialect means a new [`TypeTag`] cannot compile
//! until every table knows about it.

use crate::field::TypeTag;

/// Target type system of an emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Dart value-object model
    DartModel,
    /// Server-side queryable struct with owned types
    RustModel,
    /// Insertable record and `create` parameters with borrowed strings
    RustInsertable,
}

impl Dialect {
    /// Every dialect
    pub const ALL: [Self; 3] = [Self::DartModel, Self::RustModel, Self::RustInsertable];

    /// Whether the rendered type for `tag` borrows with lifetime `'a`
    #[must_use]
    pub const fn borrows(self, tag: TypeTag) -> bool {
        matches!(
            (self, tag),
            (Self::RustInsertable, TypeTag::Text | TypeTag::TextArray)
        )
    }
}

impl TypeTag {
    /// Concrete type name for this tag in `dialect`
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::dialect::Dialect;
    /// # use fieldgen::field::TypeTag;
    /// assert_eq!(TypeTag::Int64.target_type(Dialect::DartModel), "int");
    /// assert_eq!(TypeTag::Int64.target_type(Dialect::RustModel), "i64");
    /// assert_eq!(TypeTag::Text.target_type(Dialect::RustInsertable), "&'a str");
    /// ```
    #[must_use]
    pub const fn target_type(self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::DartModel => self.dart_type(),
            Dialect::RustModel => self.rust_model_type(),
            Dialect::RustInsertable => self.rust_insertable_type(),
        }
    }

    const fn dart_type(self) -> &'static str {
        match self {
            Self::Id | Self::Int32 | Self::Int64 => "int",
            Self::Text | Self::DateTime => "String",
            Self::Bool => "bool",
            Self::Float => "double",
            Self::TextArray => "List<String>",
            Self::Int32Array | Self::Int64Array => "List<int>",
            Self::BoolArray => "List<bool>",
        }
    }

    const fn rust_model_type(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Text => "String",
            Self::Bool => "bool",
            Self::DateTime => "NaiveDateTime",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float => "f64",
            Self::TextArray => "Vec<String>",
            Self::Int32Array => "Vec<i32>",
            Self::Int64Array => "Vec<i64>",
            Self::BoolArray => "Vec<bool>",
        }
    }

    const fn rust_insertable_type(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Text => "&'a str",
            Self::Bool => "bool",
            Self::DateTime => "NaiveDateTime",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float => "f64",
            Self::TextArray => "&'a Vec<String>",
            Self::Int32Array => "Vec<i32>",
            Self::Int64Array => "Vec<i64>",
            Self::BoolArray => "Vec<bool>",
        }
    }
}

//! fieldgen: field-spec compiler for model and data-access boilerplate
//!
//! Turns a terse field list such as `name:z,age:i,active:b` (or a SQL
//! `CREATE TABLE` statement) into source code for a Flutter client and a
//! diesel-backed Rust server:
//! - Dart immutable value-object models
//! - Rust `Queryable` structs
//! - Data Access Objects with an `Insertable` record and a `create` method
//! - `ToApiType` converters from database models to API types
//!
//! # Design Principles
//!
//! 1. **Pure Core**: parsing, extraction and emission never touch the file
//!    system; callers own all I/O
//! 2. **One Type Table**: every emitter maps [`field::TypeTag`] through
//!    [`dialect::Dialect`], so targets cannot drift apart
//! 3. **Idempotent Edits**: registry updates are string transformations that
//!    are no-ops when repeated
//!
//! # Quick Start
//!
//! ```rust
//! use fieldgen::prelude::*;
//!
//! let spec = ModelSpec::from_input("Todo", "title:z,done:b")?;
//! let dart = dart_model::render(&spec)?;
//! assert!(dart.contains("class Todo extends Equatable"));
//!
//! let dao = dao::render(&spec, DaoMode::NewFile)?;
//! assert!(dao.contains("pub struct TodoDao<'a>"));
//! # Ok::<(), fieldgen::GenError>(())
//! ```

pub mod ddl;
pub mod dialect;
pub mod emit;
pub mod error;
pub mod field;
pub mod naming;
pub mod registry;

pub use error::{GenError, Result};

pub mod prelude {
    //! Convenience re-exports for common types and functions

    pub use crate::ddl::extract_model_spec;
    pub use crate::dialect::Dialect;
    pub use crate::emit::{api_converter, dao, dart_model, rust_model, DaoMode};
    pub use crate::error::{GenError, Result};
    pub use crate::field::{parse_fields, FieldDescriptor, ModelSpec, TypeTag};
    pub use crate::naming::Naming;
    pub use crate::registry::upsert_line_after_anchor;
}

//! fieldgen CLI library
//!
//! Owns everything the pure `fieldgen` core does not: configuration,
//! project discovery, prompts and file writes.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod observability;
pub mod project;
pub mod workspace;

pub use commands::{FlutterCommand, Invocation, ModelArgs, ServerCommand, ServerOutput};
pub use config::FieldgenConfig;

//! Schema combinators and argument validation.
//!
//! This crate is intended to be used by:
//! - `larkmcp-tools` (endpoint descriptor schema bundles)
//! - `larkmcp-cli` (example payloads + ad-hoc validation)
//!
//! Schemas are plain data: they describe a shape, emit JSON Schema for MCP clients, and are
//! compiled into a [`SchemaValidator`] that reports every violation at once.

pub mod schema;
pub mod validate;

pub use schema::{
    Schema, SchemaKind, any, array, boolean, enumeration, integer, number, object, string, union,
};
pub use validate::{SchemaError, SchemaValidator, Violation};

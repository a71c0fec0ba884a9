//! # nb-schema
//!
//! JSON Schema generation, payload validation, and registry for Nodebucket.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the request and response schemas
//! - `ValidationReport`: a structured list of violations (instance path + rule)
//! - Schema export for the `nbk schema` command
//!
//! ## Architecture
//!
//! Contract types are defined in `nb-core` with `#[derive(JsonSchema)]`.
//! This crate compiles those schemas once and validates untyped JSON bodies
//! against them before the endpoints deserialize anything.

mod error;
mod registry;
mod report;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, TASK_CREATE, TASK_LISTS};
pub use report::{ValidationReport, Violation};

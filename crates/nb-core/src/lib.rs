//! # nb-core
//!
//! Core types, ID generation, and error types for Nodebucket.
//!
//! This crate provides the foundational types shared across all Nodebucket crates:
//! - Entity structs for the employee document and its tasks
//! - Request contracts for task creation and task-list replacement
//! - Response shapes, including the JSON error envelope
//! - Task list enum and task ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod requests;
pub mod responses;

//! # API Shared
//!
//! Shared definitions for the SALTGUARD APIs.
//!
//! Contains:
//! - Request/response wire types with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace binaries.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;

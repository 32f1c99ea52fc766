//! Lookup vocabularies.
//!
//! Read-only endpoints for the classification tables and the location
//! hierarchy. Values are maintained by administrators through the CLI, not
//! through the API.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

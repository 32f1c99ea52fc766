//! Institutions module.
//!
//! Accredited educational bodies: CRUD, the selection sets linking an
//! institution to adopted courses and criteria, and the append-only review
//! audit trail written by legislators.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

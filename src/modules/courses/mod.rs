//! Courses module.
//!
//! Taught units within a major. Creation accepts one record or an ordered
//! batch; each record names its owning faculty and major, and the whole
//! request either persists completely or not at all.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

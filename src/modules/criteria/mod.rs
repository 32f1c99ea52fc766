//! Criteria module.
//!
//! The three-level accreditation rule hierarchy: faculty- and course-level
//! criteria belong directly to a legislator, major-level criteria hang off
//! a parent faculty criterion. Every operation is scoped to the requesting
//! legislator's own records.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;

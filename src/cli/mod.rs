//! Administrative commands.
//!
//! Lookup vocabularies (locations and classification labels) are managed by
//! administrators, not through the API; the seeder loads a starter set.

pub mod seeder;

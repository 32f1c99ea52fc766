pub mod auth;
pub mod courses;
pub mod criteria;
pub mod faculties;
pub mod institutions;
pub mod legislators;
pub mod lookups;
pub mod majors;
pub mod programs;

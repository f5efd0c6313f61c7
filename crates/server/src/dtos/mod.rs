pub mod admissions;
pub mod student;

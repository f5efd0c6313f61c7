pub mod admissions;
pub mod health;
pub mod root;
pub mod student;

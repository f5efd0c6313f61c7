pub mod applicant;
pub mod catalog;
pub mod validation;

//! Headless enrollment form: field state, validation, derived course state,
//! and submission to the registration endpoint.

pub mod controller;
pub mod input;
pub mod submit;

pub use controller::{EnrollmentForm, FormError, Rank, Submission};
pub use submit::{AdmissionsStatus, Notice, SubmitClient, SubmitError};

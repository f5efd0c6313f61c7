use crate::config::Admissions;
use sea_orm::DatabaseConnection;

/// Shared by every handler; holds no mutable state of its own
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admissions: Admissions,
}

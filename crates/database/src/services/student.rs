use crate::entities::student;
use chrono::Utc;
use log::{info, warn};
use models::applicant::{Applicant, StudentRecord};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr,
};

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(StudentRecord),
    /// A record with the same email already exists
    AlreadyRegistered,
}

pub struct StudentService;

impl StudentService {
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        applicant: Applicant,
    ) -> Result<StudentRecord, DbErr> {
        let model = student::ActiveModel::from_applicant(applicant, Utc::now())?
            .insert(db)
            .await?;

        model.into_record()
    }

    /// Registers `applicant` unless their email is already on file
    ///
    /// The lookup and the insert are separate statements. Two concurrent
    /// submissions with the same email can both pass the lookup; the unique
    /// index on `students.email` rejects the second insert, which is reported
    /// as [`Registration::AlreadyRegistered`].
    pub async fn register(
        db: &DatabaseConnection,
        applicant: Applicant,
    ) -> Result<Registration, DbErr> {
        if Self::find_by_email(db, &applicant.email).await?.is_some() {
            warn!("Rejected duplicate registration for {}", applicant.email);
            return Ok(Registration::AlreadyRegistered);
        }

        let email = applicant.email.clone();
        match Self::insert(db, applicant).await {
            Ok(record) => {
                info!("Registered student {} ({email})", record.id);
                Ok(Registration::Created(record))
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                warn!("Concurrent duplicate registration for {email}");
                Ok(Registration::AlreadyRegistered)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        student::Entity::find().count(db).await
    }
}

use models::{
    applicant::{Applicant, StudentRecord},
    catalog::{Course, Slot},
};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub father_name: String,
    pub father_number: String,
    pub cnic: String,
    pub qualification: String, // MS, BS, FA, FSC, Matric
    pub gender: String,
    pub phone: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub city: String,
    pub birth_date: Date,
    pub courses: Json, // ["Web App Development", ...]
    pub priority1: Option<String>,
    pub priority2: Option<String>,
    pub course_slots: Json, // {"Web App Development": "Morning"}
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Builds a fresh row for `applicant`, stamped with `now`
    pub fn from_applicant(applicant: Applicant, now: DateTimeUtc) -> Result<Self, DbErr> {
        let courses = serde_json::to_value(&applicant.courses)
            .map_err(|e| DbErr::Type(format!("Failed to serialize courses: {e}")))?;
        let course_slots = serde_json::to_value(&applicant.course_slots)
            .map_err(|e| DbErr::Type(format!("Failed to serialize course slots: {e}")))?;

        Ok(Self {
            id: Set(Uuid::new_v4()),
            name: Set(applicant.name),
            father_name: Set(applicant.father_name),
            father_number: Set(applicant.father_number),
            cnic: Set(applicant.cnic),
            qualification: Set(applicant.qualification.to_string()),
            gender: Set(applicant.gender.to_string()),
            phone: Set(applicant.phone),
            email: Set(applicant.email),
            address: Set(applicant.address),
            city: Set(applicant.city),
            birth_date: Set(applicant.birth_date),
            courses: Set(courses),
            priority1: Set(applicant.priority1.map(|c| c.to_string())),
            priority2: Set(applicant.priority2.map(|c| c.to_string())),
            course_slots: Set(course_slots),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

impl Model {
    /// Converts a stored row back into the domain record
    pub fn into_record(self) -> Result<StudentRecord, DbErr> {
        let courses: Vec<Course> = serde_json::from_value(self.courses)
            .map_err(|e| DbErr::Type(format!("Failed to deserialize courses: {e}")))?;
        let course_slots: BTreeMap<Course, Slot> = serde_json::from_value(self.course_slots)
            .map_err(|e| DbErr::Type(format!("Failed to deserialize course slots: {e}")))?;

        Ok(StudentRecord {
            id: self.id,
            applicant: Applicant {
                name: self.name,
                father_name: self.father_name,
                father_number: self.father_number,
                cnic: self.cnic,
                qualification: parse_column("qualification", &self.qualification)?,
                gender: parse_column("gender", &self.gender)?,
                phone: self.phone,
                email: self.email,
                address: self.address,
                city: self.city,
                birth_date: self.birth_date,
                courses,
                priority1: self
                    .priority1
                    .as_deref()
                    .map(|c| parse_column("priority1", c))
                    .transpose()?,
                priority2: self
                    .priority2
                    .as_deref()
                    .map(|c| parse_column("priority2", c))
                    .transpose()?,
                course_slots,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn parse_column<T: FromStr>(column: &str, value: &str) -> Result<T, DbErr> {
    T::from_str(value)
        .map_err(|_| DbErr::Type(format!("Unexpected value {value:?} in column {column}")))
}


use crate::catalog::{Course, Gender, Qualification, Slot};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{collections::BTreeMap, str::FromStr};
use uuid::Uuid;

/// One enrollment submission, as posted by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    /// Father or guardian
    pub father_name: String,
    pub father_number: String,
    /// National ID, e.g. `14242-4466754-9`
    pub cnic: String,
    pub qualification: Qualification,
    pub gender: Gender,
    pub phone: String,
    /// Unique per applicant
    pub email: String,
    pub address: String,
    #[serde(alias = "district")]
    pub city: String,
    pub birth_date: NaiveDate,
    /// One or two courses, in the order they were picked
    pub courses: Vec<Course>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority1: Option<Course>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority2: Option<Course>,
    #[serde(default)]
    pub course_slots: BTreeMap<Course, Slot>,
}

/// An applicant as stored, with its identifier and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub applicant: Applicant,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The form sends unpicked selects as `""`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(title) => Course::from_str(title)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("unknown course `{title}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Ali Khan",
            "fatherName": "Imran Khan",
            "fatherNumber": "+923001234567",
            "cnic": "14242-4466754-9",
            "qualification": "BS",
            "gender": "Male",
            "phone": "+923331234567",
            "email": "ali@x.com",
            "address": "House 12, Street 4, Gulberg",
            "city": "Lahore",
            "birthDate": "2001-04-15",
            "courses": ["Web App Development"]
        })
    }

    #[test]
    fn test_deserialize_single_course() {
        let applicant: Applicant = serde_json::from_value(payload()).unwrap();
        assert_eq!(applicant.courses, vec![Course::WebAppDevelopment]);
        assert_eq!(applicant.qualification, Qualification::Bs);
        assert_eq!(applicant.priority1, None);
        assert!(applicant.course_slots.is_empty());
    }

    #[test]
    fn test_district_alias_and_empty_priorities() {
        let mut value = payload();
        let obj = value.as_object_mut().unwrap();
        obj.remove("city");
        obj.insert("district".into(), json!("Kohat"));
        obj.insert("priority1".into(), json!(""));
        obj.insert("priority2".into(), json!(""));

        let applicant: Applicant = serde_json::from_value(value).unwrap();
        assert_eq!(applicant.city, "Kohat");
        assert_eq!(applicant.priority1, None);
        assert_eq!(applicant.priority2, None);
    }

    #[test]
    fn test_unknown_course_rejected() {
        let mut value = payload();
        value["priority1"] = json!("Power BI");
        assert!(serde_json::from_value::<Applicant>(value).is_err());

        let mut value = payload();
        value["courses"] = json!(["Power BI"]);
        assert!(serde_json::from_value::<Applicant>(value).is_err());
    }

    #[test]
    fn test_serialize_uses_form_keys() {
        let mut applicant: Applicant = serde_json::from_value(payload()).unwrap();
        applicant
            .course_slots
            .insert(Course::WebAppDevelopment, Slot::Evening);

        let value = serde_json::to_value(&applicant).unwrap();
        assert_eq!(value["fatherNumber"], "+923001234567");
        assert_eq!(value["birthDate"], "2001-04-15");
        assert_eq!(value["courseSlots"]["Web App Development"], "Evening");
    }

    #[test]
    fn test_record_flattens_applicant() {
        let applicant: Applicant = serde_json::from_value(payload()).unwrap();
        let now = Utc::now();
        let record = StudentRecord {
            id: Uuid::new_v4(),
            applicant,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Ali Khan");
        assert!(value.get("applicant").is_none());
        assert!(value.get("createdAt").is_some());
    }
}

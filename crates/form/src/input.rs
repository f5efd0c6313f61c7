use crate::controller::{EnrollmentForm, FormError, Rank};
use models::{
    catalog::{Course, Slot},
    validation::Field,
};
use serde::Deserialize;
use std::{collections::BTreeMap, str::FromStr};

/// Raw answers for a form, as a user would type and click them
///
/// Uses the same keys as the JSON payload, e.g.
/// `{"name": "Ali Khan", "courses": ["Web App Development"]}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub father_number: String,
    #[serde(default)]
    pub cnic: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, alias = "district")]
    pub city: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub priority1: Option<String>,
    #[serde(default)]
    pub priority2: Option<String>,
    #[serde(default)]
    pub course_slots: BTreeMap<String, String>,
}

impl FormInput {
    /// Replays the answers onto `form` through its regular interactions
    ///
    /// Stops at the first interaction the form refuses, such as a third course.
    pub fn apply(&self, form: &mut EnrollmentForm) -> Result<(), FormError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::FatherName, &self.father_name),
            (Field::FatherNumber, &self.father_number),
            (Field::Cnic, &self.cnic),
            (Field::Qualification, &self.qualification),
            (Field::Gender, &self.gender),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
            (Field::Address, &self.address),
            (Field::City, &self.city),
            (Field::BirthDate, &self.birth_date),
        ] {
            form.set_field(field, value.as_str())?;
        }

        for title in &self.courses {
            let course = parse_course(title)?;
            if !form.is_selected(course) {
                form.toggle_course(course)?;
            }
        }

        for (rank, title) in [
            (Rank::First, &self.priority1),
            (Rank::Second, &self.priority2),
        ] {
            if let Some(title) = title.as_deref().filter(|t| !t.trim().is_empty()) {
                form.set_priority(rank, parse_course(title)?)?;
            }
        }

        for (title, slot) in &self.course_slots {
            let slot =
                Slot::from_str(slot.trim()).map_err(|_| FormError::UnknownSlot(slot.clone()))?;
            form.set_slot(parse_course(title)?, slot)?;
        }

        Ok(())
    }
}

fn parse_course(title: &str) -> Result<Course, FormError> {
    Course::from_str(title.trim()).map_err(|_| FormError::UnknownCourse(title.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(json: serde_json::Value) -> FormInput {
        serde_json::from_value(json).unwrap()
    }

    fn base() -> serde_json::Value {
        serde_json::json!({
            "name": "Sara Ahmed",
            "fatherName": "Ahmed Raza",
            "fatherNumber": "+923001234567",
            "cnic": "14242-4466754-9",
            "qualification": "FSC",
            "gender": "Female",
            "phone": "+923331234567",
            "email": "sara@x.com",
            "address": "Flat 3, Block B, Hayatabad",
            "district": "Peshawar",
            "birthDate": "2003-11-02",
            "courses": ["Graphic Designing", "Digital Marketing & SEO"],
            "priority1": "Digital Marketing & SEO",
            "priority2": "Graphic Designing",
            "courseSlots": { "Graphic Designing": "Morning" }
        })
    }

    #[test]
    fn test_apply_full_input() {
        let mut form = EnrollmentForm::new();
        input(base()).apply(&mut form).unwrap();

        assert!(form.shows_priorities());
        assert_eq!(form.slot(Course::GraphicDesign), Some(Slot::Morning));

        let applicant = form
            .validate(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
            .unwrap();
        assert_eq!(applicant.city, "Peshawar");
        assert_eq!(applicant.priority1, Some(Course::DigitalMarketing));
    }

    #[test]
    fn test_apply_rejects_third_course() {
        let mut json = base();
        json["courses"] = serde_json::json!([
            "Graphic Designing",
            "Digital Marketing & SEO",
            "Mobile Development"
        ]);

        let mut form = EnrollmentForm::new();
        assert_eq!(
            input(json).apply(&mut form),
            Err(FormError::TooManyCourses)
        );
    }

    #[test]
    fn test_apply_rejects_unknown_values() {
        let mut json = base();
        json["courses"] = serde_json::json!(["Power BI"]);
        assert_eq!(
            input(json).apply(&mut EnrollmentForm::new()),
            Err(FormError::UnknownCourse("Power BI".into()))
        );

        let mut json = base();
        json["courseSlots"] = serde_json::json!({ "Graphic Designing": "Night" });
        assert_eq!(
            input(json).apply(&mut EnrollmentForm::new()),
            Err(FormError::UnknownSlot("Night".into()))
        );
    }

    #[test]
    fn test_blank_priorities_are_skipped() {
        let mut json = base();
        json["courses"] = serde_json::json!(["Graphic Designing"]);
        json["priority1"] = serde_json::json!("");
        json["priority2"] = serde_json::json!("");
        json["courseSlots"] = serde_json::json!({});

        let mut form = EnrollmentForm::new();
        input(json).apply(&mut form).unwrap();
        assert!(!form.shows_priorities());
    }
}

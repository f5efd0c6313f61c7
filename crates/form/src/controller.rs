use crate::submit::{Notice, SubmitClient};
use chrono::{Local, NaiveDate};
use log::debug;
use models::{
    applicant::Applicant,
    catalog::{Course, Slot},
    validation::{self, Field, ValidationErrors},
};
use std::collections::BTreeMap;

/// Interactions the form refuses outright
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("at most {} courses can be selected", Course::MAX_SELECTED)]
    TooManyCourses,
    #[error("{0} is not selected")]
    CourseNotSelected(Course),
    #[error("priorities can only be set once two courses are selected")]
    PriorityUnavailable,
    #[error("{0} is not a text field")]
    NotATextField(Field),
    #[error("unknown course {0:?}")]
    UnknownCourse(String),
    #[error("unknown time slot {0:?}")]
    UnknownSlot(String),
}

/// Which of the two priority pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Blocked before any request was made; messages are also on the form
    Invalid(ValidationErrors),
    Sent(Notice),
}

/// State behind the enrollment page
#[derive(Debug, Clone, Default)]
pub struct EnrollmentForm {
    values: BTreeMap<Field, String>,
    /// In selection order
    courses: Vec<Course>,
    priority1: Option<Course>,
    priority2: Option<Course>,
    slots: BTreeMap<Course, Slot>,
    errors: ValidationErrors,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields typed or picked as free text
    pub const TEXT_FIELDS: [Field; 11] = [
        Field::Name,
        Field::FatherName,
        Field::FatherNumber,
        Field::Cnic,
        Field::Qualification,
        Field::Gender,
        Field::Phone,
        Field::Email,
        Field::Address,
        Field::City,
        Field::BirthDate,
    ];

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if !Self::TEXT_FIELDS.contains(&field) {
            return Err(FormError::NotATextField(field));
        }

        self.values.insert(field, value.into());
        self.errors.remove(field);
        Ok(())
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", |v| v.trim())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_selected(&self, course: Course) -> bool {
        self.courses.contains(&course)
    }

    /// Checks or unchecks `course`, returning whether it is now selected
    ///
    /// A third course is refused and leaves the form untouched. Unchecking a
    /// course drops its slot, and the priorities with it since they only
    /// exist while two courses are chosen.
    pub fn toggle_course(&mut self, course: Course) -> Result<bool, FormError> {
        if let Some(pos) = self.courses.iter().position(|c| *c == course) {
            self.courses.remove(pos);
            self.slots.remove(&course);
            self.priority1 = None;
            self.priority2 = None;
            self.clear_course_errors();
            debug!("Deselected {course}");
            return Ok(false);
        }

        if self.courses.len() >= Course::MAX_SELECTED {
            return Err(FormError::TooManyCourses);
        }

        self.courses.push(course);
        self.clear_course_errors();
        debug!("Selected {course}");
        Ok(true)
    }

    /// The priority pickers are only shown once two courses are chosen
    pub fn shows_priorities(&self) -> bool {
        self.courses.len() == Course::MAX_SELECTED
    }

    /// Courses offered by both priority pickers
    pub fn priority_options(&self) -> &[Course] {
        if self.shows_priorities() {
            &self.courses
        } else {
            &[]
        }
    }

    pub fn priority(&self, rank: Rank) -> Option<Course> {
        match rank {
            Rank::First => self.priority1,
            Rank::Second => self.priority2,
        }
    }

    pub fn set_priority(&mut self, rank: Rank, course: Course) -> Result<(), FormError> {
        if !self.shows_priorities() {
            return Err(FormError::PriorityUnavailable);
        }
        if !self.is_selected(course) {
            return Err(FormError::CourseNotSelected(course));
        }

        match rank {
            Rank::First => {
                self.priority1 = Some(course);
                self.errors.remove(Field::Priority1);
            }
            Rank::Second => {
                self.priority2 = Some(course);
                self.errors.remove(Field::Priority2);
            }
        }
        Ok(())
    }

    /// Courses that get a Morning/Evening selector
    pub fn slot_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn slot(&self, course: Course) -> Option<Slot> {
        self.slots.get(&course).copied()
    }

    /// Replaces any slot already chosen for `course`
    pub fn set_slot(&mut self, course: Course, slot: Slot) -> Result<(), FormError> {
        if !self.is_selected(course) {
            return Err(FormError::CourseNotSelected(course));
        }

        self.slots.insert(course, slot);
        self.errors.remove(Field::CourseSlots);
        Ok(())
    }

    pub fn clear_slot(&mut self, course: Course) {
        self.slots.remove(&course);
    }

    /// Messages from the last validation pass, minus fields edited since
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Checks every field and builds the payload
    ///
    /// Failures are kept on the form for inline display as well as returned.
    pub fn validate(&mut self, today: NaiveDate) -> Result<Applicant, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(Field::Name, validation::check_name(self.value(Field::Name)));
        errors.check(
            Field::FatherName,
            validation::check_father_name(self.value(Field::FatherName)),
        );
        errors.check(
            Field::FatherNumber,
            validation::check_father_number(self.value(Field::FatherNumber)),
        );
        errors.check(Field::Cnic, validation::check_cnic(self.value(Field::Cnic)));
        let qualification = errors.check(
            Field::Qualification,
            validation::parse_qualification(self.value(Field::Qualification)),
        );
        let gender = errors.check(
            Field::Gender,
            validation::parse_gender(self.value(Field::Gender)),
        );
        errors.check(Field::Phone, validation::check_phone(self.value(Field::Phone)));
        errors.check(Field::Email, validation::check_email(self.value(Field::Email)));
        errors.check(
            Field::Address,
            validation::check_address(self.value(Field::Address)),
        );
        errors.check(Field::City, validation::check_city(self.value(Field::City)));
        let birth_date = errors.check(
            Field::BirthDate,
            validation::parse_birth_date(self.value(Field::BirthDate), today),
        );
        errors.check(Field::Courses, validation::check_courses(&self.courses));
        validation::check_priorities(&self.courses, self.priority1, self.priority2, &mut errors);
        errors.check(
            Field::CourseSlots,
            validation::check_slots(&self.courses, &self.slots),
        );

        self.errors = errors.clone();

        match (qualification, gender, birth_date) {
            (Some(qualification), Some(gender), Some(birth_date)) if errors.is_empty() => {
                Ok(Applicant {
                    name: self.value(Field::Name).to_string(),
                    father_name: self.value(Field::FatherName).to_string(),
                    father_number: self.value(Field::FatherNumber).to_string(),
                    cnic: self.value(Field::Cnic).to_string(),
                    qualification,
                    gender,
                    phone: self.value(Field::Phone).to_string(),
                    email: self.value(Field::Email).to_string(),
                    address: self.value(Field::Address).to_string(),
                    city: self.value(Field::City).to_string(),
                    birth_date,
                    courses: self.courses.clone(),
                    priority1: self.priority1,
                    priority2: self.priority2,
                    course_slots: self.slots.clone(),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validates, then posts the form once
    ///
    /// Taking `&mut self` keeps a single request in flight per form.
    pub async fn submit(&mut self, client: &SubmitClient) -> Submission {
        match self.validate(Local::now().date_naive()) {
            Ok(applicant) => Submission::Sent(client.register(&applicant).await),
            Err(errors) => {
                debug!("Submission blocked: {errors}");
                Submission::Invalid(errors)
            }
        }
    }

    fn clear_course_errors(&mut self) {
        self.errors.remove(Field::Courses);
        self.errors.remove(Field::Priority1);
        self.errors.remove(Field::Priority2);
        self.errors.remove(Field::CourseSlots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::catalog::{Gender, Qualification};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn filled() -> EnrollmentForm {
        let mut form = EnrollmentForm::new();
        for (field, value) in [
            (Field::Name, "Ali Khan"),
            (Field::FatherName, "Imran Khan"),
            (Field::FatherNumber, "+923001234567"),
            (Field::Cnic, "14242-4466754-9"),
            (Field::Qualification, "BS"),
            (Field::Gender, "Male"),
            (Field::Phone, "+923331234567"),
            (Field::Email, "ali@x.com"),
            (Field::Address, "House 12, Street 4, Gulberg"),
            (Field::City, "Lahore"),
            (Field::BirthDate, "2001-04-15"),
        ] {
            form.set_field(field, value).unwrap();
        }
        form.toggle_course(Course::WebAppDevelopment).unwrap();
        form
    }

    #[test]
    fn test_valid_single_course_form() {
        let mut form = filled();
        let applicant = form.validate(today()).unwrap();

        assert_eq!(applicant.name, "Ali Khan");
        assert_eq!(applicant.qualification, Qualification::Bs);
        assert_eq!(applicant.gender, Gender::Male);
        assert_eq!(applicant.courses, vec![Course::WebAppDevelopment]);
        assert_eq!(applicant.priority1, None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = EnrollmentForm::new();
        let errors = form.validate(today()).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Gender), Some("Select gender"));
        assert_eq!(errors.get(Field::BirthDate), Some("Birth date is required"));
        assert_eq!(errors.get(Field::Courses), Some("Select at least one course"));
        assert_eq!(errors.len(), 12);
        assert_eq!(form.error(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_bad_formats_are_reported_together() {
        let mut form = filled();
        form.set_field(Field::Phone, "03001234567").unwrap();
        form.set_field(Field::Cnic, "1424244667549").unwrap();
        form.set_field(Field::Email, "ali").unwrap();
        form.set_field(Field::Qualification, "PhD").unwrap();

        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(Field::Phone),
            Some("Phone number must be in +92XXXXXXXXXX format")
        );
        assert_eq!(
            errors.get(Field::Cnic),
            Some("CNIC must be in 14242-4466754-9 format")
        );
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        assert_eq!(
            errors.get(Field::Qualification),
            Some("Select a valid qualification")
        );
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = filled();
        form.set_field(Field::Phone, "0300-1234567").unwrap();
        assert!(form.validate(today()).is_err());
        assert!(form.error(Field::Phone).is_some());

        form.set_field(Field::Phone, "+923001112223").unwrap();
        assert_eq!(form.error(Field::Phone), None);
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut form = filled();
        form.set_field(Field::Email, "  ali@x.com ").unwrap();
        assert_eq!(form.validate(today()).unwrap().email, "ali@x.com");
    }

    #[test]
    fn test_structured_fields_are_not_text() {
        let mut form = EnrollmentForm::new();
        assert_eq!(
            form.set_field(Field::Courses, "Graphic Designing"),
            Err(FormError::NotATextField(Field::Courses))
        );
    }

    #[test]
    fn test_third_course_is_rejected() {
        let mut form = filled();
        assert_eq!(form.toggle_course(Course::GraphicDesign), Ok(true));
        assert_eq!(
            form.toggle_course(Course::MobileDevelopment),
            Err(FormError::TooManyCourses)
        );
        assert_eq!(
            form.courses(),
            &[Course::WebAppDevelopment, Course::GraphicDesign]
        );
    }

    #[test]
    fn test_priorities_appear_with_two_courses() {
        let mut form = filled();
        assert!(!form.shows_priorities());
        assert!(form.priority_options().is_empty());
        assert_eq!(
            form.set_priority(Rank::First, Course::WebAppDevelopment),
            Err(FormError::PriorityUnavailable)
        );

        form.toggle_course(Course::GraphicDesign).unwrap();
        assert!(form.shows_priorities());
        assert_eq!(
            form.priority_options(),
            &[Course::WebAppDevelopment, Course::GraphicDesign]
        );
        assert_eq!(
            form.set_priority(Rank::First, Course::MobileDevelopment),
            Err(FormError::CourseNotSelected(Course::MobileDevelopment))
        );
    }

    #[test]
    fn test_two_courses_need_both_priorities() {
        let mut form = filled();
        form.toggle_course(Course::GraphicDesign).unwrap();
        form.set_priority(Rank::First, Course::GraphicDesign).unwrap();

        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get(Field::Priority2), Some("Select 2nd priority"));
        assert!(!errors.contains(Field::Priority1));

        form.set_priority(Rank::Second, Course::GraphicDesign).unwrap();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(
            errors.get(Field::Priority2),
            Some("Priorities must be different courses")
        );

        form.set_priority(Rank::Second, Course::WebAppDevelopment).unwrap();
        let applicant = form.validate(today()).unwrap();
        assert_eq!(applicant.priority1, Some(Course::GraphicDesign));
        assert_eq!(applicant.priority2, Some(Course::WebAppDevelopment));
    }

    #[test]
    fn test_deselecting_clears_dependent_state() {
        let mut form = filled();
        form.toggle_course(Course::GraphicDesign).unwrap();
        form.set_priority(Rank::First, Course::GraphicDesign).unwrap();
        form.set_priority(Rank::Second, Course::WebAppDevelopment).unwrap();
        form.set_slot(Course::GraphicDesign, Slot::Evening).unwrap();
        form.set_slot(Course::WebAppDevelopment, Slot::Morning).unwrap();

        assert_eq!(form.toggle_course(Course::GraphicDesign), Ok(false));
        assert!(!form.shows_priorities());
        assert_eq!(form.priority(Rank::First), None);
        assert_eq!(form.priority(Rank::Second), None);
        assert_eq!(form.slot(Course::GraphicDesign), None);
        assert_eq!(form.slot(Course::WebAppDevelopment), Some(Slot::Morning));

        let applicant = form.validate(today()).unwrap();
        assert_eq!(applicant.course_slots.len(), 1);
    }

    #[test]
    fn test_slots_follow_selection() {
        let mut form = EnrollmentForm::new();
        assert!(form.slot_courses().is_empty());
        assert_eq!(
            form.set_slot(Course::GraphicDesign, Slot::Morning),
            Err(FormError::CourseNotSelected(Course::GraphicDesign))
        );

        form.toggle_course(Course::GraphicDesign).unwrap();
        assert_eq!(form.slot_courses(), &[Course::GraphicDesign]);
        form.set_slot(Course::GraphicDesign, Slot::Morning).unwrap();
        form.set_slot(Course::GraphicDesign, Slot::Evening).unwrap();
        assert_eq!(form.slot(Course::GraphicDesign), Some(Slot::Evening));

        form.clear_slot(Course::GraphicDesign);
        assert_eq!(form.slot(Course::GraphicDesign), None);
    }
}

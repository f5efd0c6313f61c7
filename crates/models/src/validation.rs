use crate::catalog::{Course, Gender, Qualification, Slot};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::{
    collections::{BTreeMap, btree_map},
    fmt::{Display as FmtDisplay, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::Display;

lazy_static! {
    // `\d` would also accept non-ASCII digits
    static ref PK_PHONE: Regex = Regex::new(r"^\+92[0-9]{10}$").unwrap();
    static ref CNIC: Regex = Regex::new(r"^[0-9]{5}-[0-9]{7}-[0-9]$").unwrap();
    static ref EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9_'+-]+(\.[A-Za-z0-9_'+-]+)*@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$"
    )
    .unwrap();
}

const NAME_MAX: usize = 100;
const ADDRESS_MAX: usize = 300;
const CITY_MAX: usize = 100;
const EMAIL_MAX: usize = 254;

/// Result of a single field rule
pub type Rule<T = ()> = Result<T, &'static str>;

/// The fields of the enrollment form, keyed the way they appear in JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    FatherName,
    FatherNumber,
    Cnic,
    Qualification,
    Gender,
    Phone,
    Email,
    Address,
    City,
    BirthDate,
    Courses,
    Priority1,
    Priority2,
    CourseSlots,
}

/// Per-field messages produced by a failed validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already failed an earlier rule
    pub fn add(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Records the error side of `rule`, passing the success value through
    pub fn check<T>(&mut self, field: Field, rule: Rule<T>) -> Option<T> {
        match rule {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, &'static str> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FmtDisplay for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid fields:")?;
        for (field, message) in &self.0 {
            write!(f, " {field} ({message})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn check_length(
    value: &str,
    min: usize,
    max: usize,
    short: &'static str,
    long: &'static str,
) -> Rule {
    let len = value.trim().chars().count();
    if len < min {
        Err(short)
    } else if len > max {
        Err(long)
    } else {
        Ok(())
    }
}

pub fn check_name(value: &str) -> Rule {
    check_length(
        value,
        3,
        NAME_MAX,
        "Name is required",
        "Name must be at most 100 characters",
    )
}

pub fn check_father_name(value: &str) -> Rule {
    check_length(
        value,
        3,
        NAME_MAX,
        "Father/Guardian Name is required",
        "Father/Guardian Name must be at most 100 characters",
    )
}

pub fn check_father_number(value: &str) -> Rule {
    if PK_PHONE.is_match(value) {
        Ok(())
    } else {
        Err("Father's number must be in +92XXXXXXXXXX format")
    }
}

pub fn check_phone(value: &str) -> Rule {
    if PK_PHONE.is_match(value) {
        Ok(())
    } else {
        Err("Phone number must be in +92XXXXXXXXXX format")
    }
}

pub fn check_cnic(value: &str) -> Rule {
    if CNIC.is_match(value) {
        Ok(())
    } else {
        Err("CNIC must be in 14242-4466754-9 format")
    }
}

pub fn check_email(value: &str) -> Rule {
    if value.len() <= EMAIL_MAX && EMAIL.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email address")
    }
}

pub fn check_address(value: &str) -> Rule {
    check_length(
        value,
        5,
        ADDRESS_MAX,
        "Address is required",
        "Address must be at most 300 characters",
    )
}

pub fn check_city(value: &str) -> Rule {
    check_length(
        value,
        2,
        CITY_MAX,
        "District is required",
        "District must be at most 100 characters",
    )
}

pub fn parse_qualification(value: &str) -> Rule<Qualification> {
    Qualification::from_str(value).map_err(|_| "Select a valid qualification")
}

pub fn parse_gender(value: &str) -> Rule<Gender> {
    Gender::from_str(value).map_err(|_| "Select gender")
}

/// Parses an HTML date input value (`YYYY-MM-DD`)
pub fn parse_birth_date(value: &str, today: NaiveDate) -> Rule<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Birth date is required");
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Birth date is not a valid date")?;
    check_birth_date(date, today)?;
    Ok(date)
}

fn check_birth_date(date: NaiveDate, today: NaiveDate) -> Rule {
    if date > today {
        Err("Birth date cannot be in the future")
    } else {
        Ok(())
    }
}

pub fn check_courses(courses: &[Course]) -> Rule {
    match courses {
        [] => Err("Select at least one course"),
        [a, b] if a == b => Err("Each course can be selected only once"),
        _ if courses.len() > Course::MAX_SELECTED => Err("Select at most two courses"),
        _ => Ok(()),
    }
}

/// Priorities rank the two chosen courses; with a single course they are optional
pub fn check_priorities(
    courses: &[Course],
    priority1: Option<Course>,
    priority2: Option<Course>,
    errors: &mut ValidationErrors,
) {
    if courses.len() == Course::MAX_SELECTED {
        if priority1.is_none() {
            errors.add(Field::Priority1, "Select 1st priority");
        }
        if priority2.is_none() {
            errors.add(Field::Priority2, "Select 2nd priority");
        }
    }

    if let Some(p1) = priority1
        && !courses.contains(&p1)
    {
        errors.add(
            Field::Priority1,
            "1st priority must be one of the selected courses",
        );
    }
    if let Some(p2) = priority2
        && !courses.contains(&p2)
    {
        errors.add(
            Field::Priority2,
            "2nd priority must be one of the selected courses",
        );
    }

    if priority1.is_some() && priority1 == priority2 {
        errors.add(Field::Priority2, "Priorities must be different courses");
    }
}

pub fn check_slots(courses: &[Course], slots: &BTreeMap<Course, Slot>) -> Rule {
    if slots.keys().all(|course| courses.contains(course)) {
        Ok(())
    } else {
        Err("Time slots can only be chosen for selected courses")
    }
}

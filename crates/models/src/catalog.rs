use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Highest qualification an applicant holds
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Qualification {
    #[serde(rename = "MS")]
    #[strum(serialize = "MS")]
    Ms,
    #[serde(rename = "BS")]
    #[strum(serialize = "BS")]
    Bs,
    #[serde(rename = "FA")]
    #[strum(serialize = "FA")]
    Fa,
    #[serde(rename = "FSC")]
    #[strum(serialize = "FSC")]
    Fsc,
    Matric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Gender {
    Male,
    Female,
}

/// The skill enhancement programs on offer
///
/// The string forms are the exact titles shown on the form and stored in the
/// database, so they must not change once records exist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Course {
    #[serde(rename = "Digital Forensic & Cyber Security")]
    #[strum(serialize = "Digital Forensic & Cyber Security")]
    DigitalForensics,
    #[serde(rename = "Digital Marketing & SEO")]
    #[strum(serialize = "Digital Marketing & SEO")]
    DigitalMarketing,
    #[serde(rename = "Graphic Designing")]
    #[strum(serialize = "Graphic Designing")]
    GraphicDesign,
    #[serde(rename = "Mobile Development")]
    #[strum(serialize = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Web App Development")]
    #[strum(serialize = "Web App Development")]
    WebAppDevelopment,
}

impl Course {
    /// An applicant may enroll in at most this many courses
    pub const MAX_SELECTED: usize = 2;
}

/// Time of day a selected course is attended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Slot {
    Morning,
    Evening,
}

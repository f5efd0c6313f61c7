use chrono::NaiveDate;
use log::{error, info, warn};
use models::applicant::Applicant;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

const STUDENTS_PATH: &str = "/api/students";
const ADMISSIONS_PATH: &str = "/api/admissions";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// What the page tells the applicant after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success,
    /// A refusal the server explained, e.g. a duplicate email
    Server(String),
    /// Anything else; the applicant may try again
    Failure,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Success => write!(f, "Form submitted successfully!"),
            Self::Server(message) => write!(f, "{message}"),
            Self::Failure => write!(f, "Failed to submit form"),
        }
    }
}

/// A request that never got an answer leaves the applicant free to retry
impl From<SubmitError> for Notice {
    fn from(e: SubmitError) -> Self {
        error!("Request to the enrollment server failed: {e}");
        Self::Failure
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionsStatus {
    pub open: bool,
    pub reopen_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
struct Reply {
    message: Option<String>,
}

/// Talks to the registration endpoint
#[derive(Debug, Clone)]
pub struct SubmitClient {
    http: Client,
    base_url: String,
}

impl SubmitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Posts `applicant` and maps the reply to a notice
    pub async fn register(&self, applicant: &Applicant) -> Notice {
        self.try_register(applicant).await.unwrap_or_else(Notice::from)
    }

    async fn try_register(&self, applicant: &Applicant) -> Result<Notice, SubmitError> {
        let response = self
            .http
            .post(self.url(STUDENTS_PATH))
            .json(applicant)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Registered {} ({status})", applicant.email);
            return Ok(Notice::Success);
        }

        // Error bodies are not guaranteed to be JSON
        let reply = response.json::<Reply>().await.unwrap_or_default();
        warn!("Registration refused with {status}: {:?}", reply.message);

        Ok(reply.message.map_or(Notice::Failure, Notice::Server))
    }

    pub async fn admissions(&self) -> Result<AdmissionsStatus, SubmitError> {
        let status = self
            .http
            .get(self.url(ADMISSIONS_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(status)
    }
}

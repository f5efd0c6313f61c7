use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::{env, net::SocketAddr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Whether the enrollment window is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admissions {
    pub open: bool,
    /// Shown to applicants while admissions are closed
    pub reopen_date: Option<NaiveDate>,
}

impl Default for Admissions {
    fn default() -> Self {
        Self {
            open: true,
            reopen_date: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub admissions: Admissions,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        let open = match var("ADMISSIONS_OPEN") {
            Some(value) => parse_flag(&value).context("ADMISSIONS_OPEN must be true or false")?,
            None => true,
        };

        let reopen_date = var("ADMISSIONS_REOPEN_DATE")
            .filter(|value| !value.trim().is_empty())
            .map(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d"))
            .transpose()
            .context("ADMISSIONS_REOPEN_DATE must be a YYYY-MM-DD date")?;

        Ok(Self {
            database_url,
            bind_addr,
            admissions: Admissions { open, reopen_date },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value {other:?}"),
    }
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use form::{EnrollmentForm, Notice, Submission, SubmitClient, input::FormInput};
use std::{fs, path::PathBuf, process::ExitCode};

/// Fill in and submit the student enrollment form
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of the enrollment server
    #[arg(long, env = "ENROLLMENT_SERVER", default_value = "http://localhost:3000")]
    server: String,

    /// Only print whether admissions are open
    #[arg(long)]
    status: bool,

    /// JSON file with the form answers
    #[arg(required_unless_present = "status")]
    form: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let client = SubmitClient::new(&args.server);

    let admissions = match client.admissions().await {
        Ok(admissions) => admissions,
        Err(e) => {
            eprintln!("{}", Notice::from(e));
            return Ok(ExitCode::FAILURE);
        }
    };

    if !admissions.open {
        println!("Admissions Closed");
        println!("Thank you for your interest. Admissions are currently closed.");
        if let Some(date) = admissions.reopen_date {
            println!("Estimated reopening date: {}", date.format("%d %B %Y"));
        }
        return Ok(ExitCode::FAILURE);
    }

    if args.status {
        println!("Admissions are open");
        return Ok(ExitCode::SUCCESS);
    }

    let Some(path) = args.form else {
        bail!("no form file given");
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: FormInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut form = EnrollmentForm::new();
    input.apply(&mut form)?;

    match form.submit(&client).await {
        Submission::Invalid(errors) => {
            eprintln!("Please correct the following fields:");
            for (field, message) in errors.iter() {
                eprintln!("  {field}: {message}");
            }
            Ok(ExitCode::FAILURE)
        }
        Submission::Sent(notice @ Notice::Success) => {
            println!("{notice}");
            Ok(ExitCode::SUCCESS)
        }
        Submission::Sent(notice) => {
            eprintln!("{notice}");
            Ok(ExitCode::FAILURE)
        }
    }
}

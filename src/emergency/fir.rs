//! First Information Report (FIR) form.
//!
//! The form is validated locally; there is no backend to receive it, so a
//! valid report is logged and acknowledged with a fixed message.
//!
//! Reports can be loaded from YAML or JSON files using the camelCase field
//! names of the form:
//!
//! ```yaml
//! complainantName: Asha Rao
//! contactNumber: "+91 98450 12345"
//! email: asha@example.com
//! incidentDate: 2025-05-06T21:15
//! incidentLocation: MG Road metro station, Bangalore
//! incidentType: theft
//! description: Phone snatched near exit B.
//! ```

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const ACKNOWLEDGMENT: &str =
    "Your FIR has been submitted successfully. A police officer will contact you shortly.";

/// Format of the incident date field (an HTML `datetime-local` value).
pub const INCIDENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d -]{8,14}\d$").expect("phone pattern is valid"));

#[derive(Debug, Error)]
pub enum FirError {
    #[error("failed to read report {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("report has {} problem(s): {}", .0.len(), join_problems(.0))]
    Invalid(Vec<FieldProblem>),
}

fn join_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One invalid field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    #[default]
    Theft,
    Assault,
    Fraud,
    Cybercrime,
    Harassment,
    PropertyDamage,
    Other,
}

impl IncidentType {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Theft => "Theft",
            IncidentType::Assault => "Assault",
            IncidentType::Fraud => "Fraud",
            IncidentType::Cybercrime => "Cybercrime",
            IncidentType::Harassment => "Harassment",
            IncidentType::PropertyDamage => "Property Damage",
            IncidentType::Other => "Other",
        }
    }
}

/// A police complaint as filled in by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirReport {
    pub complainant_name: String,
    pub contact_number: String,
    pub email: String,
    pub incident_date: String,
    pub incident_location: String,
    pub incident_type: IncidentType,
    pub description: String,
    pub witnesses: String,
    pub evidence: String,
}

impl FirReport {
    /// Load a report from a YAML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FirError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| FirError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| FirError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Every problem with the report; empty when it is valid.
    pub fn problems(&self) -> Vec<FieldProblem> {
        let mut problems = Vec::new();
        let mut require = |field: &'static str, value: &str| {
            if value.trim().is_empty() {
                problems.push(FieldProblem {
                    field,
                    reason: "is required",
                });
                false
            } else {
                true
            }
        };

        require("complainantName", &self.complainant_name);
        let has_contact = require("contactNumber", &self.contact_number);
        let has_email = require("email", &self.email);
        let has_date = require("incidentDate", &self.incident_date);
        require("incidentLocation", &self.incident_location);
        require("description", &self.description);

        if has_contact && !PHONE_RE.is_match(self.contact_number.trim()) {
            problems.push(FieldProblem {
                field: "contactNumber",
                reason: "is not a valid phone number",
            });
        }
        if has_email && !EMAIL_RE.is_match(self.email.trim()) {
            problems.push(FieldProblem {
                field: "email",
                reason: "is not a valid email address",
            });
        }
        if has_date
            && NaiveDateTime::parse_from_str(self.incident_date.trim(), INCIDENT_DATE_FORMAT)
                .is_err()
        {
            problems.push(FieldProblem {
                field: "incidentDate",
                reason: "must look like YYYY-MM-DDTHH:MM",
            });
        }
        problems
    }

    pub fn validate(&self) -> Result<(), FirError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(FirError::Invalid(problems))
        }
    }

    /// Validate and "file" the report, returning the acknowledgment.
    #[instrument(level = "info", skip_all, fields(incident_type = self.incident_type.label()))]
    pub fn submit(&self) -> Result<&'static str, FirError> {
        if let Err(e) = self.validate() {
            warn!(error = %e, "Rejected FIR report");
            return Err(e);
        }
        info!(location = %self.incident_location, "FIR report accepted");
        Ok(ACKNOWLEDGMENT)
    }
}

//! All-at-once entity validation.
//!
//! Validators evaluate every rule of every field and report each failure as a
//! [`Violation`]. An empty [`ValidationReport`] means the entity is valid.
//! Failing to consult reference data is not a violation; it is returned as a
//! [`ReferenceDataError`] so callers can tell bad input from an outage.

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;

use super::applicant::{fields, Applicant};
use super::reference_data::{ReferenceDataCache, ReferenceDataError};

/// Rule that a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    /// The value is empty or whitespace only.
    Required,
    /// The value has fewer characters than the minimum.
    MinLength(usize),
    /// The value lies outside the inclusive range.
    Range {
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },
    /// The value is not recognised (unknown country, malformed e-mail,
    /// unknown top-level domain).
    Invalid,
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::MinLength(min) => write!(f, "minlen-{min}"),
            Self::Range { min, max } => write!(f, "range-{min}-{max}"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Wire name of the field, e.g. `familyName`.
    pub field: String,
    /// The rule that failed.
    pub code: ViolationCode,
}

impl Violation {
    /// Build a violation for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, code: ViolationCode) -> Self {
        Self {
            field: field.into(),
            code,
        }
    }

    /// Client-facing key in the form `<code>:<field>`.
    ///
    /// # Examples
    /// ```
    /// use applicants::domain::{Violation, ViolationCode};
    ///
    /// let violation = Violation::new("address", ViolationCode::MinLength(10));
    /// assert_eq!(violation.error_key(), "minlen-10:address");
    /// ```
    #[must_use]
    pub fn error_key(&self) -> String {
        format!("{}:{}", self.code, self.field)
    }
}

/// Ordered list of violations; empty when the entity is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport(Vec<Violation>);

impl ValidationReport {
    /// Whether no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`ValidationReport::is_valid`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Violations in field-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `<code>:<field>` keys, one per violation.
    #[must_use]
    pub fn error_keys(&self) -> Vec<String> {
        self.0.iter().map(Violation::error_key).collect()
    }

    fn push(&mut self, field: &str, code: ViolationCode) {
        self.0.push(Violation::new(field, code));
    }
}

impl From<Vec<Violation>> for ValidationReport {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_keys().join(", "))
    }
}

/// Rule set for one entity type.
#[async_trait]
pub trait EntityValidator<E>: Send + Sync {
    /// Evaluate every rule and collect all failures.
    async fn validate(&self, entity: &E) -> Result<ValidationReport, ReferenceDataError>;
}

/// Minimum length of [`Applicant::name`] and [`Applicant::family_name`].
pub const NAME_MIN_LENGTH: usize = 5;
/// Minimum length of [`Applicant::address`].
pub const ADDRESS_MIN_LENGTH: usize = 10;
/// Youngest accepted applicant.
pub const AGE_MIN: i32 = 20;
/// Oldest accepted applicant.
pub const AGE_MAX: i32 = 60;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Unanchored: anything containing `@` followed later by `.letters` matches.
        Regex::new(r"(?i).*@.*\.[a-z]+")
            .unwrap_or_else(|error| panic!("e-mail regex failed to compile: {error}"))
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validation rules for [`Applicant`].
///
/// Country and e-mail rules consult the [`ReferenceDataCache`], loading it on
/// first use. Empty or syntactically malformed values are rejected without a
/// lookup, so such payloads never trigger the external fetch.
pub struct ApplicantValidator {
    reference_data: Arc<ReferenceDataCache>,
}

impl ApplicantValidator {
    /// Create a validator backed by `reference_data`.
    #[must_use]
    pub fn new(reference_data: Arc<ReferenceDataCache>) -> Self {
        Self { reference_data }
    }

    fn check_text(report: &mut ValidationReport, field: &str, value: &str, min_length: usize) {
        if is_blank(value) {
            report.push(field, ViolationCode::Required);
        }
        if value.chars().count() < min_length {
            report.push(field, ViolationCode::MinLength(min_length));
        }
    }

    async fn check_country(
        &self,
        report: &mut ValidationReport,
        country: &str,
    ) -> Result<(), ReferenceDataError> {
        if is_blank(country) {
            report.push(fields::COUNTRY_OF_ORIGIN, ViolationCode::Required);
            report.push(fields::COUNTRY_OF_ORIGIN, ViolationCode::Invalid);
            return Ok(());
        }
        let data = self.reference_data.ensure_loaded().await?;
        if !data.contains_country(country) {
            report.push(fields::COUNTRY_OF_ORIGIN, ViolationCode::Invalid);
        }
        Ok(())
    }

    async fn check_email(
        &self,
        report: &mut ValidationReport,
        address: &str,
    ) -> Result<(), ReferenceDataError> {
        if is_blank(address) {
            report.push(fields::EMAIL_ADDRESS, ViolationCode::Required);
            report.push(fields::EMAIL_ADDRESS, ViolationCode::Invalid);
            return Ok(());
        }
        if !email_regex().is_match(address) {
            report.push(fields::EMAIL_ADDRESS, ViolationCode::Invalid);
            return Ok(());
        }
        // The pattern guarantees at least one dot.
        let domain = address.rsplit('.').next().unwrap_or_default();
        let data = self.reference_data.ensure_loaded().await?;
        if !data.contains_top_level_domain(domain) {
            report.push(fields::EMAIL_ADDRESS, ViolationCode::Invalid);
        }
        Ok(())
    }
}

#[async_trait]
impl EntityValidator<Applicant> for ApplicantValidator {
    async fn validate(&self, applicant: &Applicant) -> Result<ValidationReport, ReferenceDataError> {
        let mut report = ValidationReport::default();

        Self::check_text(&mut report, fields::NAME, &applicant.name, NAME_MIN_LENGTH);
        Self::check_text(
            &mut report,
            fields::FAMILY_NAME,
            &applicant.family_name,
            NAME_MIN_LENGTH,
        );
        Self::check_text(
            &mut report,
            fields::ADDRESS,
            &applicant.address,
            ADDRESS_MIN_LENGTH,
        );
        self.check_country(&mut report, &applicant.country_of_origin)
            .await?;
        self.check_email(&mut report, &applicant.e_mail_address)
            .await?;
        if !(AGE_MIN..=AGE_MAX).contains(&applicant.age) {
            report.push(
                fields::AGE,
                ViolationCode::Range {
                    min: AGE_MIN,
                    max: AGE_MAX,
                },
            );
        }

        Ok(report)
    }
}

//! Applicant record managed by the service.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Entity, EntityId};

/// Field names as they appear on the wire and in validation keys.
pub mod fields {
    /// First name.
    pub const NAME: &str = "name";
    /// Family name.
    pub const FAMILY_NAME: &str = "familyName";
    /// Postal address.
    pub const ADDRESS: &str = "address";
    /// Country of origin.
    pub const COUNTRY_OF_ORIGIN: &str = "countryOfOrigin";
    /// E-mail address.
    pub const EMAIL_ADDRESS: &str = "eMailAddress";
    /// Age in years.
    pub const AGE: &str = "age";
}

/// Applicant as stored and exchanged over HTTP.
///
/// Missing or `null` string fields deserialize as empty strings and a missing
/// `age` as `0`, so incomplete payloads reach validation instead of failing to
/// parse.
///
/// # Examples
/// ```
/// use applicants::domain::Applicant;
///
/// let applicant: Applicant = serde_json::from_str(
///     r#"{"name":"Maximilian","eMailAddress":"max@example.com","age":30}"#,
/// )
/// .expect("valid JSON");
/// assert_eq!(applicant.e_mail_address, "max@example.com");
/// assert!(applicant.family_name.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Applicant {
    /// System-assigned identifier; ignored on create.
    pub id: EntityId,
    /// First name.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Family name.
    #[serde(deserialize_with = "null_as_empty")]
    pub family_name: String,
    /// Postal address.
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
    /// Country of origin, matched case-insensitively against the country directory.
    #[serde(deserialize_with = "null_as_empty")]
    pub country_of_origin: String,
    /// E-mail address whose top-level domain must be known.
    #[serde(deserialize_with = "null_as_empty")]
    pub e_mail_address: String,
    /// Age in years.
    pub age: i32,
    /// Whether the applicant has been hired.
    pub hired: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Entity for Applicant {
    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

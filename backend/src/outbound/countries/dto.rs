//! DTOs for decoding the country directory JSON listing.
//!
//! Only the two fields the service uses are decoded; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::domain::ports::CountryRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CountryDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) top_level_domain: Vec<Option<String>>,
}

impl CountryDto {
    pub(super) fn into_record(self) -> CountryRecord {
        CountryRecord::new(self.name, self.top_level_domain.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_domains_are_dropped() {
        let dto: CountryDto = serde_json::from_str(
            r#"{"name":"Kosovo","topLevelDomain":[null,""],"alpha2Code":"XK"}"#,
        )
        .expect("decodes");

        assert_eq!(dto.into_record(), CountryRecord::new("Kosovo", [""]));
    }

    #[test]
    fn missing_domain_list_is_empty() {
        let dto: CountryDto = serde_json::from_str(r#"{"name":"Nowhere"}"#).expect("decodes");
        assert!(dto.into_record().top_level_domains.is_empty());
    }
}

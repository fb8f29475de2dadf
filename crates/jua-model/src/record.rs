//! Company records.

use serde::{Deserialize, Serialize};

/// One company listing.
///
/// `name` is the only required field. The rest default to empty strings or
/// `None` so a sparse record still renders a valid detail page. Serialized
/// field names are a contract with the shipped client script, which reads
/// `companies.json` without any transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Display title and slug basis.
    pub name: String,

    /// Free-text location, e.g. "Dar es Salaam".
    #[serde(default)]
    pub location: String,

    /// Free-text list of services offered.
    #[serde(default)]
    pub services: String,

    /// Longer free-text description.
    #[serde(default)]
    pub description: String,

    /// Local-format phone number, e.g. "0755555555".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Errors for a single malformed record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no company name")]
    MissingName,
}

impl Company {
    /// Create a record with just a name, all optional fields empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: String::new(),
            services: String::new(),
            description: String::new(),
            phone: None,
            website: None,
        }
    }

    /// Validate the record at the input boundary.
    ///
    /// Only the name is enforced; missing optional fields degrade to
    /// placeholders at render time rather than failing the record.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingName);
        }
        Ok(())
    }

    /// Derive a WhatsApp click-to-chat URL from the phone number.
    ///
    /// Non-digits are dropped, one leading local-format `0` is stripped, and
    /// the country code is prepended: `0755555555` with country code `255`
    /// becomes `https://wa.me/255755555555`. Returns `None` when there is no
    /// phone number or it contains no digits.
    pub fn whatsapp_link(&self, country_code: &str) -> Option<String> {
        let phone = self.phone.as_deref()?;
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        let national = digits.strip_prefix('0').unwrap_or(&digits);
        Some(format!("https://wa.me/{}{}", country_code, national))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_name_presence() {
        assert!(Company::new("Dar Solar Tech").validate().is_ok());
        assert_eq!(
            Company::new("   ").validate(),
            Err(RecordError::MissingName)
        );
        assert_eq!(Company::new("").validate(), Err(RecordError::MissingName));
    }

    #[test]
    fn derives_whatsapp_link() {
        let mut company = Company::new("Dar Solar Tech");
        company.phone = Some("0755555555".to_string());

        assert_eq!(
            company.whatsapp_link("255"),
            Some("https://wa.me/255755555555".to_string())
        );
    }

    #[test]
    fn whatsapp_link_tolerates_formatting() {
        let mut company = Company::new("Kigoma Solar");
        company.phone = Some("0712 345-678".to_string());

        assert_eq!(
            company.whatsapp_link("255"),
            Some("https://wa.me/255712345678".to_string())
        );
    }

    #[test]
    fn whatsapp_link_absent_without_phone() {
        let company = Company::new("Arusha Energy");
        assert_eq!(company.whatsapp_link("255"), None);

        let mut blank = Company::new("Arusha Energy");
        blank.phone = Some("n/a".to_string());
        assert_eq!(blank.whatsapp_link("255"), None);
    }
}

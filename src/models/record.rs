//! Contact record representing one person in the contact book.

use crate::domain::{Birthday, ContactName, FormatError, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Custom deserializer for phones that drops repeated numbers, keeping the first
fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<PhoneNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<PhoneNumber> = Vec::deserialize(deserializer)?;
    let mut phones: Vec<PhoneNumber> = Vec::with_capacity(entries.len());
    for phone in entries {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}

/// A single contact: a name, its unique phone numbers, and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,

    /// Phone numbers in insertion order, no duplicates
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_phones"
    )]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Find a phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Append a validated phone number.
    ///
    /// Returns `Ok(false)` without changing the record when the number is
    /// already present.
    pub fn add_phone(&mut self, phone: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        if self.phones.contains(&phone) {
            warn!("{} already exists for {}", phone, self.name);
            return Ok(false);
        }
        debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(true)
    }

    /// Remove every phone equal to `phone`.
    ///
    /// Returns whether anything was removed; absence is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        let before = self.phones.len();
        self.phones.retain(|p| *p != phone);
        Ok(self.phones.len() != before)
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is validated first. Returns `Ok(false)` when `old` is not
    /// on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = PhoneNumber::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                debug!("Replacing phone {} with {} for {}", old, new, self.name);
                *slot = new;
                Ok(true)
            }
            None => {
                warn!("{} does not exist for {}", old, self.name);
                Ok(false)
            }
        }
    }

    /// Set the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), FormatError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_add_phone_appends() {
        let mut r = record("maria");
        assert!(r.add_phone("0123456789").unwrap());
        assert!(r.add_phone("0987654321").unwrap());
        assert_eq!(r.phones().len(), 2);
        assert_eq!(r.phones()[1].as_str(), "0987654321");
    }

    #[test]
    fn test_add_phone_duplicate_is_noop() {
        let mut r = record("maria");
        r.add_phone("0123456789").unwrap();
        assert!(!r.add_phone("0123456789").unwrap());
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut r = record("maria");
        assert!(matches!(
            r.add_phone("12345"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(r.phones().is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut r = record("maria");
        r.add_phone("0123456789").unwrap();
        r.add_phone("0987654321").unwrap();

        assert!(r.remove_phone("0123456789").unwrap());
        assert!(!r.remove_phone("0123456789").unwrap());
        assert_eq!(r.phones().len(), 1);
        assert!(r.remove_phone("bad").is_err());
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut r = record("maria");
        r.add_phone("1111111111").unwrap();
        r.add_phone("2222222222").unwrap();

        assert!(r.edit_phone("1111111111", "3333333333").unwrap());
        let phones: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_missing_old_leaves_phones_unchanged() {
        let mut r = record("maria");
        r.add_phone("1111111111").unwrap();

        assert!(!r.edit_phone("9999999999", "3333333333").unwrap());
        assert_eq!(r.phones()[0].as_str(), "1111111111");
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_invalid_new() {
        let mut r = record("maria");
        r.add_phone("1111111111").unwrap();
        assert!(r.edit_phone("1111111111", "abc").is_err());
        assert_eq!(r.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut r = record("maria");
        r.add_birthday("12.06.1990").unwrap();
        r.add_birthday("13.07.1991").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "13.07.1991");
        assert!(r.add_birthday("1991-07-13").is_err());
        assert_eq!(r.birthday().unwrap().to_string(), "13.07.1991");
    }

    #[test]
    fn test_display() {
        let mut r = record("maria");
        assert_eq!(r.to_string(), "Contact name: Maria, phones: ");
        r.add_phone("0123456789").unwrap();
        r.add_phone("0987654321").unwrap();
        assert_eq!(
            r.to_string(),
            "Contact name: Maria, phones: 0123456789; 0987654321"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let mut r = record("maria");
        r.add_phone("0123456789").unwrap();
        r.add_birthday("12.06.1990").unwrap();

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["name"], "Maria");
        assert_eq!(json["phones"][0], "0123456789");
        assert_eq!(json["birthday"], "12.06.1990");
    }

    #[test]
    fn test_deserialization_drops_repeated_phones() {
        let r: ContactRecord = serde_json::from_str(
            r#"{"name":"maria","phones":["0123456789","0123456789","0987654321"]}"#,
        )
        .unwrap();
        assert_eq!(r.name().as_str(), "Maria");
        assert_eq!(r.phones().len(), 2);
        assert!(r.birthday().is_none());
    }
}

//! Contact records captured from a scanned QR code or a manual form.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::mapping::ContactField;

/// A captured contact. Every field is optional free text.
///
/// A contact is *valid* when at least one field holds non-blank text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    /// The undecoded QR payload text.
    pub raw_code: Option<String>,
}

/// Address-book fields produced by an external QR payload decoder
/// (MECARD / vCard style payloads carry lists of names and emails).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    pub names: Vec<String>,
    pub emails: Vec<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
}

impl Contact {
    /// Build a contact from a decoded address-book payload, keeping the first
    /// name and first email plus the raw payload text.
    #[must_use]
    pub fn from_address_book(book: &AddressBook, raw_code: impl Into<String>) -> Self {
        Self {
            name: book.names.first().cloned(),
            email: book.emails.first().cloned(),
            organization: book.organization.clone(),
            title: book.title.clone(),
            raw_code: Some(raw_code.into()),
        }
    }

    /// Fallback for payloads that did not decode as a contact: only the raw
    /// text is kept.
    #[must_use]
    pub fn from_raw(raw_code: impl Into<String>) -> Self {
        Self {
            raw_code: Some(raw_code.into()),
            ..Self::default()
        }
    }

    /// Value of a single field, if present.
    #[must_use]
    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Organization => self.organization.as_deref(),
            ContactField::Title => self.title.as_deref(),
            ContactField::RawCode => self.raw_code.as_deref(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        ContactField::ALL
            .iter()
            .filter_map(|f| self.field(*f))
            .any(|v| !v.trim().is_empty())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when no field holds non-blank text.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "contact has no name, email, organization, title or raw code".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_contact_is_invalid() {
        let contact = Contact::default();
        assert!(!contact.is_valid());
        assert!(contact.validate().is_err());
    }

    #[test]
    fn blank_fields_do_not_make_a_contact_valid() {
        let contact = Contact {
            name: Some(String::new()),
            email: Some("   ".into()),
            ..Contact::default()
        };
        assert!(!contact.is_valid());
    }

    #[test]
    fn any_non_blank_field_is_enough() {
        let contact = Contact {
            title: Some("CTO".into()),
            ..Contact::default()
        };
        assert!(contact.is_valid());
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn address_book_takes_first_name_and_email() {
        let book = AddressBook {
            names: vec!["Ada Lovelace".into(), "A. King".into()],
            emails: vec!["ada@example.com".into(), "ada@work.example".into()],
            organization: Some("Analytical Engines".into()),
            title: None,
        };
        let contact = Contact::from_address_book(&book, "MECARD:N:Ada Lovelace;;");
        assert_eq!(
            contact,
            Contact {
                name: Some("Ada Lovelace".into()),
                email: Some("ada@example.com".into()),
                organization: Some("Analytical Engines".into()),
                title: None,
                raw_code: Some("MECARD:N:Ada Lovelace;;".into()),
            }
        );
    }

    #[test]
    fn address_book_without_names_leaves_name_absent() {
        let contact = Contact::from_address_book(&AddressBook::default(), "BEGIN:VCARD");
        assert!(contact.name.is_none());
        assert!(contact.email.is_none());
        assert!(contact.is_valid());
    }

    #[test]
    fn raw_fallback_only_sets_raw_code() {
        let contact = Contact::from_raw("https://example.com/badge/17");
        assert_eq!(contact.field(ContactField::RawCode), Some("https://example.com/badge/17"));
        assert!(contact.field(ContactField::Name).is_none());
    }
}

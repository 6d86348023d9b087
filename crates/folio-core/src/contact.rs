//! Contact form validation.
//!
//! The site has no backend: a complete form becomes a `mailto:` link to the
//! profile's address.

use std::fmt;

use crate::error::{FolioError, FolioResult};

/// Alert shown when a field is left blank.
pub const INCOMPLETE_FORM_ALERT: &str = "Harap lengkapi semua field!";

/// Toast shown once the mail client was handed the message.
pub const MESSAGE_READY_NOTICE: &str = "Pesan siap dikirim melalui email!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The form control's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Blank (empty or whitespace-only) fields, in form order.
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> FolioResult<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FolioError::IncompleteForm(missing))
        }
    }

    /// `mailto:` link carrying the form to `recipient`.
    pub fn mailto(&self, recipient: &str) -> FolioResult<String> {
        self.validate()?;
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(self.subject.trim()),
            urlencoding::encode(&body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            subject: "Kolaborasi".into(),
            message: "Halo Rakha".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let mut form = filled();
        form.set(ContactField::Email, "   ");
        form.set(ContactField::Message, "");
        assert_eq!(form.missing(), vec![ContactField::Email, ContactField::Message]);
        assert!(matches!(form.validate(), Err(FolioError::IncompleteForm(_))));
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = filled().mailto("rakha@example.com").unwrap();
        assert!(link.starts_with("mailto:rakha@example.com?subject=Kolaborasi&body="));
        assert!(link.contains("Halo%20Rakha"));
        assert!(link.contains("%0A%0ABudi%20%3Cbudi%40example.com%3E"));
    }

    #[test]
    fn mailto_refuses_incomplete_form() {
        assert!(ContactForm::default().mailto("x@example.com").is_err());
    }
}

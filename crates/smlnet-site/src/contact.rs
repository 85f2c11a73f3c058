//! The contact form and its `mailto:` mechanism.
//!
//! Nothing here performs I/O. A valid submission turns into a `mailto:`
//! link for the visitor's own mail client; the site never stores or
//! transmits the form contents itself.

use thiserror::Error;

use smlnet_core::i18n::{BilingualText, Language};
use smlnet_core::uri;

use crate::catalog;
use crate::config::SiteConfig;

/// Input caps, matching the form's field limits.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Services a visitor can ask about, the options of the form's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    WebDevelopment,
    WebHosting,
    Maintenance,
    Other,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::WebDevelopment,
        Service::WebHosting,
        Service::Maintenance,
        Service::Other,
    ];

    /// The option label shown in the form and echoed into the inquiry
    /// mail.
    pub fn label(&self, language: Language) -> &'static str {
        self.text().resolve(language)
    }

    fn text(&self) -> &'static BilingualText {
        match self {
            Service::WebDevelopment => &catalog::contact::SERVICE_WEB_DEVELOPMENT,
            Service::WebHosting => &catalog::contact::SERVICE_WEB_HOSTING,
            Service::Maintenance => &catalog::contact::SERVICE_MAINTENANCE,
            Service::Other => &catalog::contact::SERVICE_OTHER,
        }
    }
}

/// Required fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Why a submission was refused. Validation has no side effects, so a
/// refused form loses nothing the visitor typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.as_str())]
    MissingField(Field),

    #[error("email address must contain '@'")]
    InvalidEmail,

    #[error("{} exceeds {max} characters", field.as_str())]
    TooLong { field: Field, max: usize },
}

impl FormError {
    /// Visitor-facing description, resolved by the caller's language.
    pub fn message(&self) -> &'static BilingualText {
        // The site shows one generic validation toast for every case.
        &catalog::contact::ERROR_FIELDS
    }
}

/// A contact form submission. Field values are kept as typed; trimming
/// happens at validation and when the mail is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: Option<Service>,
    pub message: String,
}

impl ContactForm {
    /// Check the submission: required fields present after trimming, the
    /// email shaped like an address, every input within the form's caps.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField(Field::Name));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField(Field::Email));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField(Field::Message));
        }
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(FormError::TooLong {
                field: Field::Name,
                max: MAX_NAME_LEN,
            });
        }
        if self.email.chars().count() > MAX_EMAIL_LEN {
            return Err(FormError::TooLong {
                field: Field::Email,
                max: MAX_EMAIL_LEN,
            });
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(FormError::TooLong {
                field: Field::Message,
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }

    /// Build the `mailto:` link that opens the visitor's mail client with
    /// the inquiry prefilled. Subject and body are percent-encoded; a
    /// submission without a service picked reads "General" in the subject
    /// and "Not specified" in the body.
    pub fn mailto(&self, config: &SiteConfig, language: Language) -> Result<String, FormError> {
        self.validate()?;

        let service_label = self.service.map(|service| service.label(language));
        let subject = format!(
            "Website Inquiry from {} \u{2014} {}",
            self.name.trim(),
            service_label.unwrap_or("General"),
        );
        let body = format!(
            "Name: {}\nEmail: {}\nService: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            service_label.unwrap_or("Not specified"),
            self.message.trim(),
        );

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            config.contact_email,
            uri::encode_component(&subject),
            uri::encode_component(&body),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jan de Vries".to_owned(),
            email: "jan@example.com".to_owned(),
            service: Some(Service::WebHosting),
            message: "I need a website.".to_owned(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_owned();
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Name)));

        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Email)));

        let mut form = valid_form();
        form.message = "\n\t".to_owned();
        assert_eq!(
            form.validate(),
            Err(FormError::MissingField(Field::Message))
        );
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut form = valid_form();
        form.email = "jan.example.com".to_owned();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn over_long_fields_are_rejected() {
        let mut form = valid_form();
        form.name = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            form.validate(),
            Err(FormError::TooLong {
                field: Field::Name,
                max: MAX_NAME_LEN,
            })
        );

        let mut form = valid_form();
        form.message = "y".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            form.validate(),
            Err(FormError::TooLong {
                field: Field::Message,
                max: MAX_MESSAGE_LEN,
            })
        );
    }

    #[test]
    fn field_at_the_cap_passes() {
        let mut form = valid_form();
        form.message = "z".repeat(MAX_MESSAGE_LEN);
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn mailto_matches_the_site_format() {
        let form = ContactForm {
            name: "Jan".to_owned(),
            email: "jan@example.com".to_owned(),
            service: None,
            message: "Hello".to_owned(),
        };
        let link = form
            .mailto(&SiteConfig::default(), Language::En)
            .unwrap();
        assert_eq!(
            link,
            "mailto:samueljacobsmaart@gmail.com\
             ?subject=Website%20Inquiry%20from%20Jan%20%E2%80%94%20General\
             &body=Name%3A%20Jan%0AEmail%3A%20jan%40example.com%0AService%3A%20Not%20specified%0A%0AMessage%3A%0AHello"
        );
    }

    #[test]
    fn mailto_uses_the_localized_service_label() {
        let mut form = valid_form();
        form.service = Some(Service::WebDevelopment);
        let link = form.mailto(&SiteConfig::default(), Language::Nl).unwrap();
        assert!(link.contains(&uri::encode_component("Website Ontwikkeling")));
    }

    #[test]
    fn mailto_trims_typed_fields() {
        let mut form = valid_form();
        form.name = "  Jan  ".to_owned();
        let link = form.mailto(&SiteConfig::default(), Language::En).unwrap();
        assert!(link.contains("subject=Website%20Inquiry%20from%20Jan%20"));
    }

    #[test]
    fn invalid_form_builds_no_link() {
        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(
            form.mailto(&SiteConfig::default(), Language::En),
            Err(FormError::MissingField(Field::Email))
        );
    }

    #[test]
    fn service_labels_are_localized() {
        assert_eq!(Service::Other.label(Language::En), "Other");
        assert_eq!(Service::Other.label(Language::Nl), "Anders");
        assert_eq!(
            Service::Maintenance.label(Language::Nl),
            "Onderhoud & Support"
        );
    }

    #[test]
    fn every_dropdown_option_has_both_labels() {
        for service in Service::ALL {
            for language in Language::ALL {
                assert!(!service.label(language).is_empty());
            }
        }
    }
}

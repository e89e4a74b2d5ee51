pub mod form;

use std::collections::BTreeMap;

use gloo_net::http::Request;
use thiserror::Error;

use crate::config;

pub const SUBJECTS: &[&str] = &[
    "Web Development",
    "Mobile Apps",
    "UI/UX Design",
    "Digital Marketing",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not reach the form relay: {0}")]
    Network(String),
    #[error("form relay answered with status {status}")]
    Rejected { status: u16 },
}

impl Inquiry {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Please tell us your name");
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Please enter your email");
        } else if !looks_like_email(self.email.trim()) {
            errors.insert(Field::Email, "That email doesn't look right");
        }
        if !SUBJECTS.contains(&self.subject.as_str()) {
            errors.insert(Field::Subject, "Please pick a subject");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Please write a short message");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// `application/x-www-form-urlencoded` body, visible fields first, then
    /// the relay's control fields.
    pub fn encode(&self) -> String {
        let relay_subject = format!("New inquiry: {}", self.subject);
        let pairs = [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("phone", self.phone.trim()),
            ("subject", self.subject.as_str()),
            ("message", self.message.trim()),
            ("_subject", relay_subject.as_str()),
            ("_template", "table"),
            ("_captcha", "false"),
            ("_next", config::THANK_YOU_URL),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Exactly one `@`, something before it, and a dotted domain after it.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

pub async fn submit(inquiry: &Inquiry) -> Result<(), SubmitError> {
    let response = Request::post(config::get_form_endpoint())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(inquiry.encode())
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Inquiry {
        Inquiry {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            subject: "Web Development".to_string(),
            message: "We need a new storefront.".to_string(),
        }
    }

    #[test]
    fn test_complete_inquiry_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn test_empty_inquiry_flags_every_required_field() {
        let errors = Inquiry::default().validate().unwrap_err();
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Email).is_some());
        assert!(errors.get(Field::Subject).is_some());
        assert!(errors.get(Field::Message).is_some());
        assert!(errors.get(Field::Phone).is_none());
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut inquiry = complete();
        inquiry.name = "   ".to_string();
        inquiry.message = "\n\t".to_string();
        let errors = inquiry.validate().unwrap_err();
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Message).is_some());
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn test_subject_must_come_from_the_option_list() {
        let mut inquiry = complete();
        inquiry.subject = "Free pizza".to_string();
        assert_eq!(
            inquiry.validate().unwrap_err().get(Field::Subject),
            Some("Please pick a subject")
        );
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last+tag@studio.example.org"] {
            assert!(looks_like_email(good), "{}", good);
        }
        for bad in ["", "plain", "@example.com", "ada@", "ada@example", "a@@b.com", "a@b@c.com", "ada @example.com", "ada@.com", "ada@example."] {
            assert!(!looks_like_email(bad), "{}", bad);
        }
    }

    #[test]
    fn test_clearing_a_field_error() {
        let mut errors = Inquiry::default().validate().unwrap_err();
        errors.clear(Field::Name);
        assert!(errors.get(Field::Name).is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_encoded_body_has_relay_fields() {
        let mut inquiry = complete();
        inquiry.message = "Budget: 10k & up".to_string();
        let body = inquiry.encode();

        assert!(body.starts_with("name=Ada%20Lovelace&email=ada%40example.com&phone=&subject=Web%20Development"));
        assert!(body.contains("message=Budget%3A%2010k%20%26%20up"));
        assert!(body.contains("_subject=New%20inquiry%3A%20Web%20Development"));
        assert!(body.contains("_template=table"));
        assert!(body.contains("_captcha=false"));
        assert!(body.ends_with(&format!("_next={}", urlencoding::encode(config::THANK_YOU_URL))));
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::Rejected { status: 422 }.to_string(),
            "form relay answered with status 422"
        );
        assert_eq!(
            SubmitError::Network("offline".to_string()).to_string(),
            "could not reach the form relay: offline"
        );
    }
}

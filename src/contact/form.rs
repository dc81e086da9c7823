use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

use crate::content::services::SERVICES;

pub const OTHER_SERVICE: &str = "other";

// Dot-separated local atoms ending in a non-quote, then one or more
// domain labels that start alphanumeric, then a TLD of two letters or more.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.chars().count() < 2 {
            errors.insert(Field::Name, "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email");
        }
        if !is_known_service(&self.service) {
            errors.insert(Field::Service, "Please select a service");
        }
        if self.message.chars().count() < 10 {
            errors.insert(Field::Message, "Message must be at least 10 characters");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = self.phone.trim();
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            service: self.service.clone(),
            message: self.message.clone(),
        })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_known_service(value: &str) -> bool {
    value == OTHER_SERVICE || SERVICES.iter().any(|s| s.slug == value)
}

/// `(value, label)` pairs for the service picker, in display order.
pub fn service_options() -> Vec<(&'static str, &'static str)> {
    SERVICES
        .iter()
        .map(|s| (s.slug, s.title))
        .chain(std::iter::once((OTHER_SERVICE, "Other")))
        .collect()
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
    pub errors: FieldErrors,
}

pub enum FormAction {
    Edit(Field, String),
    Rejected(FieldErrors),
    Submitting,
    Delivered,
    Failed(String),
    SendAnother,
}

impl ContactForm {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => {
                self.fields.set(field, value);
                self.errors.remove(&field);
            }
            FormAction::Rejected(errors) => {
                self.errors = errors;
            }
            FormAction::Submitting => {
                self.errors.clear();
                self.status = SubmitStatus::Submitting;
            }
            FormAction::Delivered => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Success;
            }
            FormAction::Failed(reason) => {
                self.status = SubmitStatus::Error(reason);
            }
            FormAction::SendAnother => {
                self.status = SubmitStatus::Idle;
            }
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactFields {
        ContactFields {
            name: "Jo".into(),
            email: "a@b.co".into(),
            phone: String::new(),
            service: "web-development".into(),
            message: "1234567890".into(),
        }
    }

    #[test]
    fn minimal_valid_form_passes() {
        let submission = valid().validate().unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn short_name_and_message_fail() {
        let fields = ContactFields {
            name: "J".into(),
            message: "123456789".into(),
            ..valid()
        };
        let errors = fields.validate().unwrap_err();
        assert_eq!(errors.get(&Field::Name), Some(&"Name must be at least 2 characters"));
        assert_eq!(errors.get(&Field::Message), Some(&"Message must be at least 10 characters"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let fields = ContactFields { name: "é".into(), ..valid() };
        assert!(fields.validate().is_err());
        let fields = ContactFields { name: "Zoë".into(), ..valid() };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("jane.doe+news@mail.example.org"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_dots_and_hyphens_are_placed_strictly() {
        assert!(is_valid_email("o'brien@example.com"));
        assert!(is_valid_email("jane@mail-server.example.co"));
        assert!(!is_valid_email(".jane@example.com"));
        assert!(!is_valid_email("jane.@example.com"));
        assert!(!is_valid_email("ja..ne@example.com"));
        assert!(!is_valid_email("jane@-example.com"));
        assert!(!is_valid_email("jane@example..com"));

        let errors = ContactFields { email: "ja..ne@example.com".into(), ..valid() }
            .validate()
            .unwrap_err();
        assert!(errors.contains_key(&Field::Email));
    }

    #[test]
    fn service_must_be_listed_or_other() {
        assert!(is_known_service("other"));
        assert!(is_known_service("ui-ux-design"));
        assert!(!is_known_service(""));
        assert!(!is_known_service("plumbing"));

        let errors = ContactFields { service: String::new(), ..valid() }.validate().unwrap_err();
        assert_eq!(errors.get(&Field::Service), Some(&"Please select a service"));
    }

    #[test]
    fn options_end_with_other() {
        let options = service_options();
        assert_eq!(options.len(), SERVICES.len() + 1);
        assert_eq!(options.last(), Some(&("other", "Other")));
    }

    #[test]
    fn phone_is_optional_and_trimmed() {
        let submission = ContactFields { phone: "  +1 555 0100 ".into(), ..valid() }
            .validate()
            .unwrap();
        assert_eq!(submission.phone.as_deref(), Some("+1 555 0100"));
        let submission = ContactFields { phone: "   ".into(), ..valid() }.validate().unwrap();
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn editing_clears_only_that_error() {
        let mut form = ContactForm::default();
        let errors = form.fields.validate().unwrap_err();
        form.apply(FormAction::Rejected(errors));
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Email).is_some());

        form.apply(FormAction::Edit(Field::Name, "A".into()));
        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Email).is_some());
        assert_eq!(form.fields.name, "A");
    }

    #[test]
    fn success_resets_fields_and_send_another_returns_to_idle() {
        let mut form = ContactForm { fields: valid(), ..Default::default() };
        form.apply(FormAction::Submitting);
        assert!(form.is_submitting());
        form.apply(FormAction::Delivered);
        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form.fields, ContactFields::default());
        form.apply(FormAction::SendAnother);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_what_the_user_typed() {
        let mut form = ContactForm { fields: valid(), ..Default::default() };
        form.apply(FormAction::Submitting);
        form.apply(FormAction::Failed("The request timed out. Please try again.".into()));
        assert_eq!(form.fields, valid());
        assert_eq!(
            form.status,
            SubmitStatus::Error("The request timed out. Please try again.".into())
        );
    }
}

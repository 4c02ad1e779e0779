use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use regex::Regex;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Dotted domain with an alphabetic TLD, restricted local-part characters.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Raw inquiry fields as posted by the reservation form.
///
/// Missing keys become empty strings so every rule still runs and reports.
#[derive(Validate, Debug, Clone, Default)]
pub struct SubmitInquiryInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    pub phone: String,
    #[validate(length(min = 1, message = "Please select an event type."))]
    pub event_type: String,
    pub date: String,
    pub message: String,
}

impl SubmitInquiryInput {
    pub fn from_fields(raw: &HashMap<String, String>) -> Self {
        let field = |key: &str| raw.get(key).cloned().unwrap_or_default();

        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            event_type: field("eventType"),
            date: field("date"),
            message: field("message"),
        }
    }

    /// Runs every rule, then hands back the typed inquiry.
    pub fn into_inquiry(self) -> Result<Inquiry, ValidationErrors> {
        self.validate()?;

        Ok(Inquiry {
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            event_type: self.event_type,
            date: non_empty(self.date),
            message: non_empty(self.message),
        })
    }
}

/// A validated inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_type: String,
    pub date: Option<String>,
    pub message: Option<String>,
}

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !email.starts_with('.')
        && !email.contains("..")
        && RE_EMAIL.is_match(email)
        && email.validate_email()
    {
        return Ok(());
    }

    let mut error = ValidationError::new("email");
    error.message = Some(Cow::from("Please enter a valid email address."));
    Err(error)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Groups validation issues by form field name.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, issues) in errors.field_errors() {
        let messages = grouped.entry(wire_name(&field).to_owned()).or_default();
        for issue in issues {
            match &issue.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(issue.code.to_string()),
            }
        }
    }

    grouped
}

fn wire_name(field: &str) -> &str {
    match field {
        "event_type" => "eventType",
        other => other,
    }
}

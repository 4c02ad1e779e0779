use std::collections::BTreeMap;

use serde::Serialize;

use crate::{InquiryError, field_errors};

pub const VALIDATION_MESSAGE: &str = "Please correct the highlighted fields.";
pub const NOT_CONFIGURED_MESSAGE: &str = "Email service is not configured. Please try again later.";
pub const DELIVERY_MESSAGE: &str =
    "We could not send your inquiry at this time. Please try again or contact us directly.";

/// Outcome reported back to the submitter. Never carries internal detail.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
}

impl InquiryResult {
    pub fn delivered() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_owned()),
            field_errors: None,
        }
    }
}

impl From<InquiryError> for InquiryResult {
    fn from(value: InquiryError) -> Self {
        match value {
            InquiryError::Validate(errors) => Self {
                field_errors: Some(field_errors(&errors)),
                ..Self::failed(VALIDATION_MESSAGE)
            },
            InquiryError::NotConfigured => Self::failed(NOT_CONFIGURED_MESSAGE),
            InquiryError::Render(_) | InquiryError::Delivery(_) => Self::failed(DELIVERY_MESSAGE),
        }
    }
}

impl From<Result<(), InquiryError>> for InquiryResult {
    fn from(value: Result<(), InquiryError>) -> Self {
        match value {
            Ok(()) => Self::delivered(),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use mysticalbeach_notification::SendError;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_serializes_without_extras() {
        let value = serde_json::to_value(InquiryResult::delivered()).unwrap();

        assert_eq!(value, json!({ "success": true }));
    }

    #[test]
    fn test_delivery_failure_hides_status() {
        let result = InquiryResult::from(InquiryError::from(SendError::Rejected {
            status: 500,
            body: "internal provider stack trace".to_owned(),
        }));

        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({ "success": false, "error": DELIVERY_MESSAGE })
        );
    }

    #[test]
    fn test_provider_not_configured_maps_to_configuration_message() {
        let result = InquiryResult::from(InquiryError::from(SendError::NotConfigured));

        assert_eq!(result.error.as_deref(), Some(NOT_CONFIGURED_MESSAGE));
        assert_eq!(result.field_errors, None);
    }
}

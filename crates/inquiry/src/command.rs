use std::collections::HashMap;

use mysticalbeach_notification::{Email, Mailer};

use crate::{InquiryError, InquiryResult, SubmitInquiryInput};

#[derive(Clone)]
pub struct Command<M: Mailer> {
    pub mailer: M,
    /// Operator mailbox receiving every inquiry.
    pub contact_address: String,
}

impl<M: Mailer> Command<M> {
    pub fn new(mailer: M, contact_address: impl Into<String>) -> Self {
        Self {
            mailer,
            contact_address: contact_address.into(),
        }
    }

    pub async fn submit(&self, raw: &HashMap<String, String>) -> InquiryResult {
        self.try_submit(raw).await.into()
    }

    /// Validate, render and deliver one inquiry. Every error is terminal: the
    /// provider is called at most once.
    #[tracing::instrument(skip_all, fields(event_type))]
    pub async fn try_submit(&self, raw: &HashMap<String, String>) -> Result<(), InquiryError> {
        let inquiry = SubmitInquiryInput::from_fields(raw)
            .into_inquiry()
            .inspect_err(|errors| {
                let fields = errors
                    .field_errors()
                    .into_keys()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>();
                tracing::info!(?fields, "Inquiry rejected by validation");
            })?;

        tracing::Span::current().record("event_type", inquiry.event_type.as_str());

        if !self.mailer.is_configured() {
            tracing::error!("Inquiry not delivered: email provider api key is missing");
            return Err(InquiryError::NotConfigured);
        }

        let html = inquiry
            .render_notification()
            .inspect_err(|err| tracing::error!(error = %err, "Failed to render inquiry"))?;

        self.mailer
            .send(Email {
                to: vec![self.contact_address.to_owned()],
                reply_to: Some(inquiry.email.to_owned()),
                subject: inquiry.subject(),
                html,
            })
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Failed to deliver inquiry"))?;

        tracing::info!("Inquiry delivered");

        Ok(())
    }
}

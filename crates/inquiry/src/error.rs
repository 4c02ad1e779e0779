use mysticalbeach_notification::SendError;

#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("email service is not configured")]
    NotConfigured,

    #[error("failed to render inquiry notification: {0}")]
    Render(#[from] askama::Error),

    #[error("{0}")]
    Delivery(SendError),
}

impl From<SendError> for InquiryError {
    fn from(value: SendError) -> Self {
        match value {
            SendError::NotConfigured => Self::NotConfigured,
            other => Self::Delivery(other),
        }
    }
}

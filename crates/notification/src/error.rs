#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("email provider api key is not configured")]
    NotConfigured,

    #[error("email provider rejected the request with status {status}")]
    Rejected { status: u16, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

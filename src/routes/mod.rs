use axum::{
    Router,
    routing::{get, post},
};
use mysticalbeach_notification::EmailService;
use tower_http::trace::TraceLayer;

mod health;
mod inquiry;

#[derive(Clone)]
pub struct AppState {
    pub inquiry_command: mysticalbeach_inquiry::Command<EmailService>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let email_service = EmailService::new(&config.email)?;
        let inquiry_command = mysticalbeach_inquiry::Command::new(
            email_service,
            config.email.contact_address.to_owned(),
        );

        Ok(Self { inquiry_command })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/inquiry", post(inquiry::action))
        .route("/inquiry/event-types", get(inquiry::event_types))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

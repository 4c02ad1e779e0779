use axum::Router;
use mysticalbeach::{
    AppState, Config,
    config::{LoggingConfig, ServerConfig},
};
use mysticalbeach_notification::EmailConfig;

pub fn config(endpoint: String, api_key: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        email: EmailConfig {
            api_key: api_key.map(str::to_owned),
            endpoint,
            from_address: "Mystical Beach <onboarding@resend.dev>".to_owned(),
            contact_address: "concierge@mysticalbeach.localhost".to_owned(),
        },
        logging: LoggingConfig::default(),
    }
}

/// Router wired to a mock provider listening on `server`.
pub fn app(server: &mockito::ServerGuard, api_key: Option<&str>) -> anyhow::Result<Router> {
    let state = AppState::new(config(format!("{}/emails", server.url()), api_key))?;

    Ok(mysticalbeach::router(state))
}

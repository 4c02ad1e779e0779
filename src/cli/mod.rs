pub mod server;

pub fn event_types() {
    for (position, label) in mysticalbeach_inquiry::EventType::labels().iter().enumerate() {
        tracing::info!(position = position + 1, "{label}");
    }
}

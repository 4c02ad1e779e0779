use askama::Template;

use crate::Inquiry;

/// Operator notice for a new consultation request. Absent optional fields
/// produce no row at all.
#[derive(askama::Template)]
#[template(path = "inquiry-notification.html")]
pub struct InquiryNotificationTemplate<'a> {
    pub inquiry: &'a Inquiry,
}

impl Inquiry {
    pub fn subject(&self) -> String {
        format!("New Inquiry from {} - {}", self.name, self.event_type)
    }

    pub fn render_notification(&self) -> Result<String, askama::Error> {
        InquiryNotificationTemplate { inquiry: self }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Sophia Laurent".to_string(),
            email: "sophia@example.com".to_string(),
            phone: Some("+1-555-0100".to_string()),
            event_type: "Mindful Union".to_string(),
            date: Some("2026-09-12".to_string()),
            message: Some("Sunset ceremony,\n80 guests.".to_string()),
        }
    }

    #[test]
    fn test_subject() {
        assert_eq!(
            inquiry().subject(),
            "New Inquiry from Sophia Laurent - Mindful Union"
        );
    }

    #[test]
    fn test_rows_in_fixed_order() {
        let html = inquiry().render_notification().unwrap();

        let positions = [
            "MYSTICAL BEACH",
            ">Name<",
            ">Email<",
            ">Phone<",
            ">Event Type<",
            ">Preferred Date<",
            ">Vision<",
            "submitted via mysticalbeach.com",
        ]
        .map(|needle| html.find(needle).unwrap());

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains(r#"href="mailto:sophia@example.com""#));
        assert!(html.contains("white-space:pre-line"));
        assert!(html.contains("Sunset ceremony,\n80 guests."));
    }

    #[test]
    fn test_absent_fields_have_no_row() {
        let html = Inquiry {
            phone: None,
            date: None,
            message: None,
            ..inquiry()
        }
        .render_notification()
        .unwrap();

        assert!(!html.contains(">Phone<"));
        assert!(!html.contains(">Preferred Date<"));
        assert!(!html.contains(">Vision<"));
        assert!(html.contains(">Event Type<"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = inquiry().render_notification().unwrap();
        let second = inquiry().render_notification().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_values_are_escaped() {
        let html = Inquiry {
            name: "<script>alert(1)</script>".to_string(),
            ..inquiry()
        }
        .render_notification()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;"));
    }
}

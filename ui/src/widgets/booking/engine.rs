//! Booking enquiry: field names, defaults and the confirmation text.
//!
//! Nothing is sent anywhere from here; the values are only echoed back.

use std::collections::HashMap;

use time::{macros::format_description, OffsetDateTime};

pub const FIELD_CHECK_IN: &str = "checkIn";
pub const FIELD_NIGHTS: &str = "nights";
pub const FIELD_GUESTS: &str = "guests";

pub const MAX_NIGHTS: u32 = 14;
pub const MAX_GUESTS: u32 = 6;

/// Today's UTC date as `YYYY-MM-DD`, used as both the default and the minimum
/// check-in date.
pub fn today_iso() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Submitted values, kept verbatim as the form reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub check_in: String,
    pub nights: String,
    pub guests: String,
}

impl BookingRequest {
    pub fn new(
        check_in: impl Into<String>,
        nights: impl Into<String>,
        guests: impl Into<String>,
    ) -> Self {
        Self {
            check_in: check_in.into(),
            nights: nights.into(),
            guests: guests.into(),
        }
    }

    /// Read the three fields out of a submitted form. Missing fields come
    /// through empty.
    pub fn from_form_values(values: &HashMap<String, String>) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            check_in: field(FIELD_CHECK_IN),
            nights: field(FIELD_NIGHTS),
            guests: field(FIELD_GUESTS),
        }
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Thank you for your interest!\n\nCheck-in: {}\nNights: {}\nGuests: {}\n\nWe will redirect you to our booking system.",
            self.check_in, self.nights, self.guests
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_echoes_all_three_values() {
        let values: HashMap<String, String> = [
            (FIELD_CHECK_IN, "2024-06-01"),
            (FIELD_NIGHTS, "3"),
            (FIELD_GUESTS, "2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let request = BookingRequest::from_form_values(&values);
        assert_eq!(request, BookingRequest::new("2024-06-01", "3", "2"));

        let message = request.confirmation_message();
        assert!(message.contains("Check-in: 2024-06-01"));
        assert!(message.contains("Nights: 3"));
        assert!(message.contains("Guests: 2"));
    }

    #[test]
    fn missing_fields_are_blank() {
        let request = BookingRequest::from_form_values(&HashMap::new());
        assert_eq!(request, BookingRequest::default());
        assert!(request.confirmation_message().contains("Nights: \n"));
    }

    #[test]
    fn today_is_an_iso_date() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}

use std::collections::HashMap;

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::core::platform;
use crate::t;

use super::engine::{
    today_iso, BookingRequest, FIELD_CHECK_IN, FIELD_GUESTS, FIELD_NIGHTS, MAX_GUESTS, MAX_NIGHTS,
};

#[component]
pub fn BookingForm() -> Element {
    let today = use_hook(today_iso);
    let mut check_in = use_signal(|| today.clone());
    let mut last_request = use_signal(|| Option::<BookingRequest>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let values: HashMap<String, String> = evt
            .values()
            .into_iter()
            .map(|(name, value)| (name, value.as_value()))
            .collect();
        let request = BookingRequest::from_form_values(&values);
        info!(?request, "booking request");

        let message = request.confirmation_message();
        if let Err(err) = platform::show_dialog(&message) {
            debug!("confirmation dialog unavailable ({err}): {message}");
        }
        last_request.set(Some(request));
    };

    rsx! {
        form {
            id: "bookingForm",
            class: "booking-form",
            onsubmit: on_submit,

            h2 { class: "booking-form__title", {t!("booking-title")} }

            div { class: "form-group",
                label { r#for: FIELD_CHECK_IN, {t!("booking-check-in")} }
                input {
                    id: FIELD_CHECK_IN,
                    name: FIELD_CHECK_IN,
                    r#type: "date",
                    min: "{today}",
                    value: "{check_in}",
                    oninput: move |evt: FormEvent| check_in.set(evt.value()),
                }
            }

            div { class: "form-group",
                label { r#for: FIELD_NIGHTS, {t!("booking-nights")} }
                select { id: FIELD_NIGHTS, name: FIELD_NIGHTS,
                    { (1..=MAX_NIGHTS).map(|n| rsx! {
                        option { key: "{n}", value: "{n}", selected: n == 1, "{n}" }
                    })}
                }
            }

            div { class: "form-group",
                label { r#for: FIELD_GUESTS, {t!("booking-guests")} }
                select { id: FIELD_GUESTS, name: FIELD_GUESTS,
                    { (1..=MAX_GUESTS).map(|n| rsx! {
                        option { key: "{n}", value: "{n}", selected: n == 2, "{n}" }
                    })}
                }
            }

            button { r#type: "submit", class: "btn btn-primary", {t!("booking-submit")} }

            if last_request().is_some() {
                p { class: "booking-form__status", role: "status", {t!("booking-received")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_uses_today_as_minimum_check_in() {
        crate::i18n::init();
        let today = today_iso();
        let html = dioxus_ssr::render_element(rsx! { BookingForm {} });
        assert!(html.contains("id=\"bookingForm\""));
        assert!(html.contains(&format!("min=\"{today}\"")));
        assert!(!html.contains("booking-form__status"));
    }
}

use dioxus::prelude::*;

use crate::components::{use_reveal_group, AnchorLink, Reveal};
use crate::core::config::{site, SiteConfig};
use crate::t;
use crate::widgets::booking::BookingForm;
use crate::widgets::hero::HeroSlider;

const INTRO_IMAGE: &str = "/images/intro.jpg";

/// Ids of every element on the landing page that fades in on scroll.
fn reveal_ids(config: &SiteConfig) -> Vec<String> {
    let mut ids = vec![
        "intro-content".to_string(),
        "intro-image".to_string(),
        "apartments-header".to_string(),
    ];
    ids.extend(config.apartments.iter().map(|apt| format!("apartment-{}", apt.id)));
    ids.push("amenities-header".to_string());
    ids.extend((0..config.amenities.len()).map(|i| format!("amenity-{i}")));
    ids
}

#[component]
pub fn Home() -> Element {
    let config = site();
    use_reveal_group(reveal_ids(config));

    rsx! {
        section { id: "hero", class: "hero",
            HeroSlider { slides: config.hero_slides.clone(),
                h1 { class: "hero-title", {t!("hero-title")} }
                p { class: "hero-subtitle", {t!("hero-subtitle")} }
                AnchorLink { href: "#booking", class: "btn btn-primary hero-cta", {t!("hero-cta")} }
            }
        }

        section { id: "booking", class: "booking-section",
            div { class: "container", BookingForm {} }
        }

        section { id: "about", class: "intro section",
            div { class: "container intro-grid",
                Reveal { id: "intro-content", class: "intro-content",
                    h2 { class: "section-title", {t!("intro-title")} }
                    p { {t!("intro-body")} }
                }
                Reveal { id: "intro-image", class: "intro-image",
                    img { src: INTRO_IMAGE, alt: t!("intro-image-alt"), loading: "lazy" }
                }
            }
        }

        section { id: "apartments", class: "apartments section",
            div { class: "container",
                Reveal { id: "apartments-header", class: "section-header",
                    h2 { class: "section-title", {t!("apartments-title")} }
                    p { class: "section-subtitle", {t!("apartments-subtitle")} }
                }
                div { class: "apartments-grid",
                    for apt in config.apartments.iter() {
                        Reveal {
                            key: "{apt.id}",
                            id: format!("apartment-{}", apt.id),
                            class: "apartment-card",
                            div { class: "apartment-image",
                                img { src: "{apt.image.src}", alt: "{apt.image.alt}", loading: "lazy" }
                            }
                            div { class: "apartment-info",
                                h3 { "{apt.name}" }
                                p { "{apt.summary}" }
                                span { class: "apartment-guests",
                                    span { class: "material-icons", "group" }
                                    {t!("apartment-guests", count = apt.guests)}
                                }
                            }
                        }
                    }
                }
            }
        }

        section { id: "amenities", class: "amenities section",
            div { class: "container",
                Reveal { id: "amenities-header", class: "section-header",
                    h2 { class: "section-title", {t!("amenities-title")} }
                    p { class: "section-subtitle", {t!("amenities-subtitle")} }
                }
                div { class: "amenities-grid",
                    for (index, amenity) in config.amenities.iter().enumerate() {
                        Reveal {
                            key: "{index}",
                            id: format!("amenity-{index}"),
                            class: "amenity-card",
                            span { class: "material-icons amenity-icon", "{amenity.icon}" }
                            h3 { "{amenity.title}" }
                            p { "{amenity.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn reveal_ids_are_unique_and_cover_every_card() {
        let config = site();
        let ids = reveal_ids(config);
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.len(), 4 + config.apartments.len() + config.amenities.len());
    }

    #[test]
    fn home_renders_every_section() {
        crate::i18n::init();
        let html = dioxus_ssr::render_element(rsx! { Home {} });
        for id in ["hero", "booking", "about", "apartments", "amenities"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section #{id}");
        }
        assert_eq!(
            html.matches("class=\"apartment-card\"").count(),
            site().apartments.len()
        );
        assert!(html.contains("id=\"bookingForm\""));
    }
}

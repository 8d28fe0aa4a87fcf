//! Site configuration: interaction thresholds plus the content collections the
//! pages render. Loaded once from the embedded `assets/site.json`.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|err| {
        warn!("{err}; falling back to built-in defaults");
        SiteConfig::default()
    })
});

/// Shared configuration for the whole app.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Header switches to its compact style past this offset (px).
    pub header_scroll_threshold: f64,
    /// Back-to-top button shows past this offset (px).
    pub back_to_top_threshold: f64,
    pub autoplay_interval_ms: u64,
    /// Horizontal travel a touch must exceed to count as a swipe (px).
    pub swipe_threshold_px: f64,
    /// Used for anchor scrolling when the header is missing or has no height.
    pub header_fallback_height: f64,
    /// Delay between reveals within one visibility batch.
    pub reveal_stagger_ms: u64,
    pub reveal_visible_ratio: f64,
    pub reveal_root_margin: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 100.0,
            back_to_top_threshold: 500.0,
            autoplay_interval_ms: 5000,
            swipe_threshold_px: 50.0,
            header_fallback_height: 80.0,
            reveal_stagger_ms: 100,
            reveal_visible_ratio: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// An image reference: hero slides and gallery entries both use this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Apartment {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub guests: u32,
    pub image: ImageItem,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Amenity {
    /// Material icon ligature name.
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub interaction: InteractionConfig,
    pub hero_slides: Vec<ImageItem>,
    pub gallery: Vec<ImageItem>,
    pub apartments: Vec<Apartment>,
    pub amenities: Vec<Amenity>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

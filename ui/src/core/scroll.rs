//! Scroll-position rules for the header, the back-to-top button and anchor
//! navigation.

use super::config::InteractionConfig;

pub fn header_is_scrolled(offset: f64, config: &InteractionConfig) -> bool {
    offset > config.header_scroll_threshold
}

pub fn back_to_top_visible(offset: f64, config: &InteractionConfig) -> bool {
    offset > config.back_to_top_threshold
}

/// CSS selector for an in-page anchor, or `None` when the link is not one
/// worth intercepting (`#` alone, or not a fragment at all).
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Page offset to scroll to so the target sits just below the header.
///
/// A missing or collapsed (zero-height) header falls back to the configured
/// height.
pub fn anchor_scroll_top(
    target_viewport_top: f64,
    page_offset: f64,
    header_height: Option<f64>,
    config: &InteractionConfig,
) -> f64 {
    let header = header_height
        .filter(|height| *height > 0.0)
        .unwrap_or(config.header_fallback_height);
    target_viewport_top + page_offset - header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        let config = InteractionConfig::default();
        assert!(!header_is_scrolled(100.0, &config));
        assert!(header_is_scrolled(100.5, &config));
        assert!(!back_to_top_visible(500.0, &config));
        assert!(back_to_top_visible(501.0, &config));
        assert!(!back_to_top_visible(0.0, &config));
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/gallery"), None);
        assert_eq!(anchor_selector("#booking"), Some("#booking"));
    }

    #[test]
    fn header_height_is_subtracted() {
        let config = InteractionConfig::default();
        assert_eq!(anchor_scroll_top(300.0, 1200.0, Some(72.0), &config), 1428.0);
        assert_eq!(anchor_scroll_top(300.0, 1200.0, None, &config), 1420.0);
        assert_eq!(anchor_scroll_top(300.0, 1200.0, Some(0.0), &config), 1420.0);
    }
}

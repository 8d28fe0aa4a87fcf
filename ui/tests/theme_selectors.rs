//! Guards the class names the components toggle at runtime. A renamed
//! selector would leave the header, slider or lightbox silently unstyled.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    // Header and mobile menu
    ".header.scrolled",
    ".nav.active",
    ".mobile-menu-toggle.active",
    ".lang-dropdown",
    ".current-lang",
    // Hero slider
    ".slide.active",
    ".slider-dot.active",
    ".slider-btn.prev",
    ".slider-btn.next",
    ".hero-content",
    // Booking
    ".booking-form",
    ".form-group",
    // Gallery and lightbox
    ".gallery-item",
    ".lightbox.active",
    ".lightbox-image",
    ".lightbox-overlay",
    // Back to top
    ".back-to-top.visible",
    "@media (max-width: 768px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in the theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn mobile_nav_slides_in_only_when_active() {
    let mobile = THEME_CSS
        .split("@media (max-width: 768px)")
        .nth(1)
        .expect("mobile media block");
    assert!(mobile.contains(".nav {"));
    assert!(mobile.contains(".nav.active"));
}

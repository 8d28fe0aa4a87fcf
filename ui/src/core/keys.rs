//! The handful of keys the site reacts to.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bound_keys_only() {
        assert_eq!(NavKey::from_key_name("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_key_name("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(NavKey::from_key_name("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_key_name("Enter"), NavKey::Other);
        assert_eq!(NavKey::from_key_name("arrowleft"), NavKey::Other);
    }
}

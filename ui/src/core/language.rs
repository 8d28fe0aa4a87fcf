//! The header language label. Selecting a language only changes the two-letter
//! badge; page content stays as it is.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageLabel {
    #[default]
    En,
    Gr,
}

impl LanguageLabel {
    pub const OPTIONS: [LanguageLabel; 2] = [LanguageLabel::En, LanguageLabel::Gr];

    /// Label for a dropdown entry's visible text. Anything other than
    /// "English" maps to Greek.
    pub fn from_selection(text: &str) -> Self {
        if text.trim() == "English" {
            Self::En
        } else {
            Self::Gr
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Gr => "GR",
        }
    }

    /// Text shown in the dropdown.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Gr => "Ελληνικά",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_maps_to_two_letter_code() {
        assert_eq!(LanguageLabel::from_selection("English").code(), "EN");
        assert_eq!(LanguageLabel::from_selection("Ελληνικά").code(), "GR");
        assert_eq!(LanguageLabel::from_selection(" English ").code(), "EN");
    }

    #[test]
    fn options_round_trip_through_their_display_names() {
        for option in LanguageLabel::OPTIONS {
            assert_eq!(LanguageLabel::from_selection(option.display_name()), option);
        }
    }

    #[test]
    fn unknown_entries_fall_back_to_greek() {
        assert_eq!(LanguageLabel::from_selection("Deutsch"), LanguageLabel::Gr);
        assert_eq!(LanguageLabel::default().code(), "EN");
    }
}

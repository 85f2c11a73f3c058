use crate::i18n::Language;

/// One piece of site copy with a value per language.
///
/// Entries are `const`-constructible so the whole catalog can live in
/// statics. Languages may be missing (or empty, which counts as missing);
/// resolution falls back through the default language to `""` and never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BilingualText {
    en: Option<&'static str>,
    nl: Option<&'static str>,
}

impl BilingualText {
    /// An entry with both languages present.
    pub const fn pair(en: &'static str, nl: &'static str) -> BilingualText {
        BilingualText {
            en: Some(en),
            nl: Some(nl),
        }
    }

    /// An entry with only English text, e.g. copy awaiting translation.
    pub const fn english(en: &'static str) -> BilingualText {
        BilingualText {
            en: Some(en),
            nl: None,
        }
    }

    /// An entry with no text at all. Resolves to `""`.
    pub const fn empty() -> BilingualText {
        BilingualText { en: None, nl: None }
    }

    /// The text for one language, if present.
    pub fn get(&self, language: Language) -> Option<&'static str> {
        match language {
            Language::En => self.en,
            Language::Nl => self.nl,
        }
    }

    /// Resolve for a language: the requested text, else the default
    /// language's, else `""`. An empty entry counts as missing.
    pub fn resolve(&self, language: Language) -> &'static str {
        match self.get(language) {
            Some(text) if !text.is_empty() => text,
            _ => self.get(Language::DEFAULT).unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_picks_the_requested_language() {
        let text = BilingualText::pair("Home", "Home");
        let greeting = BilingualText::pair("Hello", "Hallo");
        assert_eq!(greeting.resolve(Language::Nl), "Hallo");
        assert_eq!(greeting.resolve(Language::En), "Hello");
        assert_eq!(text.resolve(Language::Nl), "Home");
    }

    #[test]
    fn missing_language_falls_back_to_english() {
        let text = BilingualText::english("Hello");
        assert_eq!(text.resolve(Language::Nl), "Hello");
    }

    #[test]
    fn empty_entry_resolves_to_empty_string() {
        assert_eq!(BilingualText::empty().resolve(Language::Nl), "");
        assert_eq!(BilingualText::empty().resolve(Language::En), "");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let text = BilingualText::pair("Hello", "");
        assert_eq!(text.resolve(Language::Nl), "Hello");
    }

    #[test]
    fn get_does_not_fall_back() {
        let text = BilingualText::english("Hello");
        assert_eq!(text.get(Language::Nl), None);
        assert_eq!(text.get(Language::En), Some("Hello"));
    }
}

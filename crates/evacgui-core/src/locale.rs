//! Display strings for module titles and tool box labels.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    German,
}

/// Locale handle queried by modules for their display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Pick a language from a tag such as `de` or `en_US.UTF-8`.
    /// Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "de" => Self::new(Language::German),
            _ => Self::new(Language::English),
        }
    }

    pub fn module_pop_area_selector(&self) -> &'static str {
        match self.language {
            Language::English => "Population area editor",
            Language::German => "Bevölkerungsflächen-Editor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("de_DE.UTF-8").language, Language::German);
        assert_eq!(Locale::from_tag("DE").language, Language::German);
        assert_eq!(Locale::from_tag("en-US").language, Language::English);
        assert_eq!(Locale::from_tag("").language, Language::English);
    }

    #[test]
    fn test_titles_differ_per_language() {
        let en = Locale::new(Language::English);
        let de = Locale::new(Language::German);
        assert_ne!(en.module_pop_area_selector(), de.module_pop_area_selector());
    }
}

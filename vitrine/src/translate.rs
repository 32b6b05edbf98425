// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static label lookup for the two supported interface languages.

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English; used for every tag that is not French.
    #[default]
    En,
    /// French.
    Fr,
}

impl Language {
    /// Picks the language for a BCP 47 tag such as `"fr-CA"` or `"en"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("fr") => Self::Fr,
            _ => Self::En,
        }
    }

    /// Picks the language from the host's preference list, using the first entry.
    #[must_use]
    pub fn from_preferences<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().next().map(Self::from_tag).unwrap_or_default()
    }
}

// (key, English, French)
const LABELS: &[(&str, &str, &str)] = &[
    ("Facilitation graphique", "Graphic facilitation", "Facilitation graphique"),
    ("Illustration", "Illustration", "Illustration"),
    ("Facilitation", "Scribing", "Scribing"),
    ("Corporate", "Corporate", "Corporate"),
    ("Jeunesse", "Children", "Jeunesse"),
];

/// Translates a label key, falling back to the key itself.
#[must_use]
pub fn translate(language: Language, key: &str) -> &str {
    LABELS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, fr)| match language {
            Language::En => *en,
            Language::Fr => *fr,
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::{Language, translate};

    #[test]
    fn french_tags_are_detected() {
        assert_eq!(Language::from_tag("fr"), Language::Fr);
        assert_eq!(Language::from_tag("FR-ca"), Language::Fr);
        assert_eq!(Language::from_tag("en-GB"), Language::En);
        assert_eq!(Language::from_tag("f"), Language::En);
        assert_eq!(Language::from_preferences(["fr-FR", "en"]), Language::Fr);
        assert_eq!(Language::from_preferences([]), Language::En);
    }

    #[test]
    fn labels_translate_with_fallback() {
        assert_eq!(translate(Language::En, "Jeunesse"), "Children");
        assert_eq!(translate(Language::Fr, "Jeunesse"), "Jeunesse");
        assert_eq!(translate(Language::En, "Facilitation graphique"), "Graphic facilitation");
        assert_eq!(translate(Language::Fr, "blog"), "blog");
    }
}

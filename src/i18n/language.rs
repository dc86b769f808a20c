// ABOUTME: Supported display languages and lenient language code parsing
// ABOUTME: Accepts BCP 47 tags and POSIX locale strings such as de-DE or zh_CN.UTF-8
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language with a shipped catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// German
    De,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Italian
    It,
    /// Japanese (catalog code `jp`)
    Jp,
    /// Portuguese
    Pt,
    /// Chinese
    Zh,
}

impl Language {
    /// All languages, in catalog order
    pub const ALL: [Self; 8] = [
        Self::En,
        Self::De,
        Self::Es,
        Self::Fr,
        Self::It,
        Self::Jp,
        Self::Pt,
        Self::Zh,
    ];

    /// Parse a language code leniently
    ///
    /// Only the primary subtag is considered, so `"de-DE"`, `"de_AT.UTF-8"` and
    /// `"DE"` all give German. `"ja"` is accepted for Japanese.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "it" => Some(Self::It),
            "jp" | "ja" => Some(Self::Jp),
            "pt" => Some(Self::Pt),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Catalog code, also the value persisted under the language key
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Jp => "jp",
            Self::Pt => "pt",
            Self::Zh => "zh",
        }
    }

    /// Language name in the language itself
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::It => "Italiano",
            Self::Jp => "日本語",
            Self::Pt => "Português",
            Self::Zh => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catfood_core::constants::locales::SUPPORTED_LANGUAGES;

    #[test]
    fn test_codes_match_supported_list() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, SUPPORTED_LANGUAGES);
    }

    #[test]
    fn test_lenient_codes() {
        assert_eq!(Language::from_code("de-DE"), Some(Language::De));
        assert_eq!(Language::from_code("ja"), Some(Language::Jp));
        assert_eq!(Language::from_code("JP"), Some(Language::Jp));
        assert_eq!(Language::from_code("zh_CN.UTF-8"), Some(Language::Zh));
        assert_eq!(Language::from_code(" pt-BR "), Some(Language::Pt));
        assert_eq!(Language::from_code("C"), None);
        assert_eq!(Language::from_code(""), None);
    }
}

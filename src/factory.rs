//! Factory method: pluggable language localizers.
//!
//! Creators implement [`LocalizerFactory`], whose factory method builds their own
//! [`Localizer`] product. For callers that pick the language at runtime, [`Language`]
//! closes the set of variants and [`create_localizer`] dispatches over it.
//!
//! ```rust
//! use creational_patterns::factory::{FrenchLocalizerFactory, Language, Localizer, LocalizerFactory};
//!
//! let french = FrenchLocalizerFactory.create_localizer();
//! assert_eq!(french.localize("car"), "voiture");
//!
//! let spanish = "es".parse::<Language>().unwrap().create_localizer();
//! assert_eq!(spanish.localize("bike"), "bicicleta");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Translates messages into one language.
pub trait Localizer {
    /// Returns the translation of `msg`, or `msg` itself when none is known.
    fn localize<'a>(&'a self, msg: &'a str) -> &'a str;
}

/// Localizer backed by a fixed word table.
#[derive(Debug, Clone)]
struct Translations(HashMap<&'static str, &'static str>);

impl Translations {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Translations(entries.iter().copied().collect())
    }

    fn lookup<'a>(&'a self, msg: &'a str) -> &'a str {
        self.0.get(msg).copied().unwrap_or(msg)
    }
}

#[derive(Debug, Clone)]
pub struct FrenchLocalizer {
    translations: Translations,
}

impl FrenchLocalizer {
    pub fn new() -> Self {
        FrenchLocalizer {
            translations: Translations::new(&[
                ("car", "voiture"),
                ("bike", "bicyclette"),
                ("cycle", "cyclette"),
            ]),
        }
    }
}

impl Default for FrenchLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for FrenchLocalizer {
    fn localize<'a>(&'a self, msg: &'a str) -> &'a str {
        self.translations.lookup(msg)
    }
}

#[derive(Debug, Clone)]
pub struct SpanishLocalizer {
    translations: Translations,
}

impl SpanishLocalizer {
    pub fn new() -> Self {
        SpanishLocalizer {
            translations: Translations::new(&[
                ("car", "coche"),
                ("bike", "bicicleta"),
                ("cycle", "ciclo"),
            ]),
        }
    }
}

impl Default for SpanishLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for SpanishLocalizer {
    fn localize<'a>(&'a self, msg: &'a str) -> &'a str {
        self.translations.lookup(msg)
    }
}

/// Messages are already English; returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn localize<'a>(&'a self, msg: &'a str) -> &'a str {
        msg
    }
}

// -------------------------------------------------------------------------------------------------
// Creators
// -------------------------------------------------------------------------------------------------

/// Creator contract: each implementation decides which localizer its factory method builds.
pub trait LocalizerFactory {
    type Product: Localizer;

    fn create_localizer(&self) -> Self::Product;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchLocalizerFactory;

impl LocalizerFactory for FrenchLocalizerFactory {
    type Product = FrenchLocalizer;

    fn create_localizer(&self) -> FrenchLocalizer {
        FrenchLocalizer::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishLocalizerFactory;

impl LocalizerFactory for SpanishLocalizerFactory {
    type Product = SpanishLocalizer;

    fn create_localizer(&self) -> SpanishLocalizer {
        SpanishLocalizer::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizerFactory;

impl LocalizerFactory for EnglishLocalizerFactory {
    type Product = EnglishLocalizer;

    fn create_localizer(&self) -> EnglishLocalizer {
        EnglishLocalizer
    }
}

// -------------------------------------------------------------------------------------------------
// Language selection
// -------------------------------------------------------------------------------------------------

/// Languages with a known localizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    French,
    #[default]
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::French, Language::English, Language::Spanish];

    /// Builds the localizer for this language.
    pub fn create_localizer(self) -> Box<dyn Localizer + Send + Sync> {
        match self {
            Language::French => Box::new(FrenchLocalizerFactory.create_localizer()),
            Language::English => Box::new(EnglishLocalizerFactory.create_localizer()),
            Language::Spanish => Box::new(SpanishLocalizerFactory.create_localizer()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::French => "French",
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a language name matches no known localizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts English names or ISO 639-1 codes, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "french" | "fr" => Ok(Language::French),
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" => Ok(Language::Spanish),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Creates the localizer for `language`.
pub fn create_localizer(language: Language) -> Box<dyn Localizer + Send + Sync> {
    language.create_localizer()
}

//! Factory method example for creational-patterns.
//!
//! Run with: `cargo run --example factory_method [language...]`
//!
//! With no arguments every language is shown. Languages may be given by name or
//! ISO code, e.g. `cargo run --example factory_method fr es`.

use creational_patterns::factory::{
    create_localizer, EnglishLocalizerFactory, FrenchLocalizerFactory, Language, Localizer,
    LocalizerFactory, SpanishLocalizerFactory,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MESSAGES: [&str; 3] = ["car", "bike", "cycle"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // -------------------------------------------------------------------------
    // 1. Creator types
    // -------------------------------------------------------------------------
    let french = FrenchLocalizerFactory.create_localizer();
    let english = EnglishLocalizerFactory.create_localizer();
    let spanish = SpanishLocalizerFactory.create_localizer();

    for msg in MESSAGES {
        println!("Message: {msg}");
        println!("French: {}", french.localize(msg));
        println!("English: {}", english.localize(msg));
        println!("Spanish: {}", spanish.localize(msg));
        println!("{}", "-".repeat(30));
    }

    // -------------------------------------------------------------------------
    // 2. Language selected at runtime
    // -------------------------------------------------------------------------
    let requested: Vec<String> = std::env::args().skip(1).collect();
    let languages: Vec<Language> = if requested.is_empty() {
        Language::ALL.to_vec()
    } else {
        requested
            .iter()
            .filter_map(|name| match name.parse::<Language>() {
                Ok(language) => Some(language),
                Err(err) => {
                    error!(%err, "skipping language");
                    None
                }
            })
            .collect()
    };

    for language in languages {
        info!(%language, "creating localizer");
        let localizer = create_localizer(language);
        let words: Vec<&str> = MESSAGES.into_iter().map(|m| localizer.localize(m)).collect();
        println!("{language}: {}", words.join(", "));
    }
}

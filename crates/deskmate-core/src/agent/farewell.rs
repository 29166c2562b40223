//! Farewell catalog lookup and decoration.
//!
//! The farewell wording is never generated from the conversation: it is a
//! static catalog entry per persona, and only its language varies.

use deskmate_types::persona::{FALLBACK_EMOJI, FALLBACK_FAREWELL, RoutedPersona};

/// Trailing decoration appended to every farewell.
pub const DECORATION: &str = "💬✨";

/// Base sentence and emoji for the persona active at close.
///
/// A missing or uncatalogued persona gets the generic pair.
pub fn catalog_entry(persona: Option<&RoutedPersona>) -> (&'static str, &'static str) {
    match persona.and_then(RoutedPersona::known) {
        Some(p) => (p.farewell(), p.emoji()),
        None => (FALLBACK_FAREWELL, FALLBACK_EMOJI),
    }
}

/// `emoji + sentence + decoration`.
pub fn decorate(emoji: &str, sentence: &str) -> String {
    format!("{emoji} {sentence} {DECORATION}")
}

//! Support personas and the routing result that selects one.
//!
//! The router's answer is free text from the Completion Service. It is wrapped
//! in [`RoutedPersona`] so that the "label is not in the catalog" path is an
//! explicit variant instead of a silent lookup miss.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Farewell sentence used when no catalogued persona was assigned.
pub const FALLBACK_FAREWELL: &str = "It was a pleasure assisting you today. Take care!";

/// Emoji used when no catalogued persona was assigned.
pub const FALLBACK_EMOJI: &str = "💬";

/// One of the four catalogued support roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    OrderTracking,
    Refund,
    Return,
    GeneralSupport,
}

impl Persona {
    /// Every catalogued persona, in the order the router lists them.
    pub const ALL: [Persona; 4] = [
        Persona::OrderTracking,
        Persona::Refund,
        Persona::Return,
        Persona::GeneralSupport,
    ];

    /// The exact catalog label the router is expected to answer with.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::OrderTracking => "Order Tracking Agent",
            Persona::Refund => "Refund Agent",
            Persona::Return => "Return Agent",
            Persona::GeneralSupport => "General Support agent",
        }
    }

    /// Static closing sentence for this persona.
    pub fn farewell(&self) -> &'static str {
        match self {
            Persona::OrderTracking => "Glad I could help you track your order today.",
            Persona::Refund => "Your refund request is in good hands. Thank you for your patience!",
            Persona::Return => "Hope we made your return process easier!",
            Persona::GeneralSupport => "Thanks for reaching out. We’re always here for any help!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Persona::OrderTracking => "📦",
            Persona::Refund => "💸",
            Persona::Return => "🔄",
            Persona::GeneralSupport => "🤝",
        }
    }

    /// Whether the persona works from the customer's order facts.
    pub fn uses_order_facts(&self) -> bool {
        !matches!(self, Persona::GeneralSupport)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Persona {
    type Err = String;

    /// Exact match against the catalog labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("unknown persona label: '{s}'"))
    }
}

/// Outcome of routing: a catalogued persona, or the raw text the router produced.
///
/// An unrecognized label is still a valid assignment. Downstream prompt and
/// farewell building fall back to generic text for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RoutedPersona {
    Known(Persona),
    Unrecognized(String),
}

impl RoutedPersona {
    /// Classify raw router output. Surrounding whitespace is ignored; the rest
    /// must match a catalog label exactly.
    pub fn from_router_output(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<Persona>() {
            Ok(persona) => RoutedPersona::Known(persona),
            Err(_) => RoutedPersona::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn known(&self) -> Option<Persona> {
        match self {
            RoutedPersona::Known(p) => Some(*p),
            RoutedPersona::Unrecognized(_) => None,
        }
    }

    /// Label to display: the catalog label or the raw router text.
    pub fn label(&self) -> &str {
        match self {
            RoutedPersona::Known(p) => p.label(),
            RoutedPersona::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RoutedPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Persona> for RoutedPersona {
    fn from(persona: Persona) -> Self {
        RoutedPersona::Known(persona)
    }
}

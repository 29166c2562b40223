//! Support agents for Deskmate.
//!
//! - `AgentRouter`: classifies the first query of a session into a persona
//! - `PersonaAgent`: answers turns and renders the closing message
//! - `prompt` / `farewell`: the static prompt texts and farewell catalog

pub mod farewell;
pub mod persona;
pub mod prompt;
pub mod router;

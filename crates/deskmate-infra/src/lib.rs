//! Infrastructure layer for Deskmate.
//!
//! Contains implementations of the ports defined in `deskmate-core`: the
//! OpenAI-compatible Completion Service provider and the in-memory Order
//! Directory. Also loads `config.toml` and resolves secrets from the
//! environment.

pub mod config;
pub mod llm;
pub mod order;
pub mod secret;

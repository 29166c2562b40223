//! Shared domain types for Deskmate.
//!
//! This crate contains the core domain types used across the Deskmate support
//! desk: languages, personas, order records, sessions and turns, the LLM
//! request/response shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod language;
pub mod llm;
pub mod order;
pub mod persona;

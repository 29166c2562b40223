//! Completion Service abstractions for Deskmate.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `CompletionClient`: request defaults, timeout and tracing around one call

pub mod box_provider;
pub mod client;
pub mod provider;

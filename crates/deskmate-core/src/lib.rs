//! Business logic and port definitions for Deskmate.
//!
//! This crate defines the ports (`LlmProvider`, `OrderDirectory`) that the
//! infrastructure layer implements, plus the router, persona agent, and
//! session controller built on top of them. It depends only on
//! `deskmate-types`, never on `deskmate-infra`.

pub mod agent;
pub mod llm;
pub mod order;
pub mod session;

#[cfg(test)]
mod test_support;

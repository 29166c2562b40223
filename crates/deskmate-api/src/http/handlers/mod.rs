//! HTTP request handlers for the REST API.

pub mod meta;
pub mod session;

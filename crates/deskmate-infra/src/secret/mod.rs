//! Secret resolution for Deskmate.

pub mod env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("environment variable {var} is not set; export the Completion Service API key")]
    Missing { var: String },
}

//! Order Directory port.
//!
//! The directory is an external, read-only store of order facts keyed by
//! contact identifier. Implementations live in deskmate-infra.

use deskmate_types::order::OrderRecord;

/// Read-only lookup of order facts.
///
/// There is no error case: an unknown contact identifier yields the empty
/// record so the turn can still proceed.
pub trait OrderDirectory: Send + Sync {
    fn lookup(&self, contact_identifier: &str) -> OrderRecord;
}

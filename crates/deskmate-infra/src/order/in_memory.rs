//! In-memory Order Directory.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use deskmate_core::order::OrderDirectory;
use deskmate_types::order::OrderRecord;

use super::OrderDirectoryError;

/// Order facts keyed by contact identifier.
///
/// Keys are matched exactly: no case folding or trimming.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderDirectory {
    records: HashMap<String, OrderRecord>,
}

impl InMemoryOrderDirectory {
    pub fn new(records: HashMap<String, OrderRecord>) -> Self {
        Self { records }
    }

    /// The four demo contacts shipped with Deskmate.
    pub fn demo() -> Self {
        let entries = [
            (
                "john@example.com",
                "ORD12345",
                "Out for Delivery",
                (2025, 7, 6),
                "BlueDart",
                "https://track.bluedart.com/ORD12345",
                1299,
            ),
            (
                "alice@example.com",
                "ORD67890",
                "Shipped",
                (2025, 7, 8),
                "Delhivery",
                "https://track.delhivery.com/ORD67890",
                899,
            ),
            (
                "bob@example.com",
                "ORD54321",
                "Delivered",
                (2025, 7, 2),
                "Xpressbees",
                "https://xpressbees.com/track/ORD54321",
                1549,
            ),
            (
                "sara@example.com",
                "ORD98765",
                "Processing",
                (2025, 7, 10),
                "Ecom Express",
                "https://ecomexpress.in/track/ORD98765",
                2199,
            ),
        ];

        let records = entries
            .into_iter()
            .map(|(contact, order_id, status, (y, m, d), carrier, link, amount)| {
                let record = OrderRecord {
                    order_id: Some(order_id.to_string()),
                    status: Some(status.to_string()),
                    expected_delivery: NaiveDate::from_ymd_opt(y, m, d),
                    carrier: Some(carrier.to_string()),
                    tracking_link: Some(link.to_string()),
                    amount: Some(amount),
                };
                (contact.to_string(), record)
            })
            .collect();

        Self { records }
    }

    /// Load a `{ "contact": { ...record } }` JSON map.
    pub async fn from_json_file(path: &Path) -> Result<Self, OrderDirectoryError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| OrderDirectoryError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let records: HashMap<String, OrderRecord> =
            serde_json::from_str(&content).map_err(|source| OrderDirectoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), contacts = records.len(), "order directory loaded");
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl OrderDirectory for InMemoryOrderDirectory {
    fn lookup(&self, contact_identifier: &str) -> OrderRecord {
        self.records
            .get(contact_identifier)
            .cloned()
            .unwrap_or_default()
    }
}

//! Order facts looked up by contact identifier.

pub use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only fact sheet for a customer's order.
///
/// Every field is optional: an unknown contact yields `OrderRecord::default()`,
/// the empty record, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    /// Order total in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl OrderRecord {
    pub fn is_empty(&self) -> bool {
        *self == OrderRecord::default()
    }

    /// Textual form embedded into persona instructions.
    ///
    /// A JSON object of the known fields; the empty record renders as `{}`.
    pub fn to_prompt_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_renders_braces() {
        let record = OrderRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.to_prompt_text(), "{}");
    }

    #[test]
    fn test_prompt_text_contains_facts() {
        let record = OrderRecord {
            order_id: Some("ORD12345".to_string()),
            status: Some("Out for Delivery".to_string()),
            expected_delivery: NaiveDate::from_ymd_opt(2025, 7, 6),
            carrier: Some("BlueDart".to_string()),
            tracking_link: Some("https://track.bluedart.com/ORD12345".to_string()),
            amount: Some(1299),
        };
        let text = record.to_prompt_text();
        assert!(!record.is_empty());
        assert!(text.contains(r#""order_id":"ORD12345""#));
        assert!(text.contains(r#""expected_delivery":"2025-07-06""#));
        assert!(text.contains(r#""amount":1299"#));
    }

    #[test]
    fn test_partial_record_deserializes() {
        let record: OrderRecord = serde_json::from_str(r#"{"status":"Shipped"}"#).unwrap();
        assert_eq!(record.status.as_deref(), Some("Shipped"));
        assert!(record.carrier.is_none());
    }
}

//! Test doubles shared by the core unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use deskmate_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use deskmate_types::order::{NaiveDate, OrderRecord};

use crate::llm::provider::LlmProvider;
use crate::order::OrderDirectory;

/// Every request a scripted provider has received, in call order.
pub type RequestLog = Arc<Mutex<Vec<CompletionRequest>>>;

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

/// Provider that records requests and answers through a closure.
pub struct ScriptedProvider {
    log: RequestLog,
    respond: Responder,
}

impl ScriptedProvider {
    pub fn new(
        respond: impl Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    ) -> (Self, RequestLog) {
        let log = RequestLog::default();
        let provider = Self {
            log: Arc::clone(&log),
            respond: Box::new(respond),
        };
        (provider, log)
    }

    /// Behaves like the support desk's Completion Service: answers routing
    /// prompts with `route_to`, translation prompts with a tagged echo, and
    /// anything else with a reply to the last user message.
    pub fn desk(route_to: &'static str) -> (Self, RequestLog) {
        Self::new(move |request| {
            let last = request
                .messages
                .last()
                .map(|m| m.content.as_str())
                .unwrap_or_default();
            if last.contains("You are a routing assistant") {
                Ok(route_to.to_string())
            } else if last.starts_with("Translate this message") {
                Ok("  [translated]  ".to_string())
            } else {
                Ok(format!(" reply to: {last} "))
            }
        })
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.log.lock().unwrap().push(request.clone());
        let content = (self.respond)(request)?;
        Ok(CompletionResponse {
            id: "resp-scripted".to_string(),
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

/// Provider that never answers within a test-sized timeout.
pub struct SlowProvider {
    delay: Duration,
}

impl SlowProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl LlmProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tokio::time::sleep(self.delay).await;
        Ok(CompletionResponse {
            id: "resp-slow".to_string(),
            content: "too late".to_string(),
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

/// Order directory backed by a plain map.
#[derive(Default)]
pub struct MapDirectory {
    records: HashMap<String, OrderRecord>,
}

impl MapDirectory {
    pub fn with(mut self, contact: &str, record: OrderRecord) -> Self {
        self.records.insert(contact.to_string(), record);
        self
    }
}

impl OrderDirectory for MapDirectory {
    fn lookup(&self, contact_identifier: &str) -> OrderRecord {
        self.records
            .get(contact_identifier)
            .cloned()
            .unwrap_or_default()
    }
}

/// The record the demo directory holds for `john@example.com`.
pub fn john_record() -> OrderRecord {
    OrderRecord {
        order_id: Some("ORD12345".to_string()),
        status: Some("Out for Delivery".to_string()),
        expected_delivery: NaiveDate::from_ymd_opt(2025, 7, 6),
        carrier: Some("BlueDart".to_string()),
        tracking_link: Some("https://track.bluedart.com/ORD12345".to_string()),
        amount: Some(1299),
    }
}


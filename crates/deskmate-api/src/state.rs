//! Application state wiring the support desk together.
//!
//! AppState holds the concrete instances used by both the terminal chat and
//! the REST API: the loaded config, the session controller built on the
//! configured Completion Service, and the live session registry.

use std::path::PathBuf;
use std::sync::Arc;

use deskmate_core::agent::persona::PersonaAgent;
use deskmate_core::agent::router::AgentRouter;
use deskmate_core::llm::box_provider::BoxLlmProvider;
use deskmate_core::llm::client::CompletionClient;
use deskmate_core::order::OrderDirectory;
use deskmate_core::session::controller::SessionController;
use deskmate_core::session::registry::SessionRegistry;
use deskmate_infra::config::{load_global_config, resolve_data_dir};
use deskmate_infra::llm::create_provider;
use deskmate_infra::order::in_memory::InMemoryOrderDirectory;
use deskmate_infra::secret::env::EnvSecretProvider;
use deskmate_types::config::GlobalConfig;

/// Shared application state.
///
/// Cheap to clone: everything behind an `Arc` or already shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub controller: Arc<SessionController>,
    pub sessions: SessionRegistry,
    /// Provider name and model, for banners and the health endpoint.
    pub provider_name: String,
    pub model: String,
}

impl AppState {
    /// Load `config.toml`, resolve the API key and order directory, and wire
    /// the controller.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;

        let api_key = EnvSecretProvider::new().require(&config.completion.api_key_env)?;
        let provider = create_provider(&config.completion, api_key);

        let directory: Arc<dyn OrderDirectory> = match &config.order_directory {
            Some(path) => Arc::new(InMemoryOrderDirectory::from_json_file(path).await?),
            None => {
                tracing::debug!("no order_directory configured, using demo contacts");
                Arc::new(InMemoryOrderDirectory::demo())
            }
        };

        Ok(Self::from_parts(config, data_dir, provider, directory))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        config: GlobalConfig,
        data_dir: PathBuf,
        provider: BoxLlmProvider,
        directory: Arc<dyn OrderDirectory>,
    ) -> Self {
        let client = Arc::new(CompletionClient::from_config(provider, &config.completion));
        let provider_name = client.provider_name().to_string();
        let model = client.model().to_string();

        let controller = SessionController::new(
            AgentRouter::new(Arc::clone(&client)),
            PersonaAgent::new(client, directory),
        );

        Self {
            config: Arc::new(config),
            data_dir,
            controller: Arc::new(controller),
            sessions: SessionRegistry::new(),
            provider_name,
            model,
        }
    }
}

//! Application state wiring the services together.
//!
//! `AppState` holds the concrete service instances used by the CLI commands.
//! Services are generic over the storage traits, but AppState pins them to
//! the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use kimy_core::profile::service::ProfileService;
use kimy_infra::config::load_config;
use kimy_infra::paths::resolve_data_dir;
use kimy_infra::sqlite::pool::DatabasePool;
use kimy_infra::sqlite::settings::SqliteSettingsStore;
use kimy_types::config::AppConfig;

/// Concrete profile service pinned to the SQLite settings store.
pub type ConcreteProfileService = ProfileService<SqliteSettingsStore>;

/// Shared application state holding services and configuration.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ConcreteProfileService>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the DB, load config,
    /// wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("kimy.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        let config = load_config(&data_dir).await;
        debug!(data_dir = %data_dir.display(), bot_name = %config.bot_name, "state initialized");

        let profile_service = ProfileService::new(SqliteSettingsStore::new(db_pool));

        Ok(Self {
            profile_service: Arc::new(profile_service),
            config,
            data_dir,
        })
    }
}

//! Tries to create an `AppConfig` from config files.
//! Uses `AppConfigBuilder` to build up configuration from multiple files:
//! `base.toml` is always read, then the `APP_ENVIRONMENT` file is layered on top.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod data;

use std::sync::OnceLock;
use tracing::info;

use data::Environment;

// Re-export config structs
pub use data::{AppConfig, ConfigError, ConfigResult, DbConfig, NetConfig};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!(
            "{:<12} - Initializing the configuration",
            "get_or_init_config"
        );
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");
        let config_dir = base_path.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .expect("Failed to parse APP_ENVIRONMENT.");
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let base_file = std::fs::File::open(config_dir.join("base.toml"))
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));
        let env_file = std::fs::File::open(config_dir.join(environment_filename))
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));

        let mut config = AppConfig::init()
            .add_source_file(base_file)
            .and_then(|builder| builder.add_source_file(env_file))
            .and_then(|builder| builder.build())
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));

        // PORT takes precedence over `app_port` from the config files.
        if let Ok(port) = std::env::var("PORT") {
            let port = port
                .parse()
                .unwrap_or_else(|er| panic!("Fatal Error: While parsing PORT: {er}"));
            config.net_config.app_port = port;
        }

        // DATABASE_URL replaces the whole [db_config] section when present.
        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            if !db_url.is_empty() {
                let db_config = DbConfig::try_from(db_url.as_str()).unwrap_or_else(|er| {
                    panic!("Fatal Error: While parsing DbConfig from DATABASE_URL: {er}")
                });
                config.db_config = Some(db_config);
            }
        }
        // DATABASE_NAME only overrides the name of an already configured database.
        if let Ok(db_name) = std::env::var("DATABASE_NAME") {
            if !db_name.is_empty() {
                if let Some(db_config) = config.db_config.as_mut() {
                    db_config.db_name = db_name;
                }
            }
        }

        config
    })
}

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::services::currency::CurrencyLocale;
use crate::services::room_catalog::RoomCatalog;

/// Shared across actix workers through `web::Data`.
pub struct AppState {
    pub catalog: RoomCatalog,
    pub locale: CurrencyLocale,
}

impl AppState {
    pub fn new(catalog: RoomCatalog, locale: CurrencyLocale) -> Self {
        Self { catalog, locale }
    }

    /// Load the configuration from the environment and build the state from it.
    pub fn from_env() -> Result<(AppConfig, Self), ApiError> {
        let config = AppConfig::from_env()?;
        let state = Self::from_config(&config)?;
        Ok((config, state))
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let catalog = match &config.backend_api_url {
            Some(url) => RoomCatalog::from_backend(
                url.clone(),
                config.backend_timeout,
                config.room_cache_capacity,
                config.room_cache_ttl,
            )?,
            None => {
                log::warn!("BACKEND_API_URL not set, serving an empty room catalog");
                RoomCatalog::from_rooms(Vec::new())
            }
        };

        Ok(Self::new(catalog, config.locale))
    }
}

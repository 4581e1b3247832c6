use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Shared secret for the statistics endpoint. `None` leaves the endpoint
    /// open, matching deployments that predate the key.
    pub stats_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        // An empty value counts as unset so `STATS_API_KEY=` in an env file
        // doesn't silently require the empty string as a credential.
        let stats_api_key = env::var("STATS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Ok(Self {
            database_url,
            stats_api_key,
        })
    }
}

use std::env;

const DEFAULT_PORT: u16 = 8001;

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    /// `None` when `OPENAI_API_KEY` is unset or empty. Startup proceeds;
    /// the failure is deferred to the first analysis request.
    pub openai_api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `MONGO_URL` and `DB_NAME` are required and fail startup when absent.
    /// Everything else has a default.
    pub fn from_env() -> eyre::Result<Self> {
        let mongo_url = env::var("MONGO_URL").map_err(|_| eyre::eyre!("MONGO_URL must be set"))?;
        let db_name = env::var("DB_NAME").map_err(|_| eyre::eyre!("DB_NAME must be set"))?;

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let cors_origins =
            parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| eyre::eyre!("PORT must be a number, got: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_url,
            db_name,
            openai_api_key,
            cors_origins,
            port,
        })
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

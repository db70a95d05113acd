use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub saved_decks_path: Option<PathBuf>,
    pub llm_api_key: Option<String>,
    pub llm_gateway_url: Option<String>,
    pub llm_model: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            data_dir: try_load("PRECON_DATA_DIR", "data"),
            saved_decks_path: optional("PRECON_SAVED_DECKS").map(PathBuf::from),
            llm_api_key: optional("LLM_API_KEY"),
            llm_gateway_url: optional("LLM_GATEWAY_URL"),
            llm_model: optional("LLM_MODEL"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn optional(key: &str) -> Option<String> {
    let value = var(key);
    if value.is_none() {
        info!("{key} not set");
    }
    value
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            match default.parse() {
                Ok(value) => value,
                Err(e) => panic!("Invalid default for {key}: {e}"),
            }
        }
    }
}

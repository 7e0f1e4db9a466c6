use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.todoist.com/rest/v2";
pub const DEFAULT_COLLABORATORS_PROJECT_ID: &str = "2325372207";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8990;

/// Como as três coleções são buscadas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Sequential,
    Concurrent,
}

impl std::str::FromStr for FetchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(FetchMode::Sequential),
            "concurrent" => Ok(FetchMode::Concurrent),
            other => Err(ConfigError::Invalid {
                key: "TODOIST_FETCH_MODE",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuração lida uma única vez no startup e imutável depois disso
#[derive(Clone)]
pub struct Config {
    pub bearer_token: String,
    pub api_base: String,
    pub collaborators_project_id: String,
    pub fetch_mode: FetchMode,
    pub request_timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bearer_token", &if self.bearer_token.is_empty() { "<empty>" } else { "<redacted>" })
            .field("api_base", &self.api_base)
            .field("collaborators_project_id", &self.collaborators_project_id)
            .field("fetch_mode", &self.fetch_mode)
            .field("request_timeout", &self.request_timeout)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bearer_token: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            collaborators_project_id: DEFAULT_COLLABORATORS_PROJECT_ID.to_string(),
            fetch_mode: FetchMode::Sequential,
            request_timeout: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Get configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        // Sem token as chamadas ainda são feitas e falham no Todoist (401)
        let bearer_token = lookup("TODOIST_BEARER_TOKEN").unwrap_or_default();
        if bearer_token.is_empty() {
            log::warn!("⚠️  TODOIST_BEARER_TOKEN is not set, Todoist calls will be unauthenticated");
        }

        let api_base = lookup("TODOIST_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let collaborators_project_id = lookup("TODOIST_COLLABORATORS_PROJECT_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.collaborators_project_id);

        let fetch_mode = match lookup("TODOIST_FETCH_MODE") {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => FetchMode::default(),
        };

        let request_timeout = match lookup("TODOIST_TIMEOUT_SECS") {
            Some(v) if !v.trim().is_empty() => {
                let secs: u64 = v.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "TODOIST_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: v.clone(),
            })?,
            None => defaults.port,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bearer_token,
            api_base,
            collaborators_project_id,
            fetch_mode,
            request_timeout,
            host,
            port,
            cors_allowed_origins,
        })
    }
}

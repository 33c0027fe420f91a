use std::path::PathBuf;

/// How the binary prints timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub seed_path: Option<PathBuf>,
    pub viewer: String,
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    /// FLYT_SEED_PATH is unset by default (built-in sample network),
    /// FLYT_VIEWER defaults to "charliebrown", FLYT_OUTPUT to "text".
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_path = lookup("FLYT_SEED_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let viewer = lookup("FLYT_VIEWER")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "charliebrown".to_string());

        let output = match lookup("FLYT_OUTPUT").as_deref() {
            None | Some("") | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(_) => {
                return Err(ConfigError::Invalid(
                    "FLYT_OUTPUT",
                    "must be either \"text\" or \"json\"",
                ))
            }
        };

        Ok(Config {
            seed_path,
            viewer,
            output,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}

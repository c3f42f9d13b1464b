use crate::error::ConfigError;
use core_types::SeasonWindowPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty or missing `config.toml`
/// still produces a usable configuration for the 2025 season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub season: SeasonWindowPolicy,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the MLB Stats API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// How many game feeds may be in flight at once.
    pub max_concurrent_requests: usize,
    /// Skip game feeds whose box line shows no home run for the batter.
    pub home_run_games_only: bool,
}

/// Freshness policy for the cached roster directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub cache_ttl_hours: u64,
}

/// A player picked when the user doesn't name one.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultPlayer {
    pub name: String,
    pub team: String,
}

/// Presentation settings shared by the CLI and the web server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player1_color: String,
    pub player2_color: String,
    pub default_player1: DefaultPlayer,
    pub default_player2: DefaultPlayer,
}

/// Output style of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://statsapi.mlb.com".to_string(),
            timeout_secs: 30,
            max_concurrent_requests: 8,
            home_run_games_only: true,
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { cache_ttl_hours: 12 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            player1_color: "#1E90FF".to_string(),
            player2_color: "#FF8000".to_string(),
            default_player1: DefaultPlayer {
                name: "Shohei Ohtani".to_string(),
                team: "LAD".to_string(),
            },
            default_player2: DefaultPlayer {
                name: "Aaron Judge".to_string(),
                team: "NYY".to_string(),
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            directory: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RosterConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 60 * 60)
    }
}

impl Config {
    /// Rejects settings that would make the tracker misbehave silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.api.max_concurrent_requests == 0 {
            return Err(ConfigError::ValidationError(
                "api.max_concurrent_requests must be greater than zero".to_string(),
            ));
        }
        if self.roster.cache_ttl_hours == 0 {
            return Err(ConfigError::ValidationError(
                "roster.cache_ttl_hours must be greater than zero".to_string(),
            ));
        }
        if let Some(late) = self
            .season
            .special_opening_dates
            .iter()
            .find(|d| **d > self.season.regular_season_start)
        {
            return Err(ConfigError::ValidationError(format!(
                "season.special_opening_dates entry {} is after regular_season_start {}",
                late, self.season.regular_season_start
            )));
        }
        Ok(())
    }
}

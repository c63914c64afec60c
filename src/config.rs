use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{GuildId, UserId};
use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 300;
const DEFAULT_SUBJECT: &str = "Full Stack Deep Learning";

/// Immutable process configuration, built once during bootstrap.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    /// Guilds the slash commands are registered in.
    pub guild_ids: Vec<GuildId>,
    /// User mentioned in apologies when the backend fails.
    pub maintainer_id: Option<UserId>,

    pub backend_url: Url,
    pub backend_timeout: Duration,

    /// Subject named in the `ask` command descriptions.
    pub subject: String,
    /// Enables the `health` command and debug logging.
    pub dev: bool,
}

impl Config {
    pub fn from_env(dev: bool) -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok(), dev)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `BACKEND_URL` takes precedence; without it the URL of the Modal web
    /// endpoint is derived from `MODAL_USER_NAME`.
    pub fn from_lookup<F>(lookup: F, dev: bool) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_bot_token = require("DISCORD_AUTH")?;
        let guild_ids = parse_guild_ids(&require("DISCORD_GUILD_ID")?)?;
        let maintainer_id = lookup("DISCORD_MAINTAINER_ID").and_then(|raw| parse_maintainer(&raw));

        let backend_url = match lookup("BACKEND_URL").filter(|value| !value.trim().is_empty()) {
            Some(raw) => parse_url("BACKEND_URL", &raw)?,
            None => {
                let user = require("MODAL_USER_NAME").map_err(|_| {
                    ConfigError::MissingEnvVar("BACKEND_URL or MODAL_USER_NAME".to_string())
                })?;
                parse_url(
                    "MODAL_USER_NAME",
                    &format!("https://{}--discord-course-assistant-hook.modal.run", user.trim()),
                )?
            }
        };

        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: "BACKEND_TIMEOUT_SECS".to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "BACKEND_TIMEOUT_SECS".to_string(),
                        value: raw,
                        reason: "timeout must be greater than zero".to_string(),
                    }
                    .into());
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        };

        let subject = lookup("ASK_SUBJECT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        Ok(Self {
            discord_bot_token,
            guild_ids,
            maintainer_id,
            backend_url,
            backend_timeout,
            subject,
            dev,
        })
    }
}

/// Parses a comma-separated list of guild snowflakes.
fn parse_guild_ids(raw: &str) -> Result<Vec<GuildId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                name: "DISCORD_GUILD_ID".to_string(),
                value: raw.to_string(),
                reason: "guild id cannot be zero".to_string(),
            }),
            Ok(id) => Ok(GuildId::new(id)),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                name: "DISCORD_GUILD_ID".to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            }),
        })
        .collect()
}

/// A malformed maintainer id disables the notification clause instead of
/// failing startup.
fn parse_maintainer(raw: &str) -> Option<UserId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Some(UserId::new(id)),
        _ => {
            tracing::warn!(
                "Ignoring malformed DISCORD_MAINTAINER_ID '{}'; maintainer will not be mentioned",
                raw
            );
            None
        }
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

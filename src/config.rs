use chrono::TimeDelta;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::memory::{DEFAULT_MAX_AGE_SECS, DEFAULT_MAX_MESSAGES};
use crate::provider::Sampling;

/// Largest retention window chrono can represent, in seconds.
pub const MAX_AGE_SECS_LIMIT: u64 = (i64::MAX / 1000) as u64;

/// Top-level configuration loaded from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub gateway: GatewayConfig,
    pub provider: ProviderConfig,
    pub memory: MemoryConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Session used when a chat request carries no `sessionId`.
    #[serde(default = "default_session")]
    pub default_session: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            default_session: default_session(),
        }
    }
}

fn default_port() -> u16 {
    7300
}
fn default_bind() -> String {
    "127.0.0.1".into()
}
fn default_session() -> String {
    "default".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f32,
    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            frequency_penalty: default_frequency_penalty(),
            presence_penalty: default_presence_penalty(),
            max_tokens: default_max_tokens(),
            site_url: default_site_url(),
            site_name: default_site_name(),
        }
    }
}

impl ProviderConfig {
    pub fn sampling(&self) -> Sampling {
        Sampling {
            temperature: self.temperature,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
            max_tokens: self.max_tokens,
        }
    }
}

fn default_endpoint() -> String {
    "https://openrouter.ai/api/v1/chat/completions".into()
}
fn default_model() -> String {
    "openai/gpt-4o".into()
}
fn default_temperature() -> f32 {
    0.95
}
fn default_top_p() -> f32 {
    0.95
}
fn default_frequency_penalty() -> f32 {
    0.5
}
fn default_presence_penalty() -> f32 {
    0.6
}
fn default_max_tokens() -> u32 {
    1500
}
fn default_site_url() -> String {
    "https://your-site-url.com".into()
}
fn default_site_name() -> String {
    "Qayyum Portfolio".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl MemoryConfig {
    /// Retention window as a duration. Fails for values chrono cannot hold.
    pub fn max_age(&self) -> anyhow::Result<TimeDelta> {
        i64::try_from(self.max_age_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| {
                anyhow::anyhow!("memory.max_age_secs out of range: {}", self.max_age_secs)
            })
    }
}

fn default_max_messages() -> usize {
    DEFAULT_MAX_MESSAGES
}
fn default_max_age_secs() -> u64 {
    DEFAULT_MAX_AGE_SECS
}

/// Where profile data comes from. Without a path the bundled profile is used.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentConfig {
    pub profile_path: Option<String>,
}

/// Load configuration from file or use defaults.
///
/// Search order:
/// 1. `FOLIOBOT_CONFIG` env var
/// 2. `~/.foliobot/config.toml`
/// 3. Zero-config defaults (no file needed)
pub fn load() -> anyhow::Result<FolioConfig> {
    let path = config_path();

    if path.exists() {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let mut config = parse(&content)
            .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;

        resolve_env(&mut config);
        validate(&config)?;

        info!("loaded config from {}", path.display());
        Ok(config)
    } else {
        info!("no config file found, using zero-config defaults");
        let mut config = FolioConfig::default();
        resolve_env(&mut config);
        Ok(config)
    }
}

/// Parse a TOML document into a config without touching the environment.
pub fn parse(content: &str) -> anyhow::Result<FolioConfig> {
    Ok(toml::from_str(content)?)
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("FOLIOBOT_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".foliobot").join("config.toml")
}

/// Fill the API key and site identity from the environment.
///
/// A key in the file wins over `OPENROUTER_API_KEY`. Site identity comes from
/// `SITE_URL` / `SITE_NAME`, or the site's `NEXT_PUBLIC_` names when those are
/// unset.
fn resolve_env(config: &mut FolioConfig) {
    if config.provider.api_key.is_none() {
        config.provider.api_key = std::env::var("OPENROUTER_API_KEY").ok();
    }
    resolve_site_identity(&mut config.provider, |key| std::env::var(key).ok());
}

/// Apply site-identity overrides from `lookup`.
pub fn resolve_site_identity(
    provider: &mut ProviderConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let first = |keys: [&str; 2]| keys.into_iter().find_map(&lookup);
    if let Some(url) = first(["SITE_URL", "NEXT_PUBLIC_SITE_URL"]) {
        provider.site_url = url;
    }
    if let Some(name) = first(["SITE_NAME", "NEXT_PUBLIC_SITE_NAME"]) {
        provider.site_name = name;
    }
}

/// Validate the config and return clear error messages.
pub fn validate(config: &FolioConfig) -> anyhow::Result<()> {
    if let Err(e) = url::Url::parse(&config.provider.endpoint) {
        anyhow::bail!(
            "invalid provider.endpoint '{}': {e}",
            config.provider.endpoint
        );
    }

    if config.provider.max_tokens == 0 {
        anyhow::bail!("provider.max_tokens must be > 0");
    }

    if !(0.0..=2.0).contains(&config.provider.temperature) {
        anyhow::bail!(
            "provider.temperature must be within 0.0..=2.0, got {}",
            config.provider.temperature
        );
    }

    if config.memory.max_messages == 0 {
        anyhow::bail!("memory.max_messages must be > 0");
    }

    if config.memory.max_age_secs == 0 || config.memory.max_age_secs > MAX_AGE_SECS_LIMIT {
        anyhow::bail!(
            "memory.max_age_secs must be within 1..={MAX_AGE_SECS_LIMIT}, got {}",
            config.memory.max_age_secs
        );
    }

    if config.gateway.default_session.is_empty() {
        anyhow::bail!("gateway.default_session must not be empty");
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use serena_genai::gemini;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Environment variables holding the Gemini API key, in lookup order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerenaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub provider: ProviderConfig,
    pub model: String,
    /// Where exports are written. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for SerenaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            provider: ProviderConfig::Gemini,
            model: gemini::DEFAULT_MODEL.to_string(),
            output_dir: None,
        }
    }
}

impl SerenaConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    Gemini,
    Bedrock { region: String },
}

/// Bedrock model used when none is configured.
pub const DEFAULT_BEDROCK_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

impl ProviderConfig {
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderConfig::Gemini => gemini::DEFAULT_MODEL,
            ProviderConfig::Bedrock { .. } => DEFAULT_BEDROCK_MODEL,
        }
    }
}

/// Redacted config info, safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub path: String,
    pub provider: String,
    pub region: Option<String>,
    pub model: String,
    pub output_dir: String,
    pub api_key_hint: Option<String>,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("serena").join("config.json"))
}

/// Load the config at `path`, or the defaults if no file exists there.
pub fn load_or_default(path: &Path) -> eyre::Result<SerenaConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SerenaConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<SerenaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SerenaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Serena."
        ));
    }

    // v0 → v1: the key moved to the environment; provider and model became explicit
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if obj.remove("api_key").is_some() {
            tracing::warn!("dropped api_key from config; set GEMINI_API_KEY instead");
        }
        obj.entry("provider")
            .or_insert(serde_json::json!({ "type": "gemini" }));
        obj.entry("model")
            .or_insert(serde_json::Value::String(gemini::DEFAULT_MODEL.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &SerenaConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// The first non-empty API key among [`API_KEY_VARS`], as seen by `lookup`.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

/// Read the API key from the process environment.
pub fn api_key_from_env() -> Option<String> {
    api_key_from(|var| std::env::var(var).ok())
}

pub fn config_info(path: &Path, config: &SerenaConfig, api_key: Option<&str>) -> ConfigInfo {
    let (provider, region) = match &config.provider {
        ProviderConfig::Gemini => ("gemini".to_string(), None),
        ProviderConfig::Bedrock { region } => ("bedrock".to_string(), Some(region.clone())),
    };

    ConfigInfo {
        path: path.display().to_string(),
        provider,
        region,
        model: config.model.clone(),
        output_dir: config.output_dir().display().to_string(),
        api_key_hint: api_key.map(redact_api_key),
    }
}

fn redact_api_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

use crate::error::{Result, StorycraftError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".storycraft.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorycraftConfig {
    #[serde(default)]
    pub backlog: BacklogSettings,

    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacklogSettings {
    /// Prefix for generated story IDs.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Length of the random ID suffix.
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Story ceiling used when a transform request does not specify one.
    #[serde(default = "default_max_stories")]
    pub default_max_stories: usize,
}

fn default_prefix() -> String {
    "story-".to_string()
}

fn default_id_length() -> usize {
    8
}

fn default_max_stories() -> usize {
    5
}

impl Default for BacklogSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            id_length: default_id_length(),
            default_max_stories: default_max_stories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Environment variable holding the API key, if the endpoint needs one.
    #[serde(default = "default_api_key_env", skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_timeout_ms() -> u64 {
    60_000
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_api_key_env() -> Option<String> {
    Some("OPENAI_API_KEY".to_string())
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl StorycraftConfig {
    /// Load configuration by searching upward for `.storycraft.toml`.
    ///
    /// Missing config is not an error; defaults apply everywhere, so the
    /// tool works out of the box.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let content = std::fs::read_to_string(&config_path)?;
                let config: StorycraftConfig = toml::from_str(&content)
                    .map_err(|e| StorycraftError::Config(format!("{}: {}", config_path.display(), e)))?;
                let root = config_path
                    .parent()
                    .ok_or_else(|| {
                        StorycraftError::Config("Config file has no parent directory".to_string())
                    })?
                    .to_path_buf();
                Ok((config, root))
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StorycraftError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

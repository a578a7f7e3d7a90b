use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for resolving icon tags in marker text.
#[derive(Serialize, Deserialize)]
pub struct IconsConfig {
    /// If disabled, formatted text is shown verbatim.
    #[serde(default = "IconsConfig::default_enabled")]
    pub enabled: bool,

    /// Tag names (without the brackets) mapped to the text they are replaced with.
    #[serde(default)]
    pub glyphs: HashMap<String, String>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            glyphs: HashMap::new(),
        }
    }
}

impl IconsConfig {
    fn default_enabled() -> bool {
        true
    }
}

/// Configuration for marker scripts.
#[derive(Serialize, Deserialize)]
pub struct ScriptsConfig {
    /// Location of the scripts directory.
    #[serde(default = "ScriptsConfig::default_scripts_location")]
    pub scripts_location: String,

    /// The global function called with the marker store.
    #[serde(default = "ScriptsConfig::default_entry_point")]
    pub entry_point: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            scripts_location: Self::default_scripts_location(),
            entry_point: Self::default_entry_point(),
        }
    }
}

impl ScriptsConfig {
    fn default_scripts_location() -> String {
        "resources/scripts".to_string()
    }

    fn default_entry_point() -> String {
        "onMarkers".to_string()
    }

    /// Resolves `file_name` relative to the scripts directory, unless it's already a path.
    pub fn script_path(&self, file_name: &str) -> String {
        if file_name.contains('/') {
            file_name.to_string()
        } else {
            format!("{}/{file_name}", self.scripts_location)
        }
    }
}

/// Global and all-encompassing config.
#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub scripts: ScriptsConfig,
}

pub fn get_config() -> Config {
    if let Ok(data) = std::fs::read_to_string("config.yaml") {
        match serde_yaml_ng::from_str(&data) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("Failed to parse config.yaml, using the defaults: {err}");
                Config::default()
            }
        }
    } else {
        Config::default()
    }
}

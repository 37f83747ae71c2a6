use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory the export files are written into when no -o flag is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// How many leading hit positions the console summary echoes.
    #[serde(default = "default_positions_shown")]
    pub positions_shown: usize,
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_positions_shown() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            positions_shown: default_positions_shown(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "motifscan", "motifscan-tools") {
            let config_dir = proj_dirs.config_dir();
            let config_path = config_dir.join("config.toml");

            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "motifscan", "motifscan-tools") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;

            let config_path = config_dir.join("config.toml");
            let content = toml::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }
}

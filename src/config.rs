use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Endpoint of the summarization backend. The summarize screen is
    /// disabled when unset.
    pub summarizer_url: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub theme: Theme,
}

/// Colors used by the renderer. Carried inside `Config` and passed down
/// explicitly; there is no process-wide theme state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_accent")]
    pub accent: String,

    #[serde(default = "default_highlight")]
    pub highlight: String,
}

fn default_db_path() -> String {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tubenotes");
    std::fs::create_dir_all(&data_dir).ok();
    data_dir.join("notes.db").to_string_lossy().to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_accent() -> String {
    "cyan".to_string()
}

fn default_highlight() -> String {
    "yellow".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            summarizer_url: None,
            request_timeout_secs: default_request_timeout(),
            theme: Theme::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            highlight: default_highlight(),
        }
    }
}

impl Theme {
    pub fn accent_color(&self) -> Color {
        parse_color(&self.accent, Color::Cyan)
    }

    pub fn highlight_color(&self) -> Color {
        parse_color(&self.highlight, Color::Yellow)
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => fallback,
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubenotes")
            .join("config.toml")
    }
}

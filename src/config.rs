use crate::state::navigation::{DEFAULT_BREAKPOINT, DEFAULT_VISIBILITY_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub relay: RelayConfig,
    pub site: SiteConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Navigation behavior
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavigationConfig {
    /// Window width (in points) above which the menu is always collapsed
    pub breakpoint: f32,
    /// Visible fraction of a section needed to mark it active
    pub visibility_threshold: f32,
    /// Follow scrolling with the active navigation entry
    pub track_visibility: bool,
}

/// Email relay credentials and endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Request timeout (in seconds)
    pub timeout_secs: u64,
}

/// Page identity
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Optional profile photo shown in the home section
    pub photo: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            track_visibility: true,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Saket's Portfolio".to_string(),
            photo: None,
        }
    }
}

impl RelayConfig {
    /// All three identifiers are present
    pub fn is_complete(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }

    /// Override credentials from `lookup` (normally the process environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &mut String); 4] = [
            ("PORTFOLIO_SERVICE_ID", &mut self.service_id),
            ("PORTFOLIO_TEMPLATE_ID", &mut self.template_id),
            ("PORTFOLIO_PUBLIC_KEY", &mut self.public_key),
            ("PORTFOLIO_RELAY_ENDPOINT", &mut self.endpoint),
        ];
        for (var, field) in fields {
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                *field = value;
            }
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "portfolio")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist,
    /// then apply environment overrides for the relay.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .filter(|path| path.exists())
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.relay.apply_overrides(|var| env::var(var).ok());
        if !config.relay.is_complete() {
            warn!("Email relay credentials missing, contact form submissions will fail");
        }
        config
    }

    /// Read one config file. Unreadable or malformed files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), "Failed to parse config file: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), "Failed to read config file: {}", e);
                Config::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Persist a theme change without writing the rest of the in-memory config.
    ///
    /// The in-memory relay section may carry credentials from the environment,
    /// so the file is re-read and only `theme.mode` changes.
    pub fn save_theme(mode: &str) -> Result<(), Box<dyn std::error::Error>> {
        match Self::config_path() {
            Some(path) => Self::save_theme_to(&path, mode),
            None => Err("Could not determine config directory".into()),
        }
    }

    pub fn save_theme_to(path: &Path, mode: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut on_disk = if path.exists() {
            Self::load_from(path)
        } else {
            Config::default()
        };
        on_disk.theme.mode = mode.to_string();
        on_disk.save_to(path)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                info!(path = %path.display(), "Wrote default config");
            }
        }
        Ok(())
    }
}

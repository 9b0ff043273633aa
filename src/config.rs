use anyhow::{Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sms: SmsConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsConfig {
    /// IANA timezone the business schedules in; customer phrases like
    /// "TOMORROW 2PM" are wall-clock times in this zone.
    pub timezone: String,
    /// Business name shown by the reply simulator.
    pub business_name: Option<String>,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self { timezone: "America/New_York".to_string(), business_name: None }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { sms: SmsConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// The configured business timezone, validated against the tz database.
    pub fn timezone(&self) -> Result<Tz> {
        Tz::from_str(&self.sms.timezone)
            .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", self.sms.timezone, e))
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "ringback", "ringback")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.sms.timezone, "America/New_York");
        assert_eq!(config.sms.business_name, None);
        assert_eq!(config.timezone().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let config = Config { sms: SmsConfig { timezone: "Mars/Olympus".to_string(), business_name: None } };
        assert!(config.timezone().is_err());
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        // Create temporary directory
        let temp_dir = tempdir()?;

        // Set up temporary config directory
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        // Create and save config
        let mut config = Config::default();
        config.sms.timezone = "America/Chicago".to_string();
        config.save()?;

        // Load config
        let loaded = Config::load()?;

        // Verify loaded config matches saved config
        assert_eq!(loaded.sms.timezone, config.sms.timezone);

        Ok(())
    }
}

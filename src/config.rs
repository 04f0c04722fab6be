//! Subscription details and rate limits are read from an INI configuration file

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use configparser::ini::Ini;
use log::info;
use url::Url;

/// Seconds to pause between submissions unless `[ratelimit] seconds` is set
const DEFAULT_THROTTLE_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub url: Url,
    pub key: String,
    throttle_secs: u64,
}

impl Settings {
    /// Load settings from an INI file
    ///
    /// Section and key names are case insensitive, matching the file format the
    /// subscription portal hands out.
    pub fn load(path: &Path) -> Result<Settings> {
        info!("Reading configuration from {}", path.display());

        let mut ini = Ini::new();
        ini.load(path)
            .map_err(|err| anyhow!("Can't read configuration at path {}: {err}", path.display()))?;

        let url = ini
            .get("subscription", "url")
            .context("Configuration is missing url in the [subscription] section")?;
        let url = Url::parse(&url).with_context(|| format!("Invalid subscription url: {url}"))?;

        let key = ini
            .get("subscription", "key")
            .context("Configuration is missing key in the [subscription] section")?;
        if key.is_empty() {
            bail!("Subscription key must not be empty");
        }

        let throttle_secs = ini
            .getuint("ratelimit", "seconds")
            .map_err(|err| anyhow!("Invalid seconds in the [ratelimit] section: {err}"))?
            .unwrap_or(DEFAULT_THROTTLE_SECS);

        Ok(Settings { url, key, throttle_secs })
    }

    /// Pause between consecutive API submissions
    pub fn throttle(&self) -> Duration {
        Duration::from_secs(self.throttle_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.ini");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_subscription_settings_with_default_throttle() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[subscription]\n\
             url = https://westeurope.api.cognitive.microsoft.com/face/v1.0/detect\n\
             key = 0123456789abcdef\n",
        );

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.url.host_str(), Some("westeurope.api.cognitive.microsoft.com"));
        assert_eq!(settings.key, "0123456789abcdef");
        assert_eq!(settings.throttle(), Duration::from_secs(5));
    }

    #[test]
    fn throttle_matches_configuration() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[subscription]\n\
             url = https://example.org/detect\n\
             key = abc\n\
             [ratelimit]\n\
             seconds = 2\n",
        );

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.throttle(), Duration::from_secs(2));
    }

    #[test]
    fn section_names_are_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[Subscription]\n\
             URL = https://example.org/detect\n\
             Key = abc\n",
        );

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.key, "abc");
    }

    #[test]
    fn missing_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[subscription]\nurl = https://example.org/detect\n");

        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing key"));
    }

    #[test]
    fn invalid_url_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[subscription]\nurl = not a url\nkey = abc\n");

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::load(&dir.path().join("nope.ini")).is_err());
    }
}

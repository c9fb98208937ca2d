use crate::loadbar::progress::hide_timer::{DEFAULT_HIDE_DELAY, DEFAULT_LINGER_DELAY, HideTimer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "loadbar.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Options {
    /// delay between completion and the removal of the loader
    pub(crate) hide_delay_ms: u64,
    /// how long the 100% message stays once the loader is removed
    pub(crate) linger_delay_ms: u64,
    pub(crate) demo_on_startup: bool,
    pub(crate) dark_mode: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY.as_millis() as u64,
            linger_delay_ms: DEFAULT_LINGER_DELAY.as_millis() as u64,
            demo_on_startup: true,
            dark_mode: true,
        }
    }
}

impl Options {
    pub(crate) fn config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    pub(crate) fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            let opts = Options::default();
            if let Err(e) = opts.save() {
                warn!("Unable to create {path:?}: {e}");
            }
            opts
        }
    }

    pub(crate) fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<Options>(&text) {
                Ok(opts) => {
                    info!("Options loaded from {path:?}");
                    opts
                }
                Err(e) => {
                    warn!("Invalid configuration file {path:?}, using default values: {e}");
                    Options::default()
                }
            },
            Err(e) => {
                warn!("Unable to read {path:?}, using default values: {e}");
                Options::default()
            }
        }
    }

    pub(crate) fn save(&self) -> Result<(), Error> {
        self.save_to(&Self::config_path())
    }

    pub(crate) fn save_to(&self, path: &Path) -> Result<(), Error> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
        let toml_text = toml::to_string_pretty(self).map_err(|e| Error::other(format!("{}", e)))?;
        fs::write(path, toml_text)?;
        info!("Options saved into {path:?}");
        Ok(())
    }

    pub(crate) fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub(crate) fn linger_delay(&self) -> Duration {
        Duration::from_millis(self.linger_delay_ms)
    }

    pub(crate) fn hide_timer(&self) -> HideTimer {
        HideTimer::new(self.hide_delay(), self.linger_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("loadbar-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn default_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let o = Options::default();
        let s = toml::to_string(&o)?;
        let back: Options = toml::from_str(&s)?;
        assert_eq!(o, back);
        Ok(())
    }

    #[test]
    fn missing_fields_use_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let o: Options = toml::from_str("hide_delay_ms = 10")?;
        assert_eq!(10, o.hide_delay_ms);
        assert_eq!(250, o.linger_delay_ms);
        assert!(o.demo_on_startup);
        Ok(())
    }

    #[test]
    fn save_then_load() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_path("saved.toml");
        let o = Options {
            hide_delay_ms: 5,
            linger_delay_ms: 6,
            demo_on_startup: false,
            dark_mode: false,
        };
        o.save_to(&path)?;
        assert_eq!(o, Options::load_from(&path));
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn invalid_file_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_path("invalid.toml");
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(&path, "hide_delay_ms = \"soon\"")?;
        assert_eq!(Options::default(), Options::load_from(&path));
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn unreadable_file_uses_defaults() {
        assert_eq!(
            Options::default(),
            Options::load_from(&temp_path("does-not-exist.toml"))
        );
    }

    #[test]
    fn hide_timer_uses_delays() {
        let o = Options {
            hide_delay_ms: 0,
            linger_delay_ms: 0,
            ..Default::default()
        };
        let mut timer = o.hide_timer();
        let now = std::time::Instant::now();
        timer.schedule(now);
        assert!(timer.poll(now));
    }
}

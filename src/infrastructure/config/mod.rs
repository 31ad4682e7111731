use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const SUBMIT_DELAY_VAR: &str = "GUIDES_SUBMIT_DELAY_MS";
pub const SEED_FILE_VAR: &str = "GUIDES_SEED_FILE";

const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub submit_delay: Duration,
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            seed_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(raw) = get(SUBMIT_DELAY_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of milliseconds, got {:?}", SUBMIT_DELAY_VAR, raw))?;
            settings.submit_delay = Duration::from_millis(millis);
        }

        if let Some(path) = get(SEED_FILE_VAR) {
            settings.seed_file = Some(PathBuf::from(path.trim()));
        }

        Ok(settings)
    }
}

//! Configuration loading from wordlock.toml.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::dictionary::OversizePolicy;
use crate::error::{IoResultExt, WordlockError, WordlockResult};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "wordlock.toml";

/// Main configuration structure for wordlock.toml.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WordlockConfig {
    /// Wheel specification file. Relative paths are relative to the config file.
    pub wheels: Option<PathBuf>,
    /// Dictionary file. Relative paths are relative to the config file.
    pub dictionary: Option<PathBuf>,
    /// Abort on dictionary lines longer than the maximum word length.
    pub strict: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
    /// Show alignment offsets in plain output.
    pub offsets: Option<bool>,
}

impl WordlockConfig {
    /// Oversized dictionary line policy implied by `strict`.
    pub fn oversize_policy(&self) -> OversizePolicy {
        if self.strict.unwrap_or(false) {
            OversizePolicy::Abort
        } else {
            OversizePolicy::Skip
        }
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }

    /// Whether offsets should be shown.
    pub fn wants_offsets(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.offsets)
            .unwrap_or(false)
    }

    /// Make relative input paths relative to `base`.
    fn resolve_paths(mut self, base: &Path) -> Self {
        for path in [&mut self.wheels, &mut self.dictionary].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

/// Loads a specific config file.
pub fn load_config_file(path: &Path) -> WordlockResult<WordlockConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    let cfg: WordlockConfig =
        toml::from_str(&content).map_err(|e| WordlockError::config(path, e.to_string()))?;

    if let Some(format) = cfg.output.as_ref().and_then(|o| o.format.as_deref()) {
        if !matches!(format.to_ascii_lowercase().as_str(), "plain" | "json") {
            return Err(WordlockError::config(
                path,
                format!("unknown output format {:?} (expected \"plain\" or \"json\")", format),
            ));
        }
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(cfg.resolve_paths(base))
}

/// Loads configuration from wordlock.toml in `root` if it exists.
pub fn load_config(root: &Path) -> WordlockResult<Option<WordlockConfig>> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("wordlock_config_test")
            .join(format!("{}_{}", std::process::id(), id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = temp_dir();
        assert_eq!(load_config(&dir).unwrap(), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = temp_dir();
        fs::write(
            dir.join(CONFIG_FILE_NAME),
            "wheels = \"locks/w.txt\"\n\
             dictionary = \"/abs/dict.txt\"\n\
             strict = true\n\
             [output]\n\
             format = \"JSON\"\n\
             offsets = true\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.wheels, Some(dir.join("locks/w.txt")));
        assert_eq!(cfg.dictionary, Some(PathBuf::from("/abs/dict.txt")));
        assert_eq!(cfg.oversize_policy(), OversizePolicy::Abort);
        assert!(cfg.wants_json());
        assert!(cfg.wants_offsets());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_defaults() {
        let cfg = WordlockConfig::default();
        assert_eq!(cfg.oversize_policy(), OversizePolicy::Skip);
        assert!(!cfg.wants_json());
        assert!(!cfg.wants_offsets());
    }

    #[test]
    fn test_invalid_config() {
        let dir = temp_dir();
        fs::write(dir.join(CONFIG_FILE_NAME), "wheels = [1, 2").unwrap();
        let err = load_config(&dir).unwrap_err();
        assert!(matches!(err, WordlockError::Config { .. }));
        assert!(err.is_recoverable());

        fs::write(dir.join(CONFIG_FILE_NAME), "[output]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            load_config(&dir),
            Err(WordlockError::Config { .. })
        ));

        fs::write(dir.join(CONFIG_FILE_NAME), "colour = \"red\"\n").unwrap();
        assert!(matches!(
            load_config(&dir),
            Err(WordlockError::Config { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }
}

//! Dark mode controller.
//!
//! One persisted boolean preference under a fixed key, serialized as the
//! literal strings "true"/"false". The stored value always wins; the
//! ambient terminal color scheme is consulted only when nothing has been
//! stored yet.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub const DARK_MODE_KEY: &str = "dark-mode";

/// Capability interface over persisted key/value preferences. Injected
/// into the controller so tests never touch the real config directory.
pub trait Preferences {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// YAML-backed preferences living in the config directory.
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    pub fn open(path: PathBuf) -> AppResult<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_yaml::from_str(&content)
                    .map_err(|e| AppError::Preference(format!("bad preferences file: {e}")))?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&self.values)
            .map_err(|e| AppError::Preference(format!("cannot serialize preferences: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    // write-through: the file is updated before set() returns
    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory preferences for deterministic tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ambient color-scheme probe. COLORFGBG advertises "fg;bg" where a
/// background code of 0-6 or 8 means a dark palette.
pub fn ambient_prefers_dark() -> bool {
    match env::var("COLORFGBG") {
        Ok(v) => match v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
            Some(bg) => bg <= 6 || bg == 8,
            None => false,
        },
        Err(_) => false,
    }
}

pub struct ThemeController<P: Preferences> {
    prefs: P,
    ambient_dark: bool,
}

impl<P: Preferences> ThemeController<P> {
    pub fn new(prefs: P, ambient_dark: bool) -> Self {
        Self {
            prefs,
            ambient_dark,
        }
    }

    pub fn has_stored_preference(&self) -> bool {
        self.prefs.get(DARK_MODE_KEY).is_some()
    }

    pub fn is_dark(&self) -> bool {
        match self.prefs.get(DARK_MODE_KEY) {
            Some(v) => v == "true",
            None => self.ambient_dark,
        }
    }

    /// Flip the mode. The new value is persisted before it is reported,
    /// so the visual state can never run ahead of storage.
    pub fn toggle(&mut self) -> AppResult<bool> {
        let next = !self.is_dark();
        self.set_dark(next)?;
        Ok(next)
    }

    pub fn set_dark(&mut self, on: bool) -> AppResult<()> {
        self.prefs
            .set(DARK_MODE_KEY, if on { "true" } else { "false" })
    }
}

/// Controller wired to the real preferences file and the real ambient
/// signal, as used by the CLI commands.
pub fn controller_from_config() -> AppResult<ThemeController<FilePreferences>> {
    let prefs = FilePreferences::open(Config::prefs_file())?;
    Ok(ThemeController::new(prefs, ambient_prefers_dark()))
}

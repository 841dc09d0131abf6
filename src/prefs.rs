// client/src/prefs.rs
// Global preferences for the app (not user-specific)
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub const DEFAULT_THEME: &str = "matrix";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalPrefs {
    pub selected_theme: String,
    pub sound_effects_enabled: bool,
}

impl Default for GlobalPrefs {
    fn default() -> Self {
        Self {
            selected_theme: DEFAULT_THEME.to_string(),
            sound_effects_enabled: true,
        }
    }
}

impl GlobalPrefs {
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".marquee_client_prefs.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = fs::read_to_string(path) {
            if let Ok(prefs) = serde_json::from_str(&data) {
                return prefs;
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        self.save_to(&Self::config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Ok(data) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(path, data) {
                tracing::warn!("failed to write prefs: {}", e);
            }
        }
    }
}

static GLOBAL_PREFS: OnceCell<RwLock<GlobalPrefs>> = OnceCell::new();

pub fn init_global_prefs() {
    let prefs = GlobalPrefs::load();
    GLOBAL_PREFS.set(RwLock::new(prefs)).ok();
}

/// Whether `init_global_prefs` has run. Unit tests build app state without
/// it, and must not touch the real prefs file.
pub fn is_initialized() -> bool {
    GLOBAL_PREFS.get().is_some()
}

pub fn global_prefs() -> std::sync::RwLockReadGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS.get().expect("GlobalPrefs not initialized").read().expect("RwLock poisoned")
}

pub fn global_prefs_mut() -> std::sync::RwLockWriteGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS.get().expect("GlobalPrefs not initialized").write().expect("RwLock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_selected_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let prefs = GlobalPrefs {
            selected_theme: "cherry-blossom".to_string(),
            sound_effects_enabled: false,
        };
        prefs.save_to(&path);
        let loaded = GlobalPrefs::load_from(&path);
        assert_eq!(loaded.selected_theme, "cherry-blossom");
        assert!(!loaded.sound_effects_enabled);
    }

    #[test]
    fn missing_or_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = GlobalPrefs::load_from(&dir.path().join("nope.json"));
        assert_eq!(missing.selected_theme, DEFAULT_THEME);

        let garbled = dir.path().join("bad.json");
        std::fs::write(&garbled, "{not json").unwrap();
        let loaded = GlobalPrefs::load_from(&garbled);
        assert_eq!(loaded.selected_theme, DEFAULT_THEME);
        assert!(loaded.sound_effects_enabled);
    }
}

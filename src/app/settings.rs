// Settings store: user preferences, global state, load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::localization::SupportedLang;
use crate::theme::ThemePreference;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    // UI language (None = auto/system). Stored as "en"/"ru" or null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    #[serde(default)]
    pub theme: ThemePreference,
}

// Unknown or legacy values ("auto", "de", ...) read back as None.
fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|s| SupportedLang::from_code(&s).ok()))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    // Allow override (tests, portable installs) via env var
    if let Ok(p) = std::env::var("COURSE_CARDS_SETTINGS_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            with_settings_mut(|st| *st = s);
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = with_settings(|s| s.clone());
    if let Err(e) = st.save_to_file(&path) {
        log::error!(
            "Failed to save settings to {}: {}",
            path.to_string_lossy(),
            e
        );
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}

/// Read settings through a closure. A poisoned lock still yields the data.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap_or_else(|e| e.into_inner());
    f(&st)
}

/// Modify settings through a closure.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap_or_else(|e| e.into_inner());
    f(&mut st)
}

// EmuBrowser Settings Engine
// Manages session settings: loading, saving, personality selection, and
// resetting to defaults. Settings are stored as a JSON file at the
// platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::personality::BrowserPersonality;
use crate::types::settings::SessionSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<SessionSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn settings(&self) -> &SessionSettings;
    fn set_personality(&mut self, key: &str) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn config_path(&self) -> &str;
}

/// Settings engine that persists session settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: SessionSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the settings file.
    /// Otherwise, uses the platform-specific config directory with
    /// `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: SessionSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON file.
    ///
    /// An absent file yields defaults; a malformed file is a serialization
    /// error and leaves the in-memory settings untouched.
    fn load(&mut self) -> Result<SessionSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = SessionSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: SessionSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse settings file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Switches the selected personality, validating the key against the
    /// built-in table before accepting it.
    fn set_personality(&mut self, key: &str) -> Result<(), SettingsError> {
        if BrowserPersonality::by_key(key).is_none() {
            return Err(SettingsError::UnknownPersonality(key.to_string()));
        }
        self.settings.personality = key.to_string();
        Ok(())
    }

    /// Restores defaults in memory and on disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = SessionSettings::default();
        self.save()
    }

    fn config_path(&self) -> &str {
        &self.config_path
    }
}

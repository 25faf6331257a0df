//! Configuration management for the fieldsy-admin application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and edited through an interactive setup wizard. Two modules can
//! be configured independently:
//!
//! - **API**: backend base URL and the admin account email
//! - **Display**: rows per page and the width of the pagination footer
//!
//! Sensitive data is never written here: the admin password lives in the
//! encrypted secret cache and session tokens in their own cache file.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\fieldsy\fieldsy-admin\config.json`
//! - **macOS**: `~/Library/Application Support/fieldsy/fieldsy-admin/config.json`
//! - **Linux**: `~/.local/share/fieldsy/fieldsy-admin/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Backend API connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the Fieldsy backend, e.g. `https://api.fieldsy.com/api/v1`.
    pub api_url: String,
    /// Admin account email used for the bearer-token login flow.
    pub admin_email: String,
}

/// Table rendering settings for listing commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Rows rendered per page.
    pub per_page: usize,
    /// Page numbers shown in the pagination footer before ellipsis compression.
    pub page_window: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            per_page: 10,
            page_window: crate::libs::paginator::DEFAULT_PAGE_WINDOW,
        }
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured modules stay `None` and are omitted from the JSON output,
/// so the application can run with minimal setup.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default (empty)
    /// configuration. A present but unparseable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Returns the API settings or fails with a setup hint.
    pub fn api(&self) -> Result<&ApiConfig> {
        self.api.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ConfigApiMissing))
    }

    /// Returns the display settings, falling back to defaults.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the wizard
    /// only changes what the user touches. Returns the updated configuration
    /// ready for saving.
    pub fn init() -> Result<Self> {
        // Load existing configuration to use as defaults for the setup wizard
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "api".to_string(),
                name: "API".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "api" => {
                    let default = config.api.clone().unwrap_or(ApiConfig {
                        api_url: "".to_string(),
                        admin_email: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleApi);
                    config.api = Some(ApiConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,

                        admin_email: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAdminEmail.to_string())
                            .default(default.admin_email)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        per_page: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPerPage.to_string())
                            .default(default.per_page)
                            .interact_text()?,

                        page_window: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPageWindow.to_string())
                            .default(default.page_window)
                            .interact_text()?,
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}

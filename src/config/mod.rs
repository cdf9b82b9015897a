//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::entities::{Role, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (e.g. "127.0.0.1:3000")
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Names and symbols shown in the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Product name shown in the navigation header
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Symbol prefixed to monetary amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Session cookie settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Seconds between reloads of the loading page
    #[serde(default = "default_loading_refresh_secs")]
    pub loading_refresh_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            loading_refresh_secs: default_loading_refresh_secs(),
        }
    }
}

/// A demo identity accepted by the in-memory provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub role: Role,

    /// Owning company (nil when not configured)
    #[serde(default)]
    pub company_id: Uuid,
}

impl AccountConfig {
    /// Build the identity this account signs in as
    pub fn to_user(&self) -> User {
        User::new(
            self.email.trim(),
            self.full_name.clone(),
            self.role,
            self.company_id,
        )
    }
}

/// Complete configuration of the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub branding: BrandingConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })
    }

    /// Check the configuration for values the server cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.cookie_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for account in &self.accounts {
            if !seen.insert(account.email.trim().to_lowercase()) {
                return Err(ConfigError::DuplicateAccount {
                    email: account.email.clone(),
                });
            }
        }

        Ok(())
    }

    /// Create a default configuration with a single demo account
    pub fn default_config() -> Self {
        Self {
            accounts: vec![AccountConfig {
                email: "demo@erp.local".to_string(),
                password: "demo123".to_string(),
                full_name: "Demo User".to_string(),
                role: Role::Admin,
                company_id: Uuid::nil(),
            }],
            ..Self::default()
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_app_name() -> String {
    "ERP System".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_cookie_name() -> String {
    "erp_session".to_string()
}

fn default_loading_refresh_secs() -> u32 {
    1
}

use serde::{Deserialize, Serialize};

use crate::SessionUser;

/// Brand shown at the left edge of the navigation header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "TodoApp".to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Optional user the standalone shell signs in with on startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionSeed {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<SessionSeed> for SessionUser {
    fn from(seed: SessionSeed) -> Self {
        SessionUser {
            first_name: seed.first_name,
            last_name: seed.last_name,
            email: seed.email,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section is optional so that an empty or partial file still
/// produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub session: Option<SessionSeed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.branding.title, "TodoApp");
        assert!(config.session.is_none());
    }

    #[test]
    fn empty_branding_section_keeps_default_title() {
        let config: AppConfig = toml::from_str("[branding]\n").unwrap();
        assert_eq!(config.branding, BrandingConfig::default());
    }

    #[test]
    fn full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [branding]
            title = "Tasks"

            [session]
            first_name = "Ada"
            last_name = "Lovelace"
            email = "ada@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.branding.title, "Tasks");
        let user: SessionUser = config.session.unwrap().into();
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.email_or_blank(), "ada@example.com");
    }

    #[test]
    fn partial_session_seed_leaves_fields_absent() {
        let config: AppConfig = toml::from_str(
            r#"
            [session]
            first_name = "Grace"
            "#,
        )
        .unwrap();
        let user: SessionUser = config.session.unwrap().into();
        assert_eq!(user.display_name(), "Grace");
        assert_eq!(user.email, None);
    }
}

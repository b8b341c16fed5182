use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so web builds see the
/// same settings as desktop ones.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse config contents, falling back to defaults when they are invalid.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// The application config, parsed on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML);
        tracing::debug!(brand = %config.branding.title, "loaded config");
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(parse_config("[branding\ntitle = "), AppConfig::default());
    }

    #[test]
    fn wrong_type_falls_back_to_defaults() {
        assert_eq!(parse_config("[branding]\ntitle = 7\n"), AppConfig::default());
    }

    #[test]
    fn bundled_config_names_the_brand() {
        assert_eq!(app_config().branding.title, "TodoApp");
        assert!(app_config().session.is_some());
    }
}

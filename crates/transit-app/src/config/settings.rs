//! Loading and validation of `site.toml`

use transit_core::prelude::*;

use super::types::SiteSettings;

/// Parse and validate settings from TOML text
pub fn parse_settings(content: &str) -> Result<SiteSettings> {
    let settings: SiteSettings = toml::from_str(content)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Reject settings the site cannot run with
pub fn validate_settings(settings: &SiteSettings) -> Result<()> {
    if settings.site.brand.trim().is_empty() {
        return Err(Error::config_invalid("site.brand must not be empty"));
    }
    if settings.live_data.refresh_interval_secs == 0 {
        return Err(Error::config_invalid(
            "live_data.refresh_interval_secs must be greater than zero",
        ));
    }
    if settings.report.confirmation_message.trim().is_empty() {
        return Err(Error::config_invalid(
            "report.confirmation_message must not be empty",
        ));
    }
    Ok(())
}

/// Load settings, falling back to defaults on any problem
pub fn load_settings(content: &str) -> SiteSettings {
    if content.trim().is_empty() {
        debug!("Empty site settings, using defaults");
        return SiteSettings::default();
    }

    match parse_settings(content) {
        Ok(settings) => {
            debug!("Loaded site settings");
            settings
        }
        Err(e) => {
            warn!("Failed to load site settings: {}", e);
            SiteSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, DEFAULT_REFRESH_INTERVAL_SECS};
    use std::time::Duration;

    #[test]
    fn test_defaults_match_site_copy() {
        let settings = SiteSettings::default();
        assert_eq!(settings.site.brand, "AccessibleTransit");
        assert_eq!(
            settings.live_data.refresh_interval(),
            Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)
        );
        assert_eq!(
            settings.report.confirmation_message,
            "Report submitted successfully!"
        );
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_parse_full_settings() {
        let content = r#"
[site]
brand = "TransitAccess"
hero_image_url = "https://example.com/hero.jpg"
hero_image_alt = "Platform with step-free access"
sign_in_label = "Log In"

[live_data]
refresh_interval_secs = 10

[report]
confirmation_message = "Thanks!"

[logging]
level = "debug"
"#;
        let settings = parse_settings(content).unwrap();
        assert_eq!(settings.site.brand, "TransitAccess");
        assert_eq!(settings.site.sign_in_label, "Log In");
        assert_eq!(settings.live_data.refresh_interval_secs, 10);
        assert_eq!(settings.report.confirmation_message, "Thanks!");
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = parse_settings("[live_data]\nrefresh_interval_secs = 5\n").unwrap();
        assert_eq!(settings.live_data.refresh_interval_secs, 5);
        assert_eq!(settings.site.brand, "AccessibleTransit");
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let err = parse_settings("[live_data]\nrefresh_interval_secs = 0\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_empty_brand_rejected() {
        let err = parse_settings("[site]\nbrand = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("site.brand"));
    }

    #[test]
    fn test_unknown_log_level_is_parse_error() {
        let err = parse_settings("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_settings_falls_back_on_invalid() {
        let settings = load_settings("[live_data]\nrefresh_interval_secs = 0\n");
        assert_eq!(settings, SiteSettings::default());

        let settings = load_settings("this is not toml = [");
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn test_load_settings_empty_content() {
        assert_eq!(load_settings(""), SiteSettings::default());
    }
}

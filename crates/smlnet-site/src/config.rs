use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use smlnet_core::CoreError;

/// Site-wide identity (smlnet.json).
///
/// Every field has a built-in default, so a missing or partial file
/// still yields a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the masthead and page titles.
    pub name: String,
    /// Address the contact form's inquiries are sent to.
    pub contact_email: String,
    /// Phone number shown on the contact page.
    pub contact_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: "SMLnet".to_owned(),
            contact_email: "samueljacobsmaart@gmail.com".to_owned(),
            contact_phone: "+31614129527".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Load a configuration file, filling absent fields from the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = fs::read_to_string(path)?;
        let config: SiteConfig =
            serde_json::from_str(&text).map_err(|e| CoreError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Config {
                path: path.to_path_buf(),
                message: "site name must not be empty".to_owned(),
            });
        }
        if !self.contact_email.contains('@') {
            return Err(CoreError::Config {
                path: path.to_path_buf(),
                message: format!("contact email '{}' is not an address", self.contact_email),
            });
        }
        Ok(())
    }

    /// Phone number grouped for display, `+31 6 14129527` style. Falls
    /// back to the raw value when it is not a Dutch mobile number.
    pub fn display_phone(&self) -> String {
        match self.contact_phone.strip_prefix("+316") {
            Some(rest) if !rest.is_empty() => format!("+31 6 {rest}"),
            _ => self.contact_phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("smlnet.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_point_at_the_real_site() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "SMLnet");
        assert_eq!(config.contact_email, "samueljacobsmaart@gmail.com");
        assert_eq!(config.display_phone(), "+31 6 14129527");
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{ "name": "SMLnet Staging" }"#);
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.name, "SMLnet Staging");
        assert_eq!(config.contact_email, "samueljacobsmaart@gmail.com");
    }

    #[test]
    fn malformed_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("smlnet.json"));
    }

    #[test]
    fn email_without_at_sign_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{ "contact_email": "nobody" }"#);
        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn foreign_phone_numbers_display_as_given() {
        let config = SiteConfig {
            contact_phone: "+4915112345678".to_owned(),
            ..SiteConfig::default()
        };
        assert_eq!(config.display_phone(), "+4915112345678");
    }
}

//! TOML configuration file loading
//!
//! Supports `~/.config/demo-actions/config.toml` as a persistent config source.
//! All fields are optional; the file is a partial overlay on top of defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Server/deployment configuration
    #[serde(default)]
    pub server: ServerFileConfig,
}

/// Server/deployment configuration
#[derive(Debug, Default, Deserialize)]
pub struct ServerFileConfig {
    /// Listen port
    pub port: Option<u16>,

    /// Public origin the assistant platform reaches us at
    pub domain: Option<String>,

    /// Directory of extra static files (logo, legal page)
    pub static_dir: Option<String>,

    /// Contact address published in the manifest
    pub contact_email: Option<String>,
}

/// Load the TOML config file from `explicit` or the standard path
///
/// Returns `ConfigFile::default()` if the file doesn't exist or can't be parsed.
pub fn load_config_file(explicit: Option<&Path>) -> ConfigFile {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_file_path) else {
        return ConfigFile::default();
    };

    if !path.exists() {
        if explicit.is_some() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
        }
        return ConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                ConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            ConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/demo-actions/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("demo-actions").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file() {
        let fc: ConfigFile = toml::from_str(
            r#"
            [server]
            domain = "https://demo.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(fc.server.domain.as_deref(), Some("https://demo.example.com"));
        assert!(fc.server.port.is_none());
        assert!(fc.server.static_dir.is_none());
    }

    #[test]
    fn empty_file_is_default() {
        let fc: ConfigFile = toml::from_str("").unwrap();
        assert!(fc.server.port.is_none());
        assert!(fc.server.domain.is_none());
    }

    #[test]
    fn loads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9090\ncontact_email = \"ops@example.com\"\n")
            .unwrap();

        let fc = load_config_file(Some(&path));
        assert_eq!(fc.server.port, Some(9090));
        assert_eq!(fc.server.contact_email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn unparsable_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let fc = load_config_file(Some(&path));
        assert!(fc.server.port.is_none());
    }

    #[test]
    fn missing_explicit_path_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let fc = load_config_file(Some(&dir.path().join("absent.toml")));
        assert!(fc.server.domain.is_none());
    }
}

//! Configuration management for the demo actions server

pub mod file;

use std::path::PathBuf;

use url::Url;

use crate::{Error, Result};

/// Port used when neither flag, environment nor config file sets one
pub const DEFAULT_PORT: u16 = 8080;

/// Manifest contact address used when none is configured
pub const DEFAULT_CONTACT_EMAIL: &str = "support@example.com";

/// Where the deployment is reachable
///
/// Built once at startup and never mutated. `domain` is an origin
/// (`scheme://host[:port]`) and never ends with a slash, so absolute URLs are
/// always `domain + path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    domain: String,
    port: u16,
}

impl DeploymentConfig {
    /// Create a deployment config from a public domain
    ///
    /// # Errors
    ///
    /// Returns error if `domain` is not an http(s) origin
    pub fn new(domain: &str, port: u16) -> Result<Self> {
        Ok(Self {
            domain: normalize_domain(domain)?,
            port,
        })
    }

    /// Deployment reachable only on localhost
    #[must_use]
    pub fn local(port: u16) -> Self {
        Self {
            domain: format!("http://localhost:{port}"),
            port,
        }
    }

    /// Public origin, without trailing slash
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Listen port
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Absolute URL for a served path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.domain)
    }
}

/// Reduce a configured domain to its origin
///
/// Accepts `https://host`, `https://host/` and `http://host:port`. Anything
/// with a path, query, fragment, credentials, or a non-HTTP scheme is rejected.
///
/// # Errors
///
/// Returns error if `raw` is not a valid http(s) origin
pub fn normalize_domain(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "domain must use http or https, got {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::Config(format!("domain has no host: {raw}")));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(Error::Config(format!(
            "domain must be scheme and host only: {raw}"
        )));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(Error::Config("domain must not carry credentials".to_string()));
    }

    Ok(url.origin().ascii_serialization())
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub domain: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub contact_email: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Public domain and port
    pub deployment: DeploymentConfig,

    /// Extra static files served for unmatched paths
    pub static_dir: Option<PathBuf>,

    /// Contact address published in the manifest
    pub contact_email: String,
}

impl ServerConfig {
    /// Load configuration (overrides > toml > default)
    ///
    /// # Errors
    ///
    /// Returns error if the configured domain is invalid
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let fc = file::load_config_file(overrides.config_file.as_deref());
        Self::merge(overrides, fc.server)
    }

    fn merge(overrides: ConfigOverrides, fc: file::ServerFileConfig) -> Result<Self> {
        let port = overrides.port.or(fc.port).unwrap_or(DEFAULT_PORT);

        let deployment = match overrides.domain.or(fc.domain) {
            Some(domain) => DeploymentConfig::new(&domain, port)?,
            None => {
                tracing::debug!("no public domain configured, using localhost");
                DeploymentConfig::local(port)
            }
        };

        Ok(Self {
            deployment,
            static_dir: overrides
                .static_dir
                .or_else(|| fc.static_dir.map(PathBuf::from)),
            contact_email: overrides
                .contact_email
                .or(fc.contact_email)
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
        })
    }
}

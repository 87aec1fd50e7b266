//! Plugin manifest (`ai-plugin.json`)
//!
//! The platform fetches this first and follows `api.url` to the descriptor,
//! so that URL is always derived from [`routes::OPENAPI_JSON`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DeploymentConfig;
use crate::{Result, routes};

/// Manifest schema version understood by the platform
pub const SCHEMA_VERSION: &str = "v1";

/// Plugin manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub schema_version: String,
    pub name_for_human: String,
    pub name_for_model: String,
    pub description_for_human: String,
    pub description_for_model: String,
    pub auth: AuthSpec,
    pub api: ApiLocation,
    pub logo_url: String,
    pub contact_email: String,
    pub legal_info_url: String,
}

/// How the platform authenticates against the actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthSpec {
    /// No authentication
    None,
    /// Static API key sent by the platform
    #[serde(rename = "service_http")]
    ApiKey {
        authorization_type: String,
        #[serde(default)]
        verification_tokens: BTreeMap<String, String>,
    },
    /// Per-user OAuth flow
    Oauth {
        client_url: String,
        scope: String,
        authorization_url: String,
        authorization_content_type: String,
        #[serde(default)]
        verification_tokens: BTreeMap<String, String>,
    },
}

/// Pointer to the API descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLocation {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub is_user_authenticated: bool,
}

/// Build the manifest for a deployment
#[must_use]
pub fn build_manifest(config: &DeploymentConfig, contact_email: &str) -> ManifestDocument {
    ManifestDocument {
        schema_version: SCHEMA_VERSION.to_string(),
        name_for_human: "Demo Actions".to_string(),
        name_for_model: "demo_actions".to_string(),
        description_for_human: "Search a demo calendar, inbox and the web.".to_string(),
        description_for_model: "Demo endpoints for calendar, email and web search. \
            Results are canned sample data and must not be presented as real."
            .to_string(),
        auth: AuthSpec::None,
        api: ApiLocation {
            kind: "openapi".to_string(),
            url: config.url_for(routes::OPENAPI_JSON),
            is_user_authenticated: false,
        },
        logo_url: config.url_for("/logo.png"),
        contact_email: contact_email.to_string(),
        legal_info_url: config.url_for("/legal"),
    }
}

impl ManifestDocument {
    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

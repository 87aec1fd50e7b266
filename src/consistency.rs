//! Startup check that the manifest and descriptor agree
//!
//! A manifest whose `api.url` drifts from where the descriptor is served makes
//! the platform silently discover nothing, so the server refuses to start.

use std::collections::HashSet;

use crate::config::DeploymentConfig;
use crate::descriptor::{Descriptor, build_descriptor};
use crate::manifest::{ManifestDocument, build_manifest};
use crate::{Error, Result, routes};

/// Verify the cross references between `descriptor` and `manifest`
///
/// # Errors
///
/// Returns [`Error::Consistency`] describing the first mismatch found
pub fn verify(descriptor: &Descriptor, manifest: &ManifestDocument) -> Result<()> {
    let server_url = descriptor
        .server_url()
        .ok_or_else(|| Error::Consistency("descriptor has no server entry".to_string()))?;

    if server_url.ends_with('/') {
        return Err(Error::Consistency(format!(
            "descriptor server url has a trailing slash: {server_url}"
        )));
    }

    let expected = format!("{server_url}{}", routes::OPENAPI_JSON);
    if manifest.api.url != expected {
        return Err(Error::Consistency(format!(
            "manifest api url {} does not match descriptor location {expected}",
            manifest.api.url
        )));
    }

    let mut seen = HashSet::new();
    for id in descriptor.operation_ids() {
        if !seen.insert(id) {
            return Err(Error::Consistency(format!("duplicate operationId: {id}")));
        }
    }

    if let Some(path) = descriptor.paths.keys().find(|p| !routes::is_served(p)) {
        return Err(Error::Consistency(format!(
            "descriptor advertises unrouted path: {path}"
        )));
    }

    Ok(())
}

/// Build both documents for `deployment` and verify them
///
/// # Errors
///
/// Returns [`Error::Consistency`] if the generated documents disagree
pub fn check_deployment(deployment: &DeploymentConfig, contact_email: &str) -> Result<()> {
    let descriptor = build_descriptor(deployment);
    let manifest = build_manifest(deployment, contact_email);
    verify(&descriptor, &manifest)?;

    tracing::debug!(
        api_url = %manifest.api.url,
        operations = descriptor.operation_ids().count(),
        "descriptor and manifest agree"
    );
    Ok(())
}

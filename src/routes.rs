//! Served paths
//!
//! The router, the descriptor and the manifest all read these constants so a
//! published URL can never point somewhere the server does not answer.

/// OpenAPI descriptor, JSON rendering (referenced by the manifest)
pub const OPENAPI_JSON: &str = "/openapi.json";

/// OpenAPI descriptor, YAML rendering
pub const OPENAPI_YAML: &str = "/openapi.yaml";

/// Plugin manifest at its well-known location
pub const MANIFEST_WELL_KNOWN: &str = "/.well-known/ai-plugin.json";

/// Plugin manifest at the legacy root location
pub const MANIFEST_LEGACY: &str = "/ai-plugin.json";

/// Demo calendar search
pub const CALENDAR_SEARCH: &str = "/calendar/search";

/// Demo email search
pub const GMAIL_SEARCH: &str = "/gmail/search";

/// Demo web search
pub const WEB_SEARCH: &str = "/web/search";

/// Liveness probe
pub const HEALTH: &str = "/health";

/// Every path answered by the API router
pub const ALL: &[&str] = &[
    OPENAPI_JSON,
    OPENAPI_YAML,
    MANIFEST_WELL_KNOWN,
    MANIFEST_LEGACY,
    CALENDAR_SEARCH,
    GMAIL_SEARCH,
    WEB_SEARCH,
    HEALTH,
];

/// Whether the router serves `path`
#[must_use]
pub fn is_served(path: &str) -> bool {
    ALL.contains(&path)
}

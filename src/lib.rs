//! Demo Actions - stub action endpoints for assistant platforms
//!
//! This library serves three demo actions (calendar, email and web search)
//! backed by canned data, plus the two documents a platform uses to discover
//! them:
//! - an OpenAPI descriptor listing the actions
//! - a plugin manifest pointing at the descriptor
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │   DeploymentConfig       │  domain + port, built once at startup
//! └────────────┬─────────────┘
//!              │
//!      ┌───────┴────────┐
//!      ▼                ▼
//! ┌──────────┐    ┌───────────┐
//! │descriptor│◄───│ manifest  │  api.url = domain + /openapi.json
//! └────┬─────┘    └───────────┘
//!      │ advertises
//!      ▼
//! ┌──────────────────────────┐
//! │  demo handlers (fixtures)│
//! └──────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod consistency;
pub mod descriptor;
pub mod error;
pub mod fixtures;
pub mod manifest;
pub mod routes;

pub use api::{ApiServer, ApiServerBuilder, ApiState};
pub use config::{ConfigOverrides, DeploymentConfig, ServerConfig};
pub use descriptor::{Descriptor, OperationDescriptor, build_descriptor};
pub use error::{Error, Result};
pub use fixtures::FixtureSet;
pub use manifest::{AuthSpec, ManifestDocument, build_manifest};

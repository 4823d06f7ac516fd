//! Component version inputs.
//!
//! This module provides [`ComponentVersions`], the set of raw version
//! strings a [`UserAgent`](crate::UserAgent) is built from. Versions are
//! supplied explicitly, either embedded at compile time through the
//! `GRAPH_UA_*` environment variables or handed in by the host.

use crate::Component;
use serde::{Deserialize, Serialize};

/// Raw versions of the reported components.
///
/// Values are taken as given; blank strings are treated as absent and the
/// driver qualifier is stripped when the user agent is built.
///
/// # Default Behavior
///
/// All versions are absent, which renders every component as `-`.
///
/// # Example
///
/// ```rust
/// use graph_user_agent::{Component, ComponentVersions};
///
/// // Versions embedded at compile time
/// let built = ComponentVersions::from_build_env();
///
/// // Explicit versions
/// let versions = ComponentVersions {
///     driver: Some("5.10.0-alpha01".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(versions.get(Component::Driver), Some("5.10.0-alpha01"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentVersions {
    /// Version of the graph-database driver.
    pub driver: Option<String>,

    /// Version of the object mapping framework.
    pub framework: Option<String>,

    /// Version of the repository integration module.
    pub integration: Option<String>,
}

impl ComponentVersions {
    /// Create a version set from explicit values.
    pub fn new(
        driver: Option<impl Into<String>>,
        framework: Option<impl Into<String>>,
        integration: Option<impl Into<String>>,
    ) -> Self {
        Self {
            driver: driver.map(Into::into),
            framework: framework.map(Into::into),
            integration: integration.map(Into::into),
        }
    }

    /// Versions embedded at compile time.
    ///
    /// Reads `GRAPH_UA_DRIVER_VERSION`, `GRAPH_UA_FRAMEWORK_VERSION` and
    /// `GRAPH_UA_INTEGRATION_VERSION` from the build environment. Unset
    /// variables yield absent versions.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("GRAPH_UA_DRIVER_VERSION"),
            option_env!("GRAPH_UA_FRAMEWORK_VERSION"),
            option_env!("GRAPH_UA_INTEGRATION_VERSION"),
        )
    }

    /// Raw version of a single component.
    pub fn get(&self, component: Component) -> Option<&str> {
        match component {
            Component::Driver => self.driver.as_deref(),
            Component::Framework => self.framework.as_deref(),
            Component::Integration => self.integration.as_deref(),
        }
    }
}

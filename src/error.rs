//! Error types for typed version access.
//!
//! Building and rendering a [`UserAgent`](crate::UserAgent) never fails.
//! These errors only surface when a caller asks for a component version as a
//! parsed [`semver::Version`].

use crate::Component;
use thiserror::Error;

/// Errors returned by [`UserAgent::semver`](crate::UserAgent::semver).
///
/// # Example
///
/// ```rust
/// use graph_user_agent::{Component, UserAgent, VersionError};
///
/// let agent = UserAgent::builder().build();
/// match agent.semver(Component::Driver) {
///     Ok(version) => println!("driver {version}"),
///     Err(VersionError::Missing { component }) => println!("no version for {component:?}"),
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VersionError {
    /// No version was supplied for the component.
    #[error("No version available for {}", .component.product_name())]
    Missing {
        /// The component without a version.
        component: Component,
    },

    /// The component version is not a valid semantic version.
    #[error("Invalid {} version '{value}': {source}", .component.product_name())]
    Invalid {
        /// The component whose version failed to parse.
        component: Component,
        /// The raw version string.
        value: String,
        /// Underlying parse error.
        #[source]
        source: semver::Error,
    },
}

impl VersionError {
    /// The component this error refers to.
    pub fn component(&self) -> Component {
        match self {
            Self::Missing { component } | Self::Invalid { component, .. } => *component,
        }
    }
}

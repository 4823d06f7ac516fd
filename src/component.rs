//! Library components whose versions are reported in the user agent.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A library component identified in the user agent banner.
///
/// The banner lists the components in declaration order: the driver that
/// talks to the database, the object mapping framework on top of it, and the
/// repository integration that ties both together.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]`. When matching on `Component`,
/// include a wildcard pattern:
///
/// ```rust
/// use graph_user_agent::Component;
///
/// fn describe(component: Component) -> &'static str {
///     match component {
///         Component::Driver => "database driver",
///         Component::Framework => "mapping framework",
///         Component::Integration => "repository integration",
///         _ => "unknown component",
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Component {
    /// The graph-database driver.
    Driver,
    /// The object-to-graph mapping framework.
    Framework,
    /// The repository integration module.
    Integration,
}

impl Component {
    /// Product label rendered in front of the version in the banner.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_user_agent::Component;
    ///
    /// assert_eq!(Component::Driver.product_name(), "neo4j-rust");
    /// ```
    pub fn product_name(&self) -> &'static str {
        match self {
            Self::Driver => "neo4j-rust",
            Self::Framework => "graph-mapping",
            Self::Integration => "graph-mapping-neo4j",
        }
    }

    /// Build-time environment variable carrying this component's version.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Driver => "GRAPH_UA_DRIVER_VERSION",
            Self::Framework => "GRAPH_UA_FRAMEWORK_VERSION",
            Self::Integration => "GRAPH_UA_INTEGRATION_VERSION",
        }
    }

    /// Iterator over all components, in banner order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_user_agent::Component;
    ///
    /// let components: Vec<_> = Component::all().collect();
    /// assert_eq!(components.len(), 3);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

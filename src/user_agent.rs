//! The user agent banner attached to outgoing query metadata.

use crate::version::{normalize, strip_qualifier};
use crate::{Component, ComponentVersions, RuntimeInfo, VersionError};
use semver::Version;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Placeholder rendered for an absent component version.
const UNKNOWN: &str = "-";

/// Human-readable identification of the runtime and library versions.
///
/// The banner has the form
///
/// ```text
/// Rust/1.75.0 (unknown linux x86_64-unknown-linux-gnu) neo4j-rust/5.10.0 graph-mapping/- graph-mapping-neo4j/6.1.11
/// ```
///
/// and is rendered once, when the value is built. A `UserAgent` is immutable;
/// build one at startup and hand it to whatever attaches it to sessions or
/// transactions, or use [`UserAgent::current`] for the process-wide instance.
///
/// # Example
///
/// ```rust
/// use graph_user_agent::{ComponentVersions, RuntimeInfo, UserAgent};
///
/// let runtime = RuntimeInfo::new("Rust", "1.75.0", "unknown", "linux", "x86_64-unknown-linux-gnu");
/// let versions = ComponentVersions {
///     driver: Some("5.10.0-alpha01".to_string()),
///     ..Default::default()
/// };
/// let agent = UserAgent::new(&runtime, versions);
///
/// assert_eq!(agent.driver_version(), Some("5.10.0"));
/// assert_eq!(
///     agent.to_string(),
///     "Rust/1.75.0 (unknown linux x86_64-unknown-linux-gnu) neo4j-rust/5.10.0 graph-mapping/- graph-mapping-neo4j/-"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    driver_version: Option<String>,
    framework_version: Option<String>,
    integration_version: Option<String>,
    representation: String,
}

impl UserAgent {
    /// Build a user agent with the default product names.
    pub fn new(runtime: &RuntimeInfo, versions: ComponentVersions) -> Self {
        Self::with_labels(runtime, &versions, &ProductLabels::default())
    }

    /// Start a [`UserAgentBuilder`].
    pub fn builder() -> UserAgentBuilder {
        UserAgentBuilder::default()
    }

    /// The process-wide user agent.
    ///
    /// Built on first access from [`RuntimeInfo::current`] and
    /// [`ComponentVersions::from_build_env`]; every later call returns the
    /// same instance.
    pub fn current() -> &'static UserAgent {
        static CURRENT: OnceLock<UserAgent> = OnceLock::new();
        CURRENT.get_or_init(|| {
            UserAgent::new(&RuntimeInfo::current(), ComponentVersions::from_build_env())
        })
    }

    fn with_labels(
        runtime: &RuntimeInfo,
        versions: &ComponentVersions,
        labels: &ProductLabels,
    ) -> Self {
        let driver_version =
            normalize(versions.driver.as_deref()).map(|v| strip_qualifier(&v).to_string());
        let framework_version = normalize(versions.framework.as_deref());
        let integration_version = normalize(versions.integration.as_deref());

        let mut agent = Self {
            driver_version,
            framework_version,
            integration_version,
            representation: String::new(),
        };

        let mut representation = runtime.to_string();
        for component in Component::all() {
            let version = agent.version(component).unwrap_or_else(|| {
                debug!(component = ?component, "No version available, rendering placeholder");
                UNKNOWN
            });
            representation.push(' ');
            representation.push_str(labels.get(component));
            representation.push('/');
            representation.push_str(version);
        }
        trace!(user_agent = %representation, "Rendered user agent");

        agent.representation = representation;
        agent
    }

    /// Version of the driver, with any pre-release qualifier stripped.
    pub fn driver_version(&self) -> Option<&str> {
        self.driver_version.as_deref()
    }

    /// Version of the object mapping framework.
    pub fn framework_version(&self) -> Option<&str> {
        self.framework_version.as_deref()
    }

    /// Version of the repository integration module.
    pub fn integration_version(&self) -> Option<&str> {
        self.integration_version.as_deref()
    }

    /// Version of a component as rendered in the banner.
    pub fn version(&self, component: Component) -> Option<&str> {
        match component {
            Component::Driver => self.driver_version(),
            Component::Framework => self.framework_version(),
            Component::Integration => self.integration_version(),
        }
    }

    /// Parse a component version as a semantic version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_user_agent::{Component, UserAgent};
    /// use semver::Version;
    ///
    /// let agent = UserAgent::builder().driver_version("5.10.0-alpha01").build();
    /// assert_eq!(agent.semver(Component::Driver).unwrap(), Version::new(5, 10, 0));
    /// assert!(agent.semver(Component::Framework).is_err());
    /// ```
    pub fn semver(&self, component: Component) -> Result<Version, VersionError> {
        let value = self
            .version(component)
            .ok_or(VersionError::Missing { component })?;
        Version::parse(value).map_err(|source| VersionError::Invalid {
            component,
            value: value.to_string(),
            source,
        })
    }

    /// The rendered banner.
    pub fn as_str(&self) -> &str {
        &self.representation
    }
}

impl std::fmt::Display for UserAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.representation)
    }
}

impl AsRef<str> for UserAgent {
    fn as_ref(&self) -> &str {
        &self.representation
    }
}

impl Serialize for UserAgent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.representation)
    }
}

/// Product names rendered in front of each component version.
#[derive(Debug, Clone, Default)]
struct ProductLabels {
    driver: Option<String>,
    framework: Option<String>,
    integration: Option<String>,
}

impl ProductLabels {
    fn get(&self, component: Component) -> &str {
        let custom = match component {
            Component::Driver => self.driver.as_deref(),
            Component::Framework => self.framework.as_deref(),
            Component::Integration => self.integration.as_deref(),
        };
        custom.unwrap_or_else(|| component.product_name())
    }
}

/// Builder for a [`UserAgent`] with custom inputs.
///
/// Unset runtime information defaults to [`RuntimeInfo::current`], unset
/// versions are absent and unset product names fall back to
/// [`Component::product_name`].
///
/// # Example
///
/// ```rust
/// use graph_user_agent::{Component, RuntimeInfo, UserAgent};
///
/// let agent = UserAgent::builder()
///     .runtime(RuntimeInfo::new("Java", "17.0.2", "Example Corp", "ExampleVM", "17.0.2+8"))
///     .driver_version("5.10.0-alpha01")
///     .integration_version("6.1.11")
///     .product_name(Component::Driver, "neo4j-java")
///     .product_name(Component::Framework, "spring-data")
///     .product_name(Component::Integration, "spring-data-neo4j")
///     .build();
///
/// assert_eq!(
///     agent.as_str(),
///     "Java/17.0.2 (Example Corp ExampleVM 17.0.2+8) neo4j-java/5.10.0 spring-data/- spring-data-neo4j/6.1.11"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserAgentBuilder {
    runtime: Option<RuntimeInfo>,
    versions: ComponentVersions,
    labels: ProductLabels,
}

impl UserAgentBuilder {
    /// Use explicit runtime information.
    pub fn runtime(mut self, runtime: RuntimeInfo) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Replace all component versions at once.
    pub fn versions(mut self, versions: ComponentVersions) -> Self {
        self.versions = versions;
        self
    }

    /// Set the driver version.
    pub fn driver_version(mut self, version: impl Into<String>) -> Self {
        self.versions.driver = Some(version.into());
        self
    }

    /// Set the mapping framework version.
    pub fn framework_version(mut self, version: impl Into<String>) -> Self {
        self.versions.framework = Some(version.into());
        self
    }

    /// Set the repository integration version.
    pub fn integration_version(mut self, version: impl Into<String>) -> Self {
        self.versions.integration = Some(version.into());
        self
    }

    /// Override the product name rendered for a component.
    pub fn product_name(mut self, component: Component, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match component {
            Component::Driver => self.labels.driver = name,
            Component::Framework => self.labels.framework = name,
            Component::Integration => self.labels.integration = name,
        }
        self
    }

    /// Render the user agent.
    pub fn build(self) -> UserAgent {
        let runtime = self.runtime.unwrap_or_else(RuntimeInfo::current);
        UserAgent::with_labels(&runtime, &self.versions, &self.labels)
    }
}

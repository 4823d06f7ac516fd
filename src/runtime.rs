//! Host runtime identification.

use serde::{Deserialize, Serialize};

/// Identification of the runtime executing the process.
///
/// Rendered at the front of the banner as `kind/version (vendor name vm_version)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// Runtime family, e.g. `Rust`.
    pub kind: String,
    /// Runtime version, e.g. the rustc version.
    pub version: String,
    /// Vendor of the target platform.
    pub vendor: String,
    /// Name of the target platform.
    pub name: String,
    /// Build identifier of the target platform.
    pub vm_version: String,
}

impl RuntimeInfo {
    /// Create runtime information from explicit values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_user_agent::RuntimeInfo;
    ///
    /// let runtime = RuntimeInfo::new("Java", "17.0.2", "Example Corp", "ExampleVM", "17.0.2+8");
    /// assert_eq!(runtime.to_string(), "Java/17.0.2 (Example Corp ExampleVM 17.0.2+8)");
    /// ```
    pub fn new(
        kind: impl Into<String>,
        version: impl Into<String>,
        vendor: impl Into<String>,
        name: impl Into<String>,
        vm_version: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            version: version.into(),
            vendor: vendor.into(),
            name: name.into(),
            vm_version: vm_version.into(),
        }
    }

    /// Runtime information for this build.
    ///
    /// The values are captured when the crate is compiled: the rustc
    /// version, the target vendor, the target OS and the full target triple.
    pub fn current() -> Self {
        Self::new(
            "Rust",
            env!("GRAPH_UA_RUSTC_VERSION"),
            env!("GRAPH_UA_TARGET_VENDOR"),
            env!("GRAPH_UA_TARGET_OS"),
            env!("GRAPH_UA_TARGET"),
        )
    }
}

impl std::fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({} {} {})",
            self.kind, self.version, self.vendor, self.name, self.vm_version
        )
    }
}

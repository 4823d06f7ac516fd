//! # graph-user-agent
//!
//! User agent banner identifying queries issued through a graph-database
//! mapping stack.
//!
//! The banner names the host runtime and the versions of the database
//! driver, the object mapping framework and the repository integration. It
//! is meant to be attached as connection or transaction metadata so that
//! queries can be traced back to the software that produced them.
//!
//! ## Features
//!
//! - `UserAgent` holding the rendered banner and the normalized versions
//! - `UserAgentBuilder` for custom runtime information, versions and product names
//! - `ComponentVersions` supplied explicitly or embedded at compile time
//! - `RuntimeInfo` describing the rustc version and target platform
//! - `UserAgent::current()` for a process-wide instance built once
//!
//! ## Example
//!
//! ```rust
//! use graph_user_agent::{ComponentVersions, RuntimeInfo, UserAgent};
//!
//! // Build once at startup and pass it to whatever opens sessions
//! let agent = UserAgent::new(&RuntimeInfo::current(), ComponentVersions::from_build_env());
//! println!("user agent: {agent}");
//!
//! // Or use the shared instance
//! let shared = UserAgent::current();
//! assert_eq!(shared.as_str(), UserAgent::current().as_str());
//! ```

mod component;
mod error;
mod runtime;
mod user_agent;
mod version;
mod versions;

pub use component::Component;
pub use error::VersionError;
pub use runtime::RuntimeInfo;
pub use user_agent::{UserAgent, UserAgentBuilder};
pub use versions::ComponentVersions;

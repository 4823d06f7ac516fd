//! Captures the host runtime identification for `RuntimeInfo::current()`.

use std::env;

const COMPONENT_VARS: &[&str] = &[
    "GRAPH_UA_DRIVER_VERSION",
    "GRAPH_UA_FRAMEWORK_VERSION",
    "GRAPH_UA_INTEGRATION_VERSION",
];

fn main() {
    let rustc = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let vendor = env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_else(|_| "unknown".to_string());
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| "unknown".to_string());
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GRAPH_UA_RUSTC_VERSION={rustc}");
    println!("cargo:rustc-env=GRAPH_UA_TARGET_VENDOR={vendor}");
    println!("cargo:rustc-env=GRAPH_UA_TARGET_OS={os}");
    println!("cargo:rustc-env=GRAPH_UA_TARGET={target}");

    for var in COMPONENT_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}

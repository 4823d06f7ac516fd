//! Integration tests for the user agent banner.
//!
//! These tests only rely on the public API and hold regardless of which
//! component versions were embedded at build time.

use graph_user_agent::{
    Component, ComponentVersions, RuntimeInfo, UserAgent, VersionError,
};

fn example_runtime() -> RuntimeInfo {
    RuntimeInfo::new("Java", "17.0.2", "Example Corp", "ExampleVM", "17.0.2+8")
}

#[test]
fn test_banner_with_java_product_names() {
    let agent = UserAgent::builder()
        .runtime(example_runtime())
        .versions(ComponentVersions::new(
            Some("5.10.0-alpha01"),
            None::<&str>,
            Some("6.1.11"),
        ))
        .product_name(Component::Driver, "neo4j-java")
        .product_name(Component::Framework, "spring-data")
        .product_name(Component::Integration, "spring-data-neo4j")
        .build();

    assert_eq!(
        agent.to_string(),
        "Java/17.0.2 (Example Corp ExampleVM 17.0.2+8) neo4j-java/5.10.0 spring-data/- spring-data-neo4j/6.1.11"
    );
}

#[test]
fn test_banner_with_default_product_names() {
    let agent = UserAgent::new(
        &example_runtime(),
        ComponentVersions::new(Some("5.10.0"), Some("3.1.0"), Some("6.1.11")),
    );

    assert_eq!(
        agent.as_str(),
        "Java/17.0.2 (Example Corp ExampleVM 17.0.2+8) neo4j-rust/5.10.0 graph-mapping/3.1.0 graph-mapping-neo4j/6.1.11"
    );
}

#[test]
fn test_absent_metadata_renders_dashes() {
    let agent = UserAgent::new(&example_runtime(), ComponentVersions::default());

    for component in Component::all() {
        assert!(
            agent
                .as_str()
                .contains(&format!(" {}/-", component.product_name())),
            "{} should render a placeholder",
            component.product_name()
        );
        assert!(matches!(
            agent.semver(component),
            Err(VersionError::Missing { .. })
        ));
    }
}

#[test]
fn test_driver_truncation_cases() {
    let cases = [
        ("5.10.0-alpha01", "5.10.0"),
        ("5.10.0", "5.10.0"),
        ("-beta", "-beta"),
    ];

    for (input, expected) in cases {
        let agent = UserAgent::builder()
            .runtime(example_runtime())
            .driver_version(input)
            .build();
        assert_eq!(agent.driver_version(), Some(expected), "input {input}");
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let agent = UserAgent::builder()
        .runtime(example_runtime())
        .driver_version("5.10.0")
        .build();

    let first = agent.to_string();
    let second = agent.to_string();
    assert_eq!(first, second);
    assert_eq!(agent.clone().as_str(), agent.as_str());
}

#[test]
fn test_same_inputs_same_banner() {
    let versions = ComponentVersions::new(Some("5.10.0"), None::<&str>, Some("6.1.11"));
    let first = UserAgent::new(&example_runtime(), versions.clone());
    let second = UserAgent::new(&example_runtime(), versions);
    assert_eq!(first, second);
}

#[test]
fn test_current_is_shared_and_uses_build_env() {
    let agent = UserAgent::current();
    assert!(std::ptr::eq(agent, UserAgent::current()));

    let expected = UserAgent::new(&RuntimeInfo::current(), ComponentVersions::from_build_env());
    assert_eq!(agent, &expected);
    assert!(agent.as_str().starts_with("Rust/"));
}

#[test]
fn test_current_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| UserAgent::current() as *const UserAgent as usize))
        .collect();

    let addresses: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    let expected = UserAgent::current() as *const UserAgent as usize;
    assert!(addresses.iter().all(|&addr| addr == expected));
}

//! Registration-API tests: the C1/C2/C3 surface exercised directly, with no
//! resolution pass involved.

use rc_depend::{DepError, RelationKind, ServiceRegistry};

#[test]
fn add_then_get_round_trips() {
    let mut registry = ServiceRegistry::new();
    registry.add("sshd").unwrap();
    assert!(registry.contains("sshd"));
    assert_eq!(registry.get("sshd").unwrap().name(), "sshd");
}

#[test]
fn duplicate_add_is_rejected() {
    let mut registry = ServiceRegistry::new();
    registry.add("sshd").unwrap();
    let err = registry.add("sshd").unwrap_err();
    assert_eq!(err, DepError::DuplicateName("sshd".to_string()));
}

#[test]
fn empty_name_is_rejected() {
    let mut registry = ServiceRegistry::new();
    assert!(matches!(registry.add(""), Err(DepError::InvalidInput(_))));
}

#[test]
fn add_dependency_on_unknown_source_fails() {
    let mut registry = ServiceRegistry::new();
    let err = registry.add_dependency("sshd", "net", RelationKind::Need).unwrap_err();
    assert_eq!(err, DepError::NotFound("sshd".to_string()));
}

#[test]
fn add_dependency_accepts_unknown_peer() {
    let mut registry = ServiceRegistry::new();
    registry.add("sshd").unwrap();
    registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
    assert!(registry.get("sshd").unwrap().relations().contains(RelationKind::Need, "net"));
}

#[test]
fn duplicate_dependency_is_accepted_silently() {
    let mut registry = ServiceRegistry::new();
    registry.add("sshd").unwrap();
    registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
    registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
    assert_eq!(registry.get("sshd").unwrap().relations().get(RelationKind::Need).len(), 1);
}

#[test]
fn set_mtime_requires_existing_service() {
    let mut registry = ServiceRegistry::new();
    let err = registry.set_mtime("sshd", 100).unwrap_err();
    assert_eq!(err, DepError::NotFound("sshd".to_string()));

    registry.add("sshd").unwrap();
    registry.set_mtime("sshd", 100).unwrap();
    assert_eq!(registry.get("sshd").unwrap().mtime(), 100);
}

#[test]
fn enumeration_order_is_lexicographic() {
    let mut registry = ServiceRegistry::new();
    for name in ["zed", "apache", "mysql", "nginx"] {
        registry.add(name).unwrap();
    }
    let names: Vec<_> = registry.enumerate().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["apache", "mysql", "nginx", "zed"]);
}

#[test]
fn virtual_index_keeps_first_provider() {
    let mut registry = ServiceRegistry::new();
    registry.add("dhcpcd").unwrap();
    registry.add("wicd").unwrap();

    assert!(matches!(
        registry.virtuals_mut().add("dhcpcd", "net"),
        rc_depend::AddOutcome::Bound
    ));
    assert!(matches!(
        registry.virtuals_mut().add("wicd", "net"),
        rc_depend::AddOutcome::AlreadyProvided
    ));
    assert_eq!(registry.get_by_virtual("net").unwrap().name(), "dhcpcd");
}

#[test]
fn describe_all_is_sorted_and_reports_edge_counts() {
    let mut registry = ServiceRegistry::new();
    registry.add("a").unwrap();
    registry.add("b").unwrap();
    registry.add_dependency("a", "b", RelationKind::Need).unwrap();

    let descriptors = registry.describe_all();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name, "a");
    assert_eq!(descriptors[0].edge_count(RelationKind::Need), 1);
    assert_eq!(descriptors[1].name, "b");
    assert_eq!(descriptors[1].edge_count(RelationKind::Need), 0);
}

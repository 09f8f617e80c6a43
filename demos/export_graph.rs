//! Resolves a service graph and prints its JSON export. Run with
//! `cargo run --example export_graph --features graph-export`.

use rc_depend::{DependencyGraph, RelationKind, Resolver, ServiceRegistry};

fn main() {
    let mut registry = ServiceRegistry::new();
    for name in ["dhcpcd", "sshd", "httpd"] {
        registry.add(name).unwrap();
    }
    registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
    registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
    registry.add_dependency("httpd", "net", RelationKind::Need).unwrap();
    registry.add_dependency("httpd", "sshd", RelationKind::After).unwrap();

    Resolver::new().resolve_all(&mut registry).unwrap();

    let graph = DependencyGraph::export_now(&registry);
    println!("{}", graph.to_json().unwrap());
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rc_depend::{DependencyGraph, RelationKind, Resolver, ServiceRegistry};

#[derive(Debug, Arbitrary)]
struct RawEdge {
    source: u8,
    peer: u8,
    kind: u8,
}

fn name_for(index: u8) -> String {
    format!("svc{}", index % 5)
}

fn kind_for(index: u8) -> RelationKind {
    // includes PROVIDE, to exercise the virtual-folding path before export.
    RelationKind::ALL[(index % 8) as usize]
}

fuzz_target!(|edges: Vec<RawEdge>| {
    let mut registry = ServiceRegistry::new();
    for index in 0..5u8 {
        let _ = registry.add(&name_for(index));
    }
    for edge in &edges {
        let _ = registry.add_dependency(&name_for(edge.source), &name_for(edge.peer), kind_for(edge.kind));
    }

    Resolver::new().resolve_all(&mut registry).unwrap();

    let graph = DependencyGraph::export_now(&registry);
    let json = graph.to_json().expect("export must always serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("must round-trip through JSON");
    assert!(parsed.is_object());

    let yaml = graph.to_yaml().expect("export must always serialize to yaml");
    assert!(!yaml.is_empty());
});

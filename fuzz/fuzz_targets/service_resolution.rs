#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rc_depend::{CollectingDiagnostics, RelationKind, Resolver, ServiceRegistry};

#[derive(Debug, Arbitrary)]
struct RawEdge {
    source: u8,
    peer: u8,
    kind: u8,
}

fn name_for(index: u8) -> String {
    format!("svc{}", index % 6)
}

fn active_kind_for(index: u8) -> RelationKind {
    RelationKind::SWEEP_ORDER[(index % 4) as usize]
}

fuzz_target!(|edges: Vec<RawEdge>| {
    let mut registry = ServiceRegistry::new();
    for index in 0..6u8 {
        let _ = registry.add(&name_for(index));
    }
    for edge in &edges {
        let _ = registry.add_dependency(
            &name_for(edge.source),
            &name_for(edge.peer),
            active_kind_for(edge.kind),
        );
    }

    let sink = CollectingDiagnostics::new();
    Resolver::with_diagnostics(&sink).resolve_all(&mut registry).unwrap();

    // P2/P4: no self-edges, no symmetric same-kind pairs after resolution.
    for index in 0..6u8 {
        let name = name_for(index);
        let record = registry.get(&name).unwrap();
        for kind in RelationKind::ALL {
            assert!(!record.relations().contains(kind, &name));
        }
        for kind in RelationKind::SWEEP_ORDER {
            for peer in record.relations().get(kind) {
                let peer_record = registry.get(peer).unwrap();
                assert!(!peer_record.relations().contains(kind, &name));
            }
        }
    }

    // Idempotence: a second pass changes nothing.
    let before: Vec<_> = registry.enumerate().map(|r| format!("{r:?}")).collect();
    Resolver::with_diagnostics(&sink).resolve_all(&mut registry).unwrap();
    let after: Vec<_> = registry.enumerate().map(|r| format!("{r:?}")).collect();
    assert_eq!(before, after);
});

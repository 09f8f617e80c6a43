#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rc_depend::{RelationKind, ServiceRegistry};

#[derive(Debug, Arbitrary)]
enum Op {
    Add(u8),
    AddDependency(u8, u8, u8),
    SetMtime(u8, u64),
}

fn name_for(index: u8) -> String {
    format!("svc{}", index % 8)
}

fn kind_for(index: u8) -> RelationKind {
    RelationKind::ALL[(index % 8) as usize]
}

fuzz_target!(|ops: Vec<Op>| {
    let mut registry = ServiceRegistry::new();

    for op in ops {
        match op {
            Op::Add(index) => {
                let _ = registry.add(&name_for(index));
            }
            Op::AddDependency(source, peer, kind) => {
                let _ = registry.add_dependency(&name_for(source), &name_for(peer), kind_for(kind));
            }
            Op::SetMtime(index, mtime) => {
                let _ = registry.set_mtime(&name_for(index), mtime);
            }
        }
    }

    // Enumeration must stay sorted regardless of the operation sequence.
    let names: Vec<_> = registry.enumerate().map(|r| r.name().to_string()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
});

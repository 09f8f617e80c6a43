//! Builds a small rc-scripts-style service graph, resolves it, and prints a
//! per-service summary. Run with `cargo run --example resolve_services`.

use rc_depend::{CollectingDiagnostics, RelationKind, Resolver, ServiceRegistry};

fn main() {
    env_logger::init();

    let mut registry = ServiceRegistry::new();
    for name in ["dhcpcd", "wicd", "sshd", "httpd", "syslog-ng"] {
        registry.add(name).unwrap();
    }

    registry.add_dependency("dhcpcd", "net", RelationKind::Provide).unwrap();
    registry.add_dependency("wicd", "net", RelationKind::Provide).unwrap();
    registry.add_dependency("sshd", "net", RelationKind::Need).unwrap();
    registry.add_dependency("sshd", "syslog-ng", RelationKind::Use).unwrap();
    registry.add_dependency("httpd", "net", RelationKind::Need).unwrap();
    registry.add_dependency("httpd", "php-fpm", RelationKind::Need).unwrap();
    registry.add_dependency("httpd", "sshd", RelationKind::After).unwrap();

    let sink = CollectingDiagnostics::new();
    Resolver::with_diagnostics(&sink).resolve_all(&mut registry).unwrap();

    println!("Resolved {} services:\n", registry.len());
    for descriptor in registry.describe_all() {
        print!("  {:<12}", descriptor.name);
        if let Some(virt) = &descriptor.provides {
            print!(" (provides `{virt}`)");
        }
        println!();
        for kind in RelationKind::SWEEP_ORDER {
            let count = descriptor.edge_count(kind);
            if count > 0 {
                println!("    {kind}: {count}");
            }
        }
        if descriptor.edge_count(RelationKind::Broken) > 0 {
            println!("    BROKEN: {}", descriptor.edge_count(RelationKind::Broken));
        }
    }

    if !sink.warnings().is_empty() {
        println!("\nWarnings:");
        for warning in sink.warnings() {
            println!("  - {warning}");
        }
    }
}

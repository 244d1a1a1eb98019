use doc_implementors::{CollectingRegistrar, HostContext, ImplementorMap};
use std::sync::Arc;

fn example_mapping() -> ImplementorMap {
    let mut map = ImplementorMap::new();
    map.insert("pkgA", vec!["implements Drop".to_string()]);
    map.insert("pkgB", vec![]);
    map
}

#[test]
fn hook_present_receives_mapping_verbatim() {
    let registrar = Arc::new(CollectingRegistrar::new());
    let mut host = HostContext::with_registrar(registrar.clone());

    host.publish(example_mapping());

    let collected = registrar.collected();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0], example_mapping());

    // Keys and values come through in order, untouched.
    let names: Vec<&str> = collected[0].crate_names().collect();
    assert_eq!(names, vec!["pkgA", "pkgB"]);
    assert_eq!(collected[0].get("pkgA").unwrap(), ["implements Drop".to_string()]);
    assert!(collected[0].get("pkgB").unwrap().is_empty());

    // Pending slot remains untouched.
    assert!(host.pending().is_none());
}

#[test]
fn hook_absent_parks_mapping_with_no_other_effect() {
    let mut host = HostContext::new();

    host.publish(example_mapping());

    assert_eq!(host.pending(), Some(&example_mapping()));
    assert!(!host.has_registrar());
}

#[test]
fn repeated_loads_before_binding_keep_only_the_last_mapping() {
    let mut host = HostContext::new();

    let mut m1 = ImplementorMap::new();
    m1.insert("first_load", vec![]);
    let mut m2 = ImplementorMap::new();
    m2.insert("second_load", vec!["impl Send".to_string()]);

    host.publish(m1);
    host.publish(m2.clone());

    let registrar = Arc::new(CollectingRegistrar::new());
    host.bind_registrar(registrar.clone());

    // Only the last writer's mapping survived the hand-off.
    let collected = registrar.collected();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0], m2);
}

#[test]
fn draining_between_loads_preserves_both_mappings() {
    let mut host = HostContext::new();

    let mut m1 = ImplementorMap::new();
    m1.insert("first_load", vec![]);
    let mut m2 = ImplementorMap::new();
    m2.insert("second_load", vec![]);

    host.publish(m1.clone());
    let drained = host.take_pending();
    host.publish(m2.clone());

    assert_eq!(drained, Some(m1));
    assert_eq!(host.take_pending(), Some(m2));
    assert_eq!(host.take_pending(), None);
}

#[test]
fn binding_after_drain_does_not_replay() {
    let mut host = HostContext::new();
    host.publish(example_mapping());
    assert!(host.take_pending().is_some());

    let registrar = Arc::new(CollectingRegistrar::new());
    host.bind_registrar(registrar.clone());
    assert!(registrar.collected().is_empty());

    // Publishes after binding go straight to the hook.
    host.publish(example_mapping());
    assert_eq!(registrar.collected().len(), 1);
    assert!(host.pending().is_none());
}

use tilefall_engine::kinds::K_EMPTY;
use tilefall_engine::{KindRegistry, WorldCore};

const BUNDLE: &str = r#"{
  "kinds": [
    { "id": 0, "key": "base:empty", "name": "Empty", "color": 4294967295, "usesGravity": false, "hidden": true },
    { "id": 1, "key": "mod:dust",  "name": "Dust",  "color": 4289374890, "usesGravity": true, "slip": 2 },
    { "id": 2, "key": "mod:ember", "name": "Ember", "color": 4278222325, "usesGravity": false, "lifeSpan": 5, "flammable": true }
  ]
}"#;

#[test]
fn bundle_smoke_parses_and_has_core_invariants() {
    let registry = KindRegistry::from_bundle_json(BUNDLE).expect("bundle should parse");

    assert_eq!(registry.kind_count(), 3);
    assert!(registry.is_valid_kind_id(K_EMPTY));
    assert!(registry.props(K_EMPTY).is_some());

    assert_eq!(registry.id_by_key("mod:dust"), Some(1));
    let dust = registry.props(1).expect("dust props");
    assert!(dust.uses_gravity);
    assert_eq!(dust.slip, 2);

    let manifest = registry.manifest_json();
    assert!(manifest.contains("\"formatVersion\":1"));
    assert!(manifest.contains("mod:ember"));
}

#[test]
fn bundle_rejects_a_kind_that_both_decays_and_falls() {
    let bad = r#"{
      "kinds": [
        { "id": 0, "key": "base:empty", "color": 0, "usesGravity": false },
        { "id": 1, "key": "mod:bad", "color": 0, "usesGravity": true, "lifeSpan": 3 }
      ]
    }"#;
    let err = KindRegistry::from_bundle_json(bad).expect_err("must reject");
    assert!(err.contains("mod:bad"));
}

#[test]
fn bundle_rejects_a_missing_empty_kind() {
    let bad = r#"{
      "kinds": [
        { "id": 1, "key": "mod:lonely", "color": 0, "usesGravity": true }
      ]
    }"#;
    assert!(KindRegistry::from_bundle_json(bad).is_err());
}

#[test]
fn loaded_bundle_drives_the_simulation() {
    let mut world = WorldCore::new(6, 6);
    world
        .load_kind_bundle_json(BUNDLE)
        .expect("bundle should load");

    let manifest = world.kind_manifest_json();
    assert!(manifest.contains("mod:dust"));

    assert!(world.paint_cell(3, 0, 1));
    for _ in 0..8 {
        world.step();
    }
    assert_eq!(world.kind_at(3, 5), 1);
}

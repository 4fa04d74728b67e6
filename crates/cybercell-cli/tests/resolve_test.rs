use assert_cmd::cargo::cargo_bin_cmd;
use cybercell_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_resolve_path_with_anchor() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cybercell");
    world
        .configure_command(&mut cmd)
        .arg("resolve")
        .arg("/cyber-awareness#topics");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Path:     /cyber-awareness"))
        .stdout(predicate::str::contains("Anchor:   #topics"));
}

#[test]
fn test_resolve_defaults_to_home() {
    let world = TestWorld::new();
    let json = world.run_json(&["resolve"]).unwrap().json().unwrap();
    assertions::assert_route(&json, "home").unwrap();
}

#[test]
fn test_resolve_category() {
    let world = TestWorld::new();
    let json = world
        .run_json(&["resolve", "--category", "threats"])
        .unwrap()
        .json()
        .unwrap();
    assertions::assert_route(&json, "recent_threats").unwrap();
    assert_eq!(json["content"]["fallback"], false);
}

#[test]
fn test_unknown_category_falls_back_with_warning() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["resolve", "--category", "Quantum"])
        .expect("Failed to run resolve");
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_route(&json, "home").unwrap();
    assert_eq!(json["content"]["fallback"], true);
    assert_eq!(json["badge"]["level"], "warning");
    assert!(
        result.stderr().contains("falling back to home"),
        "expected a warning log, got: {}",
        result.stderr()
    );
}

#[test]
fn test_category_and_url_conflict() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cybercell");
    world
        .configure_command(&mut cmd)
        .args(["resolve", "/", "--category", "Threats"]);
    cmd.assert().failure();
}

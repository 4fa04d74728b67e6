use assert_cmd::cargo::cargo_bin_cmd;
use cybercell_testing::{TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_render_mitigation_json() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["render", "/mitigation", "--width", "120"])
        .expect("Failed to run render");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Invalid JSON");
    assertions::assert_route(&json, "mitigation").unwrap();
    assertions::assert_section_cards(&json, "core-strategies", 6).unwrap();
    assertions::assert_section_cards(&json, "industry-frameworks", 3).unwrap();
    assertions::assert_active_nav(&json, Some("Mitigation")).unwrap();
    assertions::assert_tiles_fit(&json).unwrap();
    assert!(json.get("badge").is_none());
}

#[test]
fn test_render_narrow_width_still_fits() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["render", "/references", "--width", "50"])
        .expect("Failed to run render");
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["breakpoint"], "mobile");
    assertions::assert_tiles_fit(&json).unwrap();
}

#[test]
fn test_render_unknown_path_is_not_found() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["render", "/threats"])
        .expect("Failed to run render");
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_route(&json, "not_found").unwrap();
    assertions::assert_active_nav(&json, None).unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["suggestions"][0]["command"], "cybercell routes");
}

#[test]
fn test_render_fragment_mode_hrefs() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["--mode", "fragment", "render", "#/references#reading"])
        .expect("Failed to run render");
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_route(&json, "references").unwrap();
    assert_eq!(json["content"]["href"], "#/references#reading");
    assert_eq!(json["content"]["anchor_found"], true);
    assert_eq!(json["content"]["footer"]["href"], "#/contact");
}

#[test]
fn test_render_plain_text() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cybercell");
    world
        .configure_command(&mut cmd)
        .arg("render")
        .arg("/contact")
        .arg("--width")
        .arg("100");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("◆ Cyber Cell"))
        .stdout(predicate::str::contains("Developed by Pynevera"))
        // Piped output carries no ANSI escapes
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_render_missing_anchor_is_reported() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["render", "/mitigation#ai-security"])
        .expect("Failed to run render");
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["anchor_found"], false);
    assert_eq!(json["badge"]["level"], "info");
}

#[test]
fn test_invalid_config_fails() {
    let world = TestWorld::new().with_config("[display]\ntick_ms = 0\n");
    let mut cmd = cargo_bin_cmd!("cybercell");
    world.configure_command(&mut cmd).arg("render").arg("/");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("display.tick_ms must be at least 1"));
}

use cybercell_testing::{TestWorld, assertions};

// Under the test harness stdout is a pipe, so browse prints the page once.
#[test]
fn test_browse_without_terminal_renders_once() {
    let world = TestWorld::new();
    let result = world
        .run_json(&["browse", "/contact"])
        .expect("Failed to run browse");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_route(&json, "contact").unwrap();
    assertions::assert_active_nav(&json, None).unwrap();

    // Browser logs go to the data directory, not stderr
    assert!(world.data_dir().join("cybercell.log").exists());
}

#[test]
fn test_default_command_is_browse() {
    let world = TestWorld::new();
    let json = world.run_json(&[]).unwrap().json().unwrap();
    assertions::assert_route(&json, "home").unwrap();
    assertions::assert_active_nav(&json, Some("Home")).unwrap();
}

use assert_cmd::cargo::cargo_bin_cmd;
use cybercell_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_init_writes_default_config() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cybercell");
    world.configure_command(&mut cmd).arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Config created"))
        .stdout(predicate::str::contains("addressing     path"));

    let content = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(content.contains("tick_ms = 33"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let world = TestWorld::new().with_config("[display]\naddressing = \"fragment\"\n");

    let mut cmd = cargo_bin_cmd!("cybercell");
    world.configure_command(&mut cmd).arg("init");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("use --force to overwrite"));

    let content = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(content.contains("fragment"));

    let mut cmd = cargo_bin_cmd!("cybercell");
    world.configure_command(&mut cmd).args(["init", "--force"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Replaced"));

    let content = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(!content.contains("fragment"));
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("cybercell");
    cmd.env("CYBERCELL_PATH", world.data_dir())
        .env_remove("RUST_LOG")
        .arg("init");

    cmd.assert().success();
    assert!(world.config_path().exists());
}

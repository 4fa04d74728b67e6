use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("cybercell");
    cmd.arg("--help");

    let mut assert = cmd.assert().success();
    for command in ["browse", "render", "resolve", "routes", "init"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_browse_help_shows_flags() {
    let mut cmd = cargo_bin_cmd!("cybercell");
    cmd.args(["browse", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--no-cursor"))
        .stdout(predicate::str::contains("--scroll-reset"));
}

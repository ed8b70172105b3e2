use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn declutter_help_works() {
    Command::cargo_bin("declutter")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Mental Clutter Reduction"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = [
        "signin", "list", "add", "toggle", "rm", "reset", "progress", "share", "status", "view",
    ];

    for cmd in subcommands {
        Command::cargo_bin("declutter")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}

mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TestApp;

#[test]
fn share_falls_back_to_printing_when_disabled() -> Result<(), Box<dyn std::error::Error>> {
    let app = TestApp::init();
    app.sign_in();
    app.write_config("[share]\nenabled = false\n");

    app.cmd().args(["toggle", "1"]).assert().success();
    app.cmd().args(["toggle", "2"]).assert().success();

    app.cmd()
        .args(["share"])
        .assert()
        .success()
        .stdout(contains(
            "I've completed 2 mental clutter reduction tasks today!",
        ))
        .stdout(contains("copy the summary above"));

    Ok(())
}

#[test]
fn share_json_reports_summary_and_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let app = TestApp::init();
    app.sign_in();
    app.write_config("[share]\nenabled = false\n");

    let output = app
        .cmd()
        .args(["share", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = TestApp::json_output(&output);

    assert_eq!(value["data"]["outcome"], "copy_fallback");
    assert!(value["data"]["summary"]
        .as_str()
        .unwrap()
        .starts_with("I've completed 0 mental clutter reduction tasks today!"));

    Ok(())
}

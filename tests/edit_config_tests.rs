use predicates::str::contains;

mod common;
use common::{ACME_SHEET, Workspace};

fn with_editor(ws: &Workspace, editor: &str) {
    ws.write("pclock.conf", &format!("editor: {editor}\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn edit_saves_validated_changes() {
    let ws = Workspace::new();
    ws.write("Acme.pclock.json", ACME_SHEET);
    with_editor(&ws, "sed -i s/kickoff/planning/");

    ws.pclock()
        .args(["edit", "--yes"])
        .assert()
        .success()
        .stdout(contains("Saved"));

    let doc = ws.json("Acme.pclock.json");
    assert_eq!(doc["tasks"][0]["message"], "planning");
}

#[cfg(target_os = "linux")]
#[test]
fn edit_rejects_invalid_result_and_keeps_file() {
    let ws = Workspace::new();
    ws.write("Acme.pclock.json", ACME_SHEET);
    with_editor(&ws, "sed -i s/\"tasks\"/\"chores\"/");

    ws.pclock()
        .args(["edit", "--yes"])
        .assert()
        .code(1)
        .stderr(contains("not a ProjectClockData object"));

    assert_eq!(ws.read("Acme.pclock.json"), ACME_SHEET);
}

#[cfg(unix)]
#[test]
fn edit_without_changes_is_a_no_op() {
    let ws = Workspace::new();
    ws.write("Acme.pclock.json", ACME_SHEET);
    with_editor(&ws, "true");

    ws.pclock()
        .args(["edit", "--yes"])
        .assert()
        .success()
        .stdout(contains("No changes"));
}

#[cfg(unix)]
#[test]
fn aborted_editor_exits_cleanly() {
    let ws = Workspace::new();
    ws.write("Acme.pclock.json", ACME_SHEET);
    with_editor(&ws, "false");

    ws.pclock()
        .args(["edit", "--yes"])
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(ws.read("Acme.pclock.json"), ACME_SHEET);
}

#[test]
fn config_path_honours_override() {
    let ws = Workspace::new();
    ws.pclock()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(contains("pclock.conf"));
}

#[test]
fn config_init_writes_defaults_once() {
    let ws = Workspace::new();
    ws.pclock()
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(ws.read("pclock.conf").contains("time_params"));

    ws.pclock()
        .args(["config", "--init"])
        .assert()
        .code(1)
        .stderr(contains("config file already exists"));
}

#[test]
fn config_print_shows_effective_values() {
    let ws = Workspace::new();
    ws.write("pclock.conf", "time_params:\n  day: 7.5\n  week: 5\n  month: 4\n  year: 12\n");
    ws.pclock()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("day: 7.5"));
}

#[test]
fn config_time_params_apply_to_sheets_without_settings() {
    let ws = Workspace::new();
    ws.write("pclock.conf", "time_params:\n  day: 2\n  week: 5\n  month: 4\n  year: 12\n");
    ws.write(
        "Acme.pclock.json",
        r#"{ "projectName": "Acme", "tasks": [
            { "begin": "2025-03-01T09:00:00Z", "end": "2025-03-01T12:30:00Z" }
        ] }"#,
    );
    ws.pclock()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Total: 1d 1h 30m"));
}

#[test]
fn broken_config_is_reported() {
    let ws = Workspace::new();
    ws.write("pclock.conf", "time_params: [1, 2]\n");
    ws.write("Acme.pclock.json", ACME_SHEET);
    ws.pclock()
        .arg("status")
        .assert()
        .code(1)
        .stderr(contains("configuration error"));
}

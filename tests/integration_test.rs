use std::process::Command;
use tempfile::TempDir;

fn zametki_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zametki"))
}

#[test]
fn test_add_creates_notes_file() {
    let tmp = TempDir::new().unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Milk", "--tag", "Shopping", "--date", "2024-06-01"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(tmp.path().join("notes.json").exists());

    let data = std::fs::read_to_string(tmp.path().join("notes.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed[0]["id"], 1);
    assert_eq!(parsed[0]["title"], "Milk");
    assert_eq!(parsed[0]["tag"], "Shopping");
    assert_eq!(parsed[0]["content"], "");
}

#[test]
fn test_full_note_workflow() {
    let tmp = TempDir::new().unwrap();

    // Add two notes
    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Milk", "--tag", "Shopping", "--date", "2024-06-01"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created note 1"));
    assert!(stdout.contains("Milk"));

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Gym", "--tag", "Personal", "--date", "2024-06-02"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created note 2"));

    // List both
    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Milk"));
    assert!(stdout.contains("Gym"));

    // Get by id
    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["get", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Milk"));
    assert!(stdout.contains("Shopping"));

    // Update the first note's title
    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["update", "1", "--title", "Milk 2L"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Updated note 1"));

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Milk 2L"));

    // Delete the second note
    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["delete", "2", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Milk 2L"));
    assert!(!stdout.contains("Gym"));
}

#[test]
fn test_list_json_output() {
    let tmp = TempDir::new().unwrap();

    zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Test Note", "--tag", "Work"])
        .output()
        .unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["title"], "Test Note");
}

#[test]
fn test_list_filters_by_tag_and_search() {
    let tmp = TempDir::new().unwrap();

    zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Milk", "--tag", "Shopping"])
        .output()
        .unwrap();
    zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Gym", "--tag", "Personal"])
        .output()
        .unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list", "--tag", "Shopping"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Milk"));
    assert!(!stdout.contains("Gym"));

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["list", "--search", "gym"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gym"));
    assert!(!stdout.contains("Milk"));
}

#[test]
fn test_get_missing_note_fails() {
    let tmp = TempDir::new().unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["get", "42"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Note not found"));
}

#[test]
fn test_delete_without_force_fails_non_interactively() {
    let tmp = TempDir::new().unwrap();

    zametki_cmd()
        .current_dir(tmp.path())
        .args(["add", "Milk", "--tag", "Shopping"])
        .output()
        .unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["delete", "1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
}

#[test]
fn test_notes_persist_across_invocations() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("my-notes.json");
    let file_arg = file.to_str().unwrap();

    zametki_cmd()
        .args(["add", "Milk", "--tag", "Shopping", "--file", file_arg])
        .output()
        .unwrap();

    let output = zametki_cmd()
        .args(["get", "1", "--json", "--file", file_arg])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"title\": \"Milk\""));
}

#[test]
fn test_update_missing_note_fails() {
    let tmp = TempDir::new().unwrap();

    let output = zametki_cmd()
        .current_dir(tmp.path())
        .args(["update", "9", "--title", "nope"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Note not found: 9"));
}

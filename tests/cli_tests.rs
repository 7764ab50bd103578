use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storycraft_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("storycraft"))
}

fn valid_story_json() -> String {
    serde_json::json!({
        "id": "story-test01",
        "title": "As a user, I want to reset my password so that I can regain access",
        "description": "Password reset via emailed link.",
        "invest_criteria": {
            "independent": true,
            "valuable": true,
            "estimable": true,
            "testable": true
        },
        "definition_of_done": "Reset flow passes all scenarios in CI",
        "acceptance_criteria": [{
            "scenario_title": "Reset with a valid token",
            "steps": [
                {"keyword": "Given", "text": "a user requested a reset link"},
                {"keyword": "When", "text": "they open the link within one hour"},
                {"keyword": "Then", "text": "they can set a new password"}
            ]
        }]
    })
    .to_string()
}

fn invalid_story_json() -> String {
    serde_json::json!({
        "id": "story-test02",
        "title": "Fix the login page",
        "description": "",
        "invest_criteria": {},
        "definition_of_done": "short",
        "acceptance_criteria": []
    })
    .to_string()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    storycraft_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("user stories"));
}

#[test]
fn test_version() {
    storycraft_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storycraft"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    storycraft_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let config = std::fs::read_to_string(temp_dir.path().join(".storycraft.toml")).unwrap();
    assert!(config.contains("[llm]"));
    assert!(config.contains("[backlog]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    storycraft_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    storycraft_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn test_analyze_flags_vague_notes() {
    storycraft_cmd()
        .args(["analyze", "The app should be fast and user-friendly."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambiguous term detected"));
}

#[test]
fn test_analyze_clean_notes() {
    storycraft_cmd()
        .args([
            "analyze",
            "As a customer, I want to export my invoices as PDF so that I can archive them. \
             Export must complete within 5 seconds for up to 100 invoices.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ambiguities detected"));
}

#[test]
fn test_analyze_json_output() {
    storycraft_cmd()
        .args(["analyze", "--json", "The system should handle many users."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vague quantifier detected"));
}

#[test]
fn test_analyze_reads_stdin() {
    storycraft_cmd()
        .args(["analyze", "-"])
        .write_stdin("It should be reliable.")
        .assert()
        .success()
        .stdout(predicate::str::contains("reliable"));
}

#[test]
fn test_analyze_rejects_empty_notes() {
    storycraft_cmd()
        .args(["analyze", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_analyze_requires_notes() {
    storycraft_cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes"));
}

// =============================================================================
// Validate
// =============================================================================

#[test]
fn test_validate_accepts_valid_story() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("story.json");
    std::fs::write(&path, valid_story_json()).unwrap();

    storycraft_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_rejects_invalid_story() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("story.json");
    std::fs::write(&path, invalid_story_json()).unwrap();

    storycraft_cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("definition_of_done"))
        .stdout(predicate::str::contains("acceptance_criteria"))
        .stdout(predicate::str::contains("title"))
        .stdout(predicate::str::contains("invest_criteria"));
}

#[test]
fn test_validate_json_output() {
    storycraft_cmd()
        .args(["validate", "-", "--json"])
        .write_stdin(valid_story_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_valid\": true"));
}

#[test]
fn test_validate_rejects_malformed_json() {
    storycraft_cmd()
        .args(["validate", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid user story"));
}

#[test]
fn test_validate_missing_file() {
    storycraft_cmd()
        .args(["validate", "/nonexistent/story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANKS: &str = "../../question-banks";

fn quizbank() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizbank").unwrap();
    cmd.env_remove("QUIZBANK_CATALOG");
    cmd
}

fn with_banks() -> Command {
    let mut cmd = quizbank();
    cmd.arg("--catalog").arg(BANKS);
    cmd
}

#[test]
fn list_all_questions() {
    with_banks()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("11 question(s)"))
        .stdout(predicate::str::contains("Access the third element"));
}

#[test]
fn list_one_section_in_order() {
    let output = with_banks()
        .args(["list", "--section", "arrays", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn list_unknown_section_fails() {
    with_banks()
        .args(["list", "--section", "generators"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section: generators"));
}

#[test]
fn show_question() {
    with_banks()
        .args(["show", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[s1] (strings)"))
        .stdout(predicate::str::contains("Answer:"));
}

#[test]
fn show_markdown_question() {
    with_banks()
        .args(["show", "p1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(promises)"))
        .stdout(predicate::str::contains("Tags: async, ordering"));
}

#[test]
fn show_missing_question_fails() {
    with_banks()
        .args(["show", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question not found: zzz"));
}

#[test]
fn search_is_case_insensitive() {
    let lower = with_banks()
        .args(["search", "array", "--format", "json"])
        .output()
        .unwrap();
    let upper = with_banks()
        .args(["search", "ARRAY", "--format", "json"])
        .output()
        .unwrap();
    assert!(lower.status.success());
    assert_eq!(lower.stdout, upper.stdout);

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&lower.stdout).unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn search_without_match_is_not_an_error() {
    with_banks()
        .args(["search", "generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found."));
}

#[test]
fn tagged_questions() {
    let output = with_banks()
        .args(["tagged", "ASYNC", "--format", "json"])
        .output()
        .unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["p1", "p2", "e1"]);
}

#[test]
fn seeded_sample_is_reproducible() {
    let run = || {
        with_banks()
            .args(["sample", "4", "--seed", "42", "--format", "json"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(entries.len(), 4);
}

#[test]
fn sample_prints_seed() {
    with_banks()
        .args(["sample", "2", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample of 2 (seed 7)"));
}

#[test]
fn oversized_sample_fails() {
    with_banks()
        .args(["sample", "12", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot sample 12 questions, catalog holds only 11",
        ));
}

#[test]
fn sections_counts() {
    with_banks()
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("event-loop"))
        .stdout(predicate::str::contains("11 question(s) total"));
}

#[test]
fn validate_bank_directory() {
    with_banks()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript Basics (6 questions)"))
        .stdout(predicate::str::contains(
            "Async JavaScript and React (5 questions)",
        ))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("thin.toml"),
        r#"
[bank]
id = "thin"
name = "Thin"
default_section = "react"

[[questions]]
id = "r1"
prompt = "What is JSX?"
"#,
    )
    .unwrap();

    quizbank()
        .arg("--catalog")
        .arg(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[thin/r1] WARNING: no expected_answer"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_fails_on_unparseable_file() {
    let dir = TempDir::new().unwrap();
    let basics = std::fs::read_to_string("../../question-banks/javascript-basics.toml").unwrap();
    std::fs::write(dir.path().join("good.toml"), basics).unwrap();
    std::fs::write(dir.path().join("broken.toml"), "[bank\nid=").unwrap();

    quizbank()
        .arg("--catalog")
        .arg(dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("JavaScript Basics (6 questions)"))
        .stdout(predicate::str::contains("broken.toml] ERROR: failed to parse TOML"))
        .stdout(predicate::str::contains("All question banks valid").not())
        .stderr(predicate::str::contains("1 question bank file(s) failed to parse"));
}

#[test]
fn validate_nonexistent_file() {
    quizbank()
        .args(["--catalog", "nonexistent.toml", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn export_then_query_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("catalog.json");

    with_banks()
        .arg("export")
        .arg("--output")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 11 questions"));

    quizbank()
        .arg("--catalog")
        .arg(&snapshot)
        .args(["show", "h1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(hooks)"));
}

#[test]
fn duplicate_ids_across_banks_fail_load() {
    let dir = TempDir::new().unwrap();
    let basics = std::fs::read_to_string("../../question-banks/javascript-basics.toml").unwrap();
    std::fs::write(dir.path().join("one.toml"), &basics).unwrap();
    std::fs::write(dir.path().join("two.toml"), &basics).unwrap();

    quizbank()
        .arg("--catalog")
        .arg(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate question id: a1"));
}

#[test]
fn config_file_supplies_catalog_and_sample_size() {
    let dir = TempDir::new().unwrap();
    let banks = std::fs::canonicalize(BANKS).unwrap();
    let config = dir.path().join("quizbank.toml");
    std::fs::write(
        &config,
        format!(
            "catalog = {:?}\nsample_size = 3\nseed = 5\n",
            banks.display().to_string()
        ),
    )
    .unwrap();

    quizbank()
        .arg("--config")
        .arg(&config)
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample of 3 (seed 5)"));
}

#[test]
fn missing_config_fails() {
    quizbank()
        .args(["--config", "no_such_config.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizbank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizbank.toml"))
        .stdout(predicate::str::contains("Created question-banks/example.toml"))
        .stdout(predicate::str::contains("Created question-banks/example.md"));

    assert!(dir.path().join("quizbank.toml").exists());

    // The generated config and banks load cleanly.
    quizbank()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizbank().current_dir(dir.path()).arg("init").assert().success();

    quizbank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizbank()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interview question catalog"));
}

#[test]
fn version_output() {
    quizbank()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizbank"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HAPPY_PATH: &str =
    "2\nmarch\n2015\n6\n1\n6\nLLC\n4\n3\nAda\nLovelace\nada@example.com\n555-0100\n";

struct TestEnv {
    _tmp: TempDir,
    data_dir: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let data_dir = tmp.path().join("loan-wizard");
        Self {
            _tmp: tmp,
            data_dir,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("loan-wizard").expect("binary built");
        cmd.env("LOAN_WIZARD_DATA_DIR", &self.data_dir);
        cmd
    }
}

#[test]
fn steps_lists_catalog() {
    let env = TestEnv::new();
    env.cmd()
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan Amount"))
        .stdout(predicate::str::contains("Business Start Date"))
        .stdout(predicate::str::contains("Contact Information"));
}

#[test]
fn steps_json_is_parseable() {
    let env = TestEnv::new();
    let out = env
        .cmd()
        .args(["steps", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let steps: Value = serde_json::from_slice(&out).expect("valid json output");
    let steps = steps.as_array().expect("array of steps");
    assert_eq!(steps.len(), 9);
    assert_eq!(steps[1]["kind"], "date");
}

#[test]
fn config_creates_settings_file() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan Wizard Configuration"))
        .stdout(predicate::str::contains("SBG Funding"));

    assert!(env.data_dir.join("config.json").exists());
}

#[test]
fn prompt_run_writes_outbox_and_audit_log() {
    let env = TestEnv::new();
    env.cmd()
        .arg("prompt")
        .write_stdin(HAPPY_PATH)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 9: Loan Amount"))
        .stdout(predicate::str::contains("Application submitted"));

    let outbox = fs::read_to_string(env.data_dir.join("submissions.jsonl")).expect("outbox");
    assert_eq!(outbox.lines().count(), 1);
    let submission: Value = serde_json::from_str(outbox.trim()).expect("json line");
    assert_eq!(submission["form"]["Email"], "ada@example.com");
    assert_eq!(submission["form"]["Loan Amount"], "$50,001 - $100,000");

    let audit = fs::read_to_string(env.data_dir.join("audit.log")).expect("audit log");
    assert!(audit.contains("\"submitted\""));
    // Values are never logged
    assert!(!audit.contains("ada@example.com"));

    env.cmd()
        .arg("submissions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn dry_run_prompt_leaves_outbox_empty() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--dry-run", "prompt"])
        .write_stdin(HAPPY_PATH)
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!env.data_dir.join("submissions.jsonl").exists());
}

#[test]
fn prompt_quit_submits_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .arg("prompt")
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Application cancelled"));

    env.cmd()
        .arg("submissions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No submissions found."));
}

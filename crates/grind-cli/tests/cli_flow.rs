use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_grind"))
}

/// Isolated home: data dir plus empty XDG config so no user config leaks in.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn data(&self) -> PathBuf {
        self.root.path().join("data")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .arg("--data")
            .arg(self.data())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("GRIND_CONFIG", self.root.path().join("config").join("none.toml"))
            .env("NO_COLOR", "1")
            .env_remove("GRIND_DATA")
            .env_remove("GRIND_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run grind")
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn grind");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait grind")
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("valid json")
    }
}

fn first_id(sandbox: &Sandbox) -> String {
    let list = sandbox.json(&["list", "--json"]);
    list[0]["id"].as_str().expect("id").to_string()
}

#[test]
fn test_cli_add_done_undo_stats() {
    let sandbox = Sandbox::new();

    let add = sandbox.run(&[
        "add",
        "Two Sum",
        "--url",
        "https://leetcode.com/problems/two-sum/",
    ]);
    assert!(add.status.success());
    assert!(String::from_utf8_lossy(&add.stdout).contains("Two Sum"));

    let list = sandbox.json(&["list", "--json"]);
    let array = list.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["platform"], "LeetCode");
    assert_eq!(array[0]["completed"], false);

    let id = first_id(&sandbox);
    let done = sandbox.json(&["done", &id[..8], "--json"]);
    assert_eq!(done["currentStreak"], 1);
    assert_eq!(done["totalCompleted"], 1);

    let stats = sandbox.json(&["stats", "--json"]);
    assert_eq!(stats["currentStreak"], 1);
    assert_eq!(stats["longestStreak"], 1);
    assert_eq!(stats["progress"]["percent"], 100);
    assert!(stats["lastCompletedDate"].is_string());

    let undo = sandbox.json(&["undo", &id, "--json"]);
    assert_eq!(undo["currentStreak"], 0);
    assert_eq!(undo["totalCompleted"], 0);
    assert_eq!(undo["longestStreak"], 1);
}

#[test]
fn test_cli_done_twice_keeps_total() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["add", "A"]).status.success());
    let id = first_id(&sandbox);

    sandbox.json(&["done", &id, "--json"]);
    let again = sandbox.json(&["done", &id, "--json"]);
    assert_eq!(again["totalCompleted"], 1);
}

#[test]
fn test_cli_unknown_id_exits_not_found() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["add", "A"]).status.success());

    let done = sandbox.run(&["done", "does-not-exist"]);
    assert_eq!(done.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&done.stderr);
    assert!(stderr.contains("error="), "stderr: {}", stderr);

    let stats = sandbox.json(&["stats", "--json"]);
    assert_eq!(stats["totalCompleted"], 0);
}

#[test]
fn test_cli_import_text_and_next() {
    let sandbox = Sandbox::new();
    let text = "Watermelon https://codeforces.com/problemset/problem/4/A\n\n\
                https://www.hackerrank.com/challenges/solve-me-first\n";

    let output = sandbox.run_with_stdin(&["import-text", "--json"], text);
    assert!(output.status.success());
    let added: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(added.as_array().expect("array").len(), 2);
    assert_eq!(added[1]["title"], "Problem 2");
    assert_eq!(added[1]["platform"], "HackerRank");

    let next = sandbox.json(&["next", "--json"]);
    assert_eq!(next["title"], "Watermelon");

    let id = next["id"].as_str().expect("id").to_string();
    sandbox.json(&["done", &id, "--json"]);
    let next = sandbox.json(&["next", "--json"]);
    assert_eq!(next["title"], "Problem 2");

    let pending = sandbox.json(&["list", "--pending", "--json"]);
    assert_eq!(pending.as_array().expect("array").len(), 1);
}

#[test]
fn test_cli_import_text_missing_file() {
    let sandbox = Sandbox::new();
    let missing = sandbox.path("nope.txt");
    let output = sandbox.run(&["import-text", missing.to_str().expect("utf8")]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_export_import_round_trip() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["add", "A"]).status.success());
    assert!(sandbox.run(&["add", "B"]).status.success());
    let id = first_id(&sandbox);
    sandbox.json(&["done", &id, "--json"]);
    assert!(sandbox.run(&["theme", "dark"]).status.success());

    let bundle_path = sandbox.path("bundle.json");
    let export = sandbox.run(&["export", bundle_path.to_str().expect("utf8")]);
    assert!(export.status.success());

    let bundle: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&bundle_path).expect("read bundle"))
            .expect("bundle json");
    assert_eq!(bundle["darkMode"], true);
    assert_eq!(bundle["problems"].as_array().expect("array").len(), 2);
    assert_eq!(bundle["stats"]["totalCompleted"], 1);

    let other = Sandbox::new();
    let import = other.run(&["import", bundle_path.to_str().expect("utf8")]);
    assert!(
        import.status.success(),
        "{}",
        String::from_utf8_lossy(&import.stderr)
    );

    assert_eq!(
        other.json(&["list", "--json"]),
        sandbox.json(&["list", "--json"])
    );
    assert_eq!(
        other.json(&["stats", "--json"]),
        sandbox.json(&["stats", "--json"])
    );
    assert!(settings_dark_mode(&other.data()));
}

#[test]
fn test_cli_malformed_import_changes_nothing() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["add", "Keep me"]).status.success());

    let bad = sandbox.path("bad.json");
    std::fs::write(&bad, r#"{"problems": [], "darkMode": false}"#).expect("write");
    let import = sandbox.run(&["import", bad.to_str().expect("utf8")]);
    assert_eq!(import.status.code(), Some(5));

    let list = sandbox.json(&["list", "--json"]);
    assert_eq!(list[0]["title"], "Keep me");
}

#[test]
fn test_cli_plain_stats_output() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["stats", "--format", "plain"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("current_streak=0"));
    assert!(stdout.contains("progress=0/0"));
}

fn settings_dark_mode(data: &Path) -> bool {
    let raw = std::fs::read_to_string(data.join("settings.json")).expect("settings");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("settings json");
    value["darkMode"] == true
}

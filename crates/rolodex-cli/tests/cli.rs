use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

struct Env {
    temp: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            temp: TempDir::new().expect("temp dir"),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.temp.path().join("rolodex.sqlite3")
    }

    fn output(&self, args: &[&str]) -> Output {
        let db_path = self.db_path();
        cargo_bin_cmd!("rolodex")
            .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env("XDG_DATA_HOME", self.temp.path().join("data"))
            .env_remove("RUST_LOG")
            .args(["--db-path", db_path.to_str().expect("db path")])
            .args(args)
            .output()
            .expect("run command")
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.output(args);
        assert!(output.status.success(), "command failed: {:?}", output);
        String::from_utf8(output.stdout).expect("utf8")
    }

    fn json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let stdout = self.run(&full);
        serde_json::from_str(&stdout).expect("parse json")
    }

    fn exit_code(&self, args: &[&str]) -> i32 {
        self.output(args).status.code().expect("exit code")
    }
}

fn write_private(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).expect("chmod");
    }
}

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|item| item["name"].as_str().expect("name").to_string())
        .collect()
}

#[test]
fn first_run_seeds_sample_records() {
    let env = Env::new();
    let list = env.json(&["list"]);
    assert_eq!(names(&list), vec!["Sarah Johnson", "Michael Chen"]);

    let interactions = env.json(&["interactions"]);
    let rows = interactions.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["subject"], "Project Discussion");
    assert_eq!(rows[0]["contact_name"], "Sarah Johnson");
}

#[test]
fn contact_lifecycle_flow() {
    let env = Env::new();
    let created = env.json(&[
        "add-contact",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
        "--company",
        "Analytical Engines",
        "--priority",
        "High",
        "--tag",
        "Math,Pioneer",
    ]);
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["tags"], serde_json::json!(["Math", "Pioneer"]));
    assert!(created.get("lastContact").is_none());

    let found = env.json(&["list", "--search", "ANALYTICAL"]);
    assert_eq!(names(&found), vec!["Ada Lovelace"]);

    let high = env.json(&["list", "--priority", "High"]);
    assert_eq!(names(&high), vec!["Sarah Johnson", "Ada Lovelace"]);

    let edited = env.json(&["edit-contact", &id, "--position", "Countess"]);
    assert_eq!(edited["position"], "Countess");
    assert_eq!(edited["email"], "ada@example.com");

    let logged = env.json(&[
        "add-interaction",
        &id,
        "--subject",
        "Notes on the engine",
        "--type",
        "Meeting",
    ]);
    assert_eq!(logged["contact_name"], "Ada Lovelace");

    let detail = env.json(&["show", &id]);
    assert_eq!(detail["contact"]["lastContact"], logged["date"]);
    assert_eq!(detail["interactions"].as_array().expect("array").len(), 1);

    let today = env.json(&["interactions", "--window", "today", "--type", "Meeting"]);
    assert_eq!(today.as_array().expect("array").len(), 1);

    env.run(&["delete", &id]);
    assert_eq!(env.exit_code(&["show", &id]), 2);
    let remaining = env.json(&["interactions", "--search", "engine"]);
    assert!(remaining.as_array().expect("array").is_empty());
}

#[test]
fn delete_cascades_seeded_interactions() {
    let env = Env::new();
    env.run(&["delete", "1"]);

    let export = env.json(&["export"]);
    let contacts = export["contacts"].as_array().expect("contacts");
    let interactions = export["interactions"].as_array().expect("interactions");
    assert_eq!(contacts.len(), 1);
    assert_eq!(interactions.len(), 1);
    assert_eq!(interactions[0]["contactId"], "2");
    assert_eq!(interactions[0]["type"], "Call");
}

#[test]
fn deleting_every_contact_persists_empty_state() {
    let env = Env::new();
    env.run(&["delete", "1"]);
    env.run(&["delete", "2"]);

    let list = env.json(&["list"]);
    assert!(list.as_array().expect("array").is_empty());
    let dashboard = env.json(&["dashboard"]);
    assert_eq!(dashboard["total_contacts"], 0);
}

#[test]
fn exit_codes_distinguish_failures() {
    let env = Env::new();
    assert_eq!(env.exit_code(&["delete", "missing"]), 2);
    assert_eq!(env.exit_code(&["edit-contact", "missing", "--name", "X"]), 2);
    assert_eq!(
        env.exit_code(&["add-interaction", "missing", "--subject", "Hi"]),
        2
    );
    assert_eq!(env.exit_code(&["list", "--priority", "Urgent"]), 3);
    assert_eq!(env.exit_code(&["interactions", "--window", "decade"]), 3);
    assert_eq!(
        env.exit_code(&["add-interaction", "1", "--subject", "Hi", "--type", "Fax"]),
        3
    );
    assert_eq!(env.exit_code(&["edit-contact", "1"]), 3);
}

#[test]
fn dashboard_and_analytics_summaries() {
    let env = Env::new();
    let dashboard = env.json(&["dashboard"]);
    assert_eq!(dashboard["total_contacts"], 2);
    assert_eq!(dashboard["high_priority"], 1);
    let recent = dashboard["recent_interactions"].as_array().expect("array");
    assert_eq!(recent[0]["contact_name"], "Sarah Johnson");

    let analytics = env.json(&["analytics"]);
    assert_eq!(analytics["total_interactions"], 2);
    assert_eq!(analytics["average_per_day"], 0);
    assert_eq!(analytics["weekly_trend"].as_array().expect("array").len(), 7);
    let by_priority = analytics["by_priority"].as_array().expect("array");
    assert_eq!(by_priority[0]["label"], "High");
    assert_eq!(by_priority[0]["count"], 1);
    let companies = analytics["top_companies"].as_array().expect("array");
    assert_eq!(companies[0]["label"], "Tech Solutions Inc.");

    let kinds = env.json(&["kinds"]);
    assert_eq!(kinds, serde_json::json!(["Email", "Call"]));
}

#[test]
fn config_can_disable_seeding() {
    let env = Env::new();
    let config_path = env.temp.path().join("rolodex.toml");
    write_private(&config_path, "seed_samples = false\nrecent_limit = 1\n");
    let config = config_path.to_str().expect("config path");

    let list = env.json(&["--config", config, "list"]);
    assert!(list.as_array().expect("array").is_empty());

    env.run(&["--config", config, "add-contact", "--name", "One"]);
    env.run(&["--config", config, "add-contact", "--name", "Two"]);
    let dashboard = env.json(&["--config", config, "dashboard"]);
    assert_eq!(
        dashboard["recent_contacts"].as_array().expect("array").len(),
        1
    );
}

#[test]
fn invalid_config_is_rejected() {
    let env = Env::new();
    let config_path = env.temp.path().join("rolodex.toml");
    write_private(&config_path, "[follow_up]\nmin_days = 30\nmax_days = 5\n");
    let config = config_path.to_str().expect("config path");
    assert_eq!(env.exit_code(&["--config", config, "list"]), 3);

    let missing = env.temp.path().join("absent.toml");
    assert_eq!(
        env.exit_code(&["--config", missing.to_str().expect("path"), "list"]),
        3
    );
}

#[test]
fn completions_do_not_touch_the_database() {
    let env = Env::new();
    let script = env.run(&["completions", "bash"]);
    assert!(script.contains("rolodex"));
    assert!(!env.db_path().exists());
}

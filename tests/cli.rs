use assert_cmd::Command;
use axum::http::StatusCode;
use axum::{routing::get, Router};
use serde_json::Value;

const ENV_VARS: [&str; 7] = ["IPS_P", "IPS_A", "IPS_JSON", "IPS_L", "IPS_T", "IPS_URL", "RUST_LOG"];

/// Serves `/ip` with a fixed address and `/error` with a 500
async fn spawn_echo_server() -> String {
    let app = Router::new()
        .route("/ip", get(|| async { "203.0.113.7\n" }))
        .route("/error", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "203.0.113.7") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/ip", addr)
}

fn ips() -> Command {
    let mut cmd = Command::cargo_bin("ips").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_json(output: &std::process::Output) -> Vec<Value> {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1, "expected a single line, got {:?}", stdout);
    serde_json::from_str(stdout.trim_end()).unwrap()
}

fn assert_local_record(record: &Value) {
    let object = record.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert!(object["Address"].is_string());
    assert_ne!(object["Interface"], "public");
}

#[test]
fn json_output_is_local_only_by_default() {
    let output = ips().arg("--json").output().unwrap();
    assert!(output.status.success());
    stdout_json(&output).iter().for_each(assert_local_record);
}

#[test]
fn single_dash_json_is_accepted() {
    let output = ips().arg("-json").output().unwrap();
    assert!(output.status.success());
    stdout_json(&output).iter().for_each(assert_local_record);
}

#[test]
fn json_can_be_enabled_from_environment() {
    let output = ips().env("IPS_JSON", "true").output().unwrap();
    assert!(output.status.success());
    stdout_json(&output).iter().for_each(assert_local_record);
}

#[test]
fn text_output_is_tab_separated() {
    let output = ips().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in stdout.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 2, "unexpected line {:?}", line);
        assert_ne!(fields[1], "public");
    }
}

#[test]
fn text_and_json_list_the_same_addresses() {
    let text = ips().output().unwrap();
    let json = ips().arg("--json").output().unwrap();
    let from_text: Vec<String> = String::from_utf8(text.stdout).unwrap().lines().map(str::to_string).collect();
    let from_json: Vec<String> = stdout_json(&json)
        .iter()
        .map(|r| format!("{}\t{}", r["Address"].as_str().unwrap(), r["Interface"].as_str().unwrap()))
        .collect();
    assert_eq!(from_text, from_json);
}

#[test]
fn debug_logs_stay_off_stdout() {
    let output = ips().args(["--json", "-l", "2"]).output().unwrap();
    assert!(output.status.success());
    stdout_json(&output);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("starting"), "stderr was {:?}", stderr);
}

#[test]
fn quiet_by_default() {
    let output = ips().output().unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn malformed_log_level_exits_with_one() {
    ips().args(["-l", "abc"]).assert().code(1).stdout("");
}

#[test]
fn malformed_environment_value_exits_with_one() {
    ips().env("IPS_L", "abc").assert().code(1).stdout("");
    ips().env("IPS_JSON", "maybe").assert().code(1).stdout("");
}

#[test]
fn zero_timeout_exits_with_one() {
    ips().args(["-t", "0"]).assert().code(1).stdout("");
}

#[test]
fn help_exits_successfully() {
    ips().arg("--help").assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn public_only_prints_a_single_record() {
    let base = spawn_echo_server().await;
    let output = ips().args(["-p", "--json", "--url"]).arg(format!("{}/ip", base)).output().unwrap();
    assert!(output.status.success());
    let records = stdout_json(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["Address"], "203.0.113.7");
    assert_eq!(records[0]["Interface"], "public");
}

#[tokio::test(flavor = "multi_thread")]
async fn all_prints_public_record_first() {
    let base = spawn_echo_server().await;
    let output = ips()
        .args(["-a", "-p"])
        .env("IPS_URL", format!("{}/ip", base))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("203.0.113.7\tpublic"));
    assert!(lines.all(|line| !line.ends_with("\tpublic")));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_lookup_status_exits_with_one() {
    let base = spawn_echo_server().await;
    let output = ips().args(["-a", "--url"]).arg(format!("{}/error", base)).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not get ip addresses"), "stderr was {:?}", stderr);
}

#[test]
fn unreachable_lookup_exits_with_one() {
    for flag in ["-p", "-a"] {
        let url = closed_port_url();
        ips().args([flag, "--json", "--url", url.as_str()]).assert().code(1).stdout("");
    }
}

//! Binary-level checks for commands that never launch a browser.

use std::io::Write;
use std::process::{Command, Output};

fn swiftcheck(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_swiftcheck"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("failed to execute swiftcheck")
}

fn stdout_json(output: &Output) -> serde_json::Value {
	let stdout = String::from_utf8_lossy(&output.stdout);
	serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout}"))
}

#[test]
fn list_json_envelope() {
	let output = swiftcheck(&["list", "-f", "json"]);
	assert!(output.status.success());

	let json = stdout_json(&output);
	assert_eq!(json["ok"], true);
	assert_eq!(json["command"], "list");
	assert_eq!(json["data"]["total"], 36);
	assert_eq!(json["data"]["suspect"], 2);

	let first = &json["data"]["cases"][0];
	assert_eq!(first["id"], "Pos_Fun_0001");
	assert_eq!(first["input"], "oyata asanipadha?");
	assert_eq!(first["expected"], "ඔයට අසනිපද?");
	assert_eq!(first["fixture"]["status"], "sound");
}

#[test]
fn list_filter_text() {
	let output = swiftcheck(&["list", "--filter", "Pos_Fun_0022"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Pos_Fun_0022"));
	assert!(stdout.contains("\"1/26/2026\" -> \"1/26/2026\""));
	assert!(stdout.trim_end().ends_with("1 cases (0 suspect)"));
}

#[test]
fn list_toon_output() {
	let output = swiftcheck(&["list", "-f", "toon", "--filter", "Neg_Fun_0009"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Neg_Fun_0009"));
	assert!(stdout.contains("ok: true"));
}

#[test]
fn unknown_case_fails_before_launching_a_browser() {
	let output = swiftcheck(&["run", "Pos_Fun_9999", "-f", "json"]);
	assert_eq!(output.status.code(), Some(1));

	let json = stdout_json(&output);
	assert_eq!(json["ok"], false);
	assert_eq!(json["command"], "run");
	assert_eq!(json["error"]["code"], "UNKNOWN_CASE");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error [UNKNOWN_CASE]: unknown case id(s): Pos_Fun_9999"));
}

#[test]
fn malformed_config_is_reported() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(file, "{{\"settle\": {{\"debounceMs\": \"soon\"}}}}").unwrap();
	let path = file.path().to_str().unwrap();

	let output = swiftcheck(&["--config", path, "run", "-f", "json"]);
	assert_eq!(output.status.code(), Some(1));

	let json = stdout_json(&output);
	assert_eq!(json["error"]["code"], "INVALID_CONFIG");
	assert_eq!(json["error"]["details"]["path"], path);
}

#[test]
fn text_errors_go_to_stderr_only() {
	let output = swiftcheck(&["run", "Nope_1"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).contains("UNKNOWN_CASE"));
}

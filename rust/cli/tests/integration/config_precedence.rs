use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

use serde_json::Value;

fn cfg_json(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("cfg prints JSON")
}

#[test]
fn defaults_when_nothing_is_configured() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json = cfg_json(&res.stdout);
    assert_eq!(json["starting_stack"]["value"], "100");
    assert_eq!(json["starting_stack"]["source"], "default");
    assert!(json["hero"]["value"].is_null());
    assert_eq!(json["log_level"]["source"], "default");
}

#[test]
fn file_values_are_picked_up() {
    let tfm = TempFileManager::new().expect("temp dir");
    let file = tfm
        .create_file("sixmax.toml", "starting_stack = 40\nhero = \"co\"\n")
        .expect("write config");
    let res = CliRunner::new(tfm.path()).run_with_env(
        &["cfg"],
        &[("SIXMAX_CONFIG", file.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json = cfg_json(&res.stdout);
    assert_eq!(json["starting_stack"]["value"], "40");
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["hero"]["value"], "CO");
    assert_eq!(json["hero"]["source"], "file");
}

#[test]
fn env_beats_file() {
    let tfm = TempFileManager::new().expect("temp dir");
    let file = tfm
        .create_file("sixmax.toml", "starting_stack = 40\nhero = \"CO\"\n")
        .expect("write config");
    let res = CliRunner::new(tfm.path()).run_with_env(
        &["cfg"],
        &[
            ("SIXMAX_CONFIG", file.to_string_lossy().as_ref()),
            ("SIXMAX_STACK", "25.5"),
        ],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json = cfg_json(&res.stdout);
    assert_eq!(json["starting_stack"]["value"], "25.5");
    assert_eq!(json["starting_stack"]["source"], "env");
    assert_eq!(json["hero"]["source"], "file");
}

#[test]
fn flags_beat_env_for_play() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run_with_env(
        &["play", "--stack", "30"],
        &[("SIXMAX_STACK", "40"), ("SIXMAX_HERO", "SB")],
    );
    assert!(res.stdout.starts_with("play: hero=SB stack=30bb"), "stdout={}", res.stdout);
}

#[test]
fn invalid_env_value_exits_2() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run_with_env(&["cfg"], &[("SIXMAX_STACK", "lots")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"), "stderr={}", res.stderr);
}

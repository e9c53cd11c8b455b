use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

#[test]
fn help_lists_every_subcommand() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "replay", "verify", "export", "cfg"] {
        assert!(res.stdout.contains(cmd), "missing {} in: {}", cmd, res.stdout);
    }
}

#[test]
fn unknown_subcommand_exits_2() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: sixmax <command>"));
}

#[test]
fn missing_history_file_exits_2() {
    let tfm = TempFileManager::new().expect("temp dir");
    let missing = tfm.path_str("missing.jsonl");
    let res = CliRunner::new(tfm.path()).run(&["replay", "--input", &missing]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Failed to read"), "stderr={}", res.stderr);
}

#[test]
fn bad_hero_flag_exits_2_without_prompting() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run_with_input(&["play", "--hero", "UTG2"], "q\n");
    assert_eq!(res.exit_code, 2);
    assert!(!res.stdout.contains("preflop>"));
    assert!(res.stderr.contains("Error:"));
}

#[test]
fn logs_stay_off_stdout() {
    let tfm = TempFileManager::new().expect("temp dir");
    let res = CliRunner::new(tfm.path()).run_with_env(
        &["play", "--hero", "BTN"],
        &[("RUST_LOG", "sixmax_cli=debug")],
    );
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("session started"), "stderr={}", res.stderr);
    assert!(!res.stdout.contains("session started"));
}

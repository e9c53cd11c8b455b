use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

use serde_json::Value;

/// CO opens, BB defends, CO bets the flop and both check down.
const SHOWDOWN_HAND: &str = "\
CO raise 2.5
BTN fold
SB fold
BB call
board Ah Kd 7c
BB check
CO bet 3
BB call
board 2s
BB check
CO check
board 9h
BB check
CO check
result CO 11.5 BB=Qs,Qh CO=Ac,Ah
q
";

fn play_into(cli: &CliRunner, output: &str, script: &str) -> crate::helpers::cli_runner::CliResult {
    cli.run_with_input(&["play", "--hero", "CO", "--output", output], script)
}

#[test]
fn play_then_verify_replay_and_export() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cli = CliRunner::new(tfm.path());
    let history = tfm.path_str("hands.jsonl");

    let res = play_into(&cli, &history, SHOWDOWN_HAND);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Hand complete (showdown)"));
    assert!(res.stdout.contains("Winner: CO (11.5bb) hero won"));
    assert!(res.stdout.contains("Saved hand "));

    let res = cli.run(&["verify", "--input", &history]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout.trim(), "Verify: OK (1 hands)");

    let res = cli.run(&["replay", "--input", &history]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("(hero: CO, stack: 100bb)"));
    assert!(res.stdout.contains("Board: [Ah Kd 7c 2s 9h]"));
    assert!(res.stdout.contains("Pot: 11.5bb"));
    assert!(res.stdout.contains("Ended by: showdown"));
    assert!(res.stdout.contains("BB shows Qs Qh"));

    let csv = tfm.path_str("out/actions.csv");
    let res = cli.run(&["export", "--input", &history, "--format", "csv", "--output", &csv]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let rows = std::fs::read_to_string(&csv).expect("csv written");
    // two preflop skip folds plus eleven typed actions
    assert_eq!(rows.lines().count(), 1 + 13);
    assert!(rows.lines().any(|l| l.contains(",flop,CO,bet,3,8.5,false,true,")));
}

#[test]
fn hands_append_with_increasing_ids() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cli = CliRunner::new(tfm.path());
    let history = tfm.path_str("hands.jsonl");

    for _ in 0..2 {
        let res = play_into(&cli, &history, SHOWDOWN_HAND);
        assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    }

    let content = std::fs::read_to_string(&history).expect("history written");
    let ids: Vec<String> = content
        .lines()
        .map(|l| {
            let v: Value = serde_json::from_str(l).expect("record is JSON");
            v["hand_id"].as_str().expect("hand_id").to_string()
        })
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[0].ends_with("-000001"));
    assert!(ids[1].ends_with("-000002"));

    let res = cli.run(&["verify", "--input", &history]);
    assert_eq!(res.stdout.trim(), "Verify: OK (2 hands)");
}

#[test]
fn compressed_history_round_trips() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cli = CliRunner::new(tfm.path());
    let history = tfm.path_str("hands.jsonl.zst");

    let res = play_into(&cli, &history, SHOWDOWN_HAND);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let raw = std::fs::read(&history).expect("history written");
    assert_eq!(&raw[..4], &[0x28, 0xb5, 0x2f, 0xfd]);

    let res = cli.run(&["verify", "--input", &history]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
}

#[test]
fn unfinished_hand_is_saved_and_exits_130() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cli = CliRunner::new(tfm.path());
    let history = tfm.path_str("hands.jsonl");

    let res = play_into(&cli, &history, "CO raise 2.5\nBTN call\n");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("WARNING: hand left unfinished on the preflop"));

    let res = cli.run(&["replay", "--input", &history]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Unfinished (preflop)"));
    assert!(res.stdout.contains("No result recorded"));
}

#[test]
fn verify_catches_an_edited_pot() {
    let tfm = TempFileManager::new().expect("temp dir");
    let cli = CliRunner::new(tfm.path());
    let history = tfm.path_str("hands.jsonl");
    let res = play_into(&cli, &history, SHOWDOWN_HAND);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = std::fs::read_to_string(&history).expect("history written");
    let mut record: Value = serde_json::from_str(content.trim()).expect("record is JSON");
    record["actions"][2]["bet_size"] = Value::from(900);
    std::fs::write(&history, format!("{}\n", record)).expect("rewrite history");

    let res = cli.run(&["verify", "--input", &history]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("line 1: Action 3 differs"), "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Verify: FAILED"));
}

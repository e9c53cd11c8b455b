use chrono::{DateTime, Utc};
use sixmax_engine::chips::Chips;
use sixmax_engine::engine::Hand;
use sixmax_engine::player::ActionType as A;
use sixmax_engine::result::HandResult;
use sixmax_engine::seat::Seat;
use sixmax_engine::state::{Command, HandConfig, HandState};

fn played_hand() -> Hand {
    let mut hand = Hand::new(Some(Seat::Co), Chips::from_bb(60));
    hand.add_preflop_action(Seat::Co, A::Raise, Some(Chips(250)))
        .unwrap();
    hand.add_preflop_action(Seat::Btn, A::Fold, None).unwrap();
    hand.add_preflop_action(Seat::Sb, A::Fold, None).unwrap();
    hand.add_preflop_action(Seat::Bb, A::Raise, Some(Chips(900)))
        .unwrap();
    hand.add_preflop_action(Seat::Co, A::Call, None).unwrap();
    hand.confirm_board_with(vec!["Ts".into(), "9s".into(), "2h".into()]);
    hand.add_postflop_action(Seat::Bb, A::Bet, Some(Chips(1200)))
        .unwrap();
    hand.add_postflop_action(Seat::Co, A::Raise, Some(Chips(6000)))
        .unwrap();
    hand.add_postflop_action(Seat::Bb, A::Call, None).unwrap();
    // both all-in: turn and river need a confirmation each
    hand.confirm_board_with(vec!["4c".into()]);
    hand.confirm_board_with(vec!["Kd".into()]);
    hand.set_hand_result(HandResult {
        winner: Seat::Co,
        hero_won: true,
        pot_awarded: Chips(12_050),
        showdown_hands: Vec::new(),
    })
    .unwrap();
    hand
}

#[test]
fn only_accepted_commands_are_logged() {
    let mut hand = Hand::default();
    hand.add_preflop_action(Seat::Utg, A::Fold, None).unwrap();
    hand.add_preflop_action(Seat::Utg, A::Call, None).unwrap_err();
    hand.confirm_board();
    hand.add_preflop_action(Seat::Hj, A::Bet, Some(Chips(300)))
        .unwrap_err();
    assert_eq!(hand.commands().len(), 1);
}

#[test]
fn command_log_rebuilds_the_same_hand() {
    let hand = played_hand();
    assert!(hand.snapshot().is_complete);
    assert_eq!(hand.snapshot().pot, Chips(12_050));

    let rebuilt = Hand::replay(hand.state().config().clone(), hand.commands().to_vec()).unwrap();
    // timestamps included
    assert_eq!(rebuilt.snapshot(), hand.snapshot());
    assert_eq!(rebuilt.hand_result(), hand.hand_result());
    assert_eq!(rebuilt.commands(), hand.commands());
}

#[test]
fn command_log_survives_json() {
    let hand = played_hand();
    let json = serde_json::to_string(hand.commands()).unwrap();
    assert!(json.contains(r#""kind":"confirm_board""#));
    assert!(json.contains(r#""seat":"CO""#));

    let commands: Vec<Command> = serde_json::from_str(&json).unwrap();
    let rebuilt = HandState::replay(HandConfig {
        hero: Some(Seat::Co),
        starting_stack: Chips::from_bb(60),
    }, commands)
    .unwrap();
    assert_eq!(&rebuilt, hand.state());
}

#[test]
fn commands_accept_a_missing_size() {
    let cmd: Command =
        serde_json::from_str(r#"{"kind":"preflop","seat":"BTN","action":"call"}"#).unwrap();
    assert_eq!(
        cmd,
        Command::Preflop {
            seat: Seat::Btn,
            action: A::Call,
            size: None,
            at: DateTime::<Utc>::default(),
        }
    );
}

#[test]
fn replay_stops_at_the_first_rejected_command() {
    let commands = vec![
        Command::Preflop {
            seat: Seat::Utg,
            action: A::Fold,
            size: None,
            at: DateTime::default(),
        },
        Command::Preflop {
            seat: Seat::Utg,
            action: A::Call,
            size: None,
            at: DateTime::default(),
        },
    ];
    assert!(HandState::replay(HandConfig::default(), commands).is_err());
}

#[test]
fn snapshot_serializes_for_renderers() {
    let hand = played_hand();
    let value = serde_json::to_value(hand.snapshot()).unwrap();
    assert_eq!(value["phase"], "river");
    assert_eq!(value["stage"], "terminal");
    assert_eq!(value["pot"], 12_050);
    assert_eq!(value["actions"][0]["type"], "fold");
    assert_eq!(value["actions"][0]["auto"], true);
}

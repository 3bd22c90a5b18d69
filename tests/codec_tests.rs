use broadside::{parse_line, Reply, ShotMark};
use proptest::prelude::*;

#[test]
fn parses_command_and_arguments() {
    let cmd = parse_line("B 10 12\n").unwrap();
    assert_eq!(cmd.letter, 'B');
    assert_eq!(cmd.args, vec![10, 12]);
}

#[test]
fn parses_command_with_no_arguments() {
    let cmd = parse_line("Q\n").unwrap();
    assert_eq!(cmd.letter, 'Q');
    assert!(cmd.args.is_empty());
}

#[test]
fn blank_line_carries_no_command() {
    assert!(parse_line("").is_none());
    assert!(parse_line("   \n").is_none());
}

#[test]
fn digit_runs_survive_arbitrary_junk() {
    // separators, letters, and missing spaces are all skipped over
    let cmd = parse_line("S foo12,x 3bar4").unwrap();
    assert_eq!(cmd.letter, 'S');
    assert_eq!(cmd.args, vec![12, 3, 4]);

    let cmd = parse_line("B10 10").unwrap();
    assert_eq!(cmd.letter, 'B');
    assert_eq!(cmd.args, vec![10, 10]);
}

#[test]
fn placement_line_yields_twenty_integers() {
    let cmd = parse_line("I 1 1 0 0 2 1 3 0 3 1 6 0 4 1 0 3 5 1 3 5").unwrap();
    assert_eq!(cmd.letter, 'I');
    assert_eq!(cmd.args.len(), 20);
    assert_eq!(cmd.args[..4], [1, 1, 0, 0]);
}

#[test]
fn reply_templates_encode_exactly() {
    assert_eq!(Reply::Ack.to_string(), "A");
    assert_eq!(Reply::Error(401).to_string(), "E 401");
    assert_eq!(
        Reply::ShotResult {
            remaining: 5,
            mark: ShotMark::Miss
        }
        .to_string(),
        "R 5 M"
    );
    assert_eq!(
        Reply::ShotResult {
            remaining: 4,
            mark: ShotMark::Hit
        }
        .to_string(),
        "R 4 H"
    );
    assert_eq!(Reply::GameOver { won: true }.to_string(), "H 1");
    assert_eq!(Reply::GameOver { won: false }.to_string(), "H 0");
}

#[test]
fn query_reply_uses_decimal_coordinates() {
    // two-digit coordinates must encode as plain decimal tokens
    let reply = Reply::QueryResult {
        remaining: 3,
        cells: vec![(ShotMark::Hit, 0, 0), (ShotMark::Miss, 13, 21)],
    };
    assert_eq!(reply.to_string(), "G 3 H 0 0 M 13 21");
}

proptest! {
    /// The parser is total: any input yields a command or None, never
    /// a panic, and every argument came from a digit run.
    #[test]
    fn parser_never_fails(line in any::<String>()) {
        if let Some(cmd) = parse_line(&line) {
            prop_assert!(!cmd.letter.is_whitespace());
        } else {
            prop_assert!(line.trim().is_empty());
        }
    }

    /// Well-formed numeric tails round-trip through the parser.
    #[test]
    fn space_separated_integers_parse_back(args in proptest::collection::vec(0u32..10_000, 0..8)) {
        let line = format!(
            "S {}",
            args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(" ")
        );
        let cmd = parse_line(&line).unwrap();
        prop_assert_eq!(cmd.letter, 'S');
        prop_assert_eq!(cmd.args, args);
    }
}

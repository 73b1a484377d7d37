// tests/parsing.rs
use traveler::{
    Direction, ParseError, Position, RouteExtractor, RouteParseError, RouteParser, Step,
    StartingPointOutOfRangeError, StartingPointParseError, parse_starting_point, parse_steps,
};

fn parse(block: &str) -> Result<traveler::Route, ParseError> {
    RouteParser::default().parse_block(block)
}

#[test]
fn test_block_with_multiline_steps() {
    let route = parse("\r\n2,3,south\r\nFF\r\nLR\r\n").unwrap();

    assert_eq!(route.start(), Position::new(2, 3, Direction::South));
    assert_eq!(
        route.steps(),
        &[Step::Forward, Step::Forward, Step::TurnLeft, Step::TurnRight]
    );
}

#[test]
fn test_block_without_steps_is_stationary() {
    let route = parse("\r\n4,1,W").unwrap();
    assert!(route.is_stationary());
    assert_eq!(route.start(), Position::new(4, 1, Direction::West));

    // Whitespace-only step lines are the same as none.
    assert!(parse("\r\n4,1,W\r\n   ").unwrap().is_stationary());
}

#[test]
fn test_direction_names_ignore_case() {
    for text in ["north", "NORTH", "North", "n", "N"] {
        let start = parse_starting_point(&format!("0,0,{text}")).unwrap();
        assert_eq!(start.direction, Direction::North, "direction text {text:?}");
    }
    assert_eq!(
        parse_starting_point("1,2,e").unwrap(),
        Position::new(1, 2, Direction::East)
    );
}

#[test]
fn test_starting_point_errors() {
    let cases = [
        ("", StartingPointParseError::Missing),
        ("   ", StartingPointParseError::Missing),
        ("1,2", StartingPointParseError::Malformed("1,2".into())),
        ("1,2,N,4", StartingPointParseError::Malformed("1,2,N,4".into())),
        ("a,2,N", StartingPointParseError::X("a".into())),
        ("1,2.5,N", StartingPointParseError::Y("2.5".into())),
        ("1,2,N0", StartingPointParseError::UnsupportedCharacters("N0".into())),
        ("1,2, N", StartingPointParseError::UnsupportedCharacters(" N".into())),
        ("1,2,up", StartingPointParseError::Direction("up".into())),
        ("1,2,", StartingPointParseError::Direction(String::new())),
    ];

    for (line, expected) in cases {
        assert_eq!(
            parse_starting_point(line),
            Err(ParseError::StartingPoint(expected)),
            "line {line:?}"
        );
    }
}

#[test]
fn test_block_with_no_lines_is_missing_start() {
    assert_eq!(
        parse("\r\n"),
        Err(ParseError::StartingPoint(StartingPointParseError::Missing))
    );
}

#[test]
fn test_negative_start_is_out_of_range() {
    assert_eq!(
        parse_starting_point("-1,0,N"),
        Err(ParseError::OutOfRange(StartingPointOutOfRangeError::X(-1)))
    );
    assert_eq!(
        parse_starting_point("0,-4,N"),
        Err(ParseError::OutOfRange(StartingPointOutOfRangeError::Y(-4)))
    );
    // X is reported first when both are negative.
    assert_eq!(
        parse_starting_point("-1,-1,N"),
        Err(ParseError::OutOfRange(StartingPointOutOfRangeError::X(-1)))
    );
}

#[test]
fn test_field_errors_win_over_range() {
    // Range is validated only once every field has parsed.
    assert!(matches!(
        parse_starting_point("-1,0,Q"),
        Err(ParseError::StartingPoint(StartingPointParseError::Direction(_)))
    ));
}

#[test]
fn test_step_errors() {
    assert_eq!(parse_steps("FX"), Err(RouteParseError::UnparsedStep('X')));
    assert_eq!(parse_steps("fbzq"), Err(RouteParseError::UnparsedStep('z')));
    assert_eq!(
        parse_steps("F1"),
        Err(RouteParseError::UnsupportedCharacters("F1".into()))
    );
    // Non-letters are reported before unknown letters.
    assert_eq!(
        parse_steps("X F"),
        Err(RouteParseError::UnsupportedCharacters("X F".into()))
    );
}

#[test]
fn test_steps_are_trimmed_and_case_insensitive() {
    assert_eq!(
        parse_steps("  fBlR "),
        Ok(vec![Step::Forward, Step::Backward, Step::TurnLeft, Step::TurnRight])
    );
    assert_eq!(parse_steps(""), Ok(Vec::new()));
}

#[test]
fn test_start_errors_precede_step_errors() {
    let err = parse("\r\n-1,0,N\r\nFX").unwrap_err();
    assert_eq!(err.kind(), "starting_point_out_of_range");
}

#[test]
fn test_extractor_matches_naive_split_on_clean_text() {
    let clean = "POS=\r\n0,0,N\r\nFF\r\nPOS=\r\n1,1,S\r\nB";
    let naive: Vec<String> = clean
        .split("POS=")
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();

    assert_eq!(RouteExtractor::default().extract_blocks(clean), naive);
}

#[test]
fn test_extractor_skips_comments_between_blocks() {
    let raw = "// fleet\r\nPOS=\r\n0,0,N\r\n\r\n// second robot\r\nPOS=\r\n3,3,E\r\nF\r\n";
    let blocks = RouteExtractor::default().extract_blocks(raw);

    assert_eq!(blocks, vec!["\r\n0,0,N\r\n", "\r\n3,3,E\r\nF"]);
}

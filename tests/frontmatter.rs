use hermes::error::Error;
use hermes::frontmatter::parse;

#[test]
fn input_without_marker_passes_through_unchanged() {
    let input = "Just a plain document.\nNo metadata here.";
    let parsed = parse(input).expect("plain documents parse");
    assert!(parsed.front_matter.is_none());
    assert_eq!(parsed.body, input);
}

#[test]
fn leading_whitespace_before_marker_is_tolerated() {
    let parsed = parse("\n\n---\ntitle: Hi\n---\nBody").unwrap();
    let fm = parsed.front_matter.expect("front matter present");
    assert_eq!(fm.title.as_deref(), Some("Hi"));
    assert_eq!(parsed.body, "Body");
}

#[test]
fn well_formed_block_parses_all_recognized_keys() {
    let input = "---\ntitle: Hi\ntag: x\nttr: 1m\nslug: custom\nsummary: s\n---\nBody";
    let parsed = parse(input).unwrap();
    let fm = parsed.front_matter.expect("front matter present");
    assert_eq!(fm.title.as_deref(), Some("Hi"));
    assert_eq!(fm.tag.as_deref(), Some("x"));
    assert_eq!(fm.ttr.as_deref(), Some("1m"));
    assert_eq!(fm.slug.as_deref(), Some("custom"));
    assert_eq!(fm.summary.as_deref(), Some("s"));
    assert_eq!(parsed.body, "Body");
}

#[test]
fn unrecognized_keys_are_ignored() {
    let input = "---\ntitle: Hi\nauthor: someone\ndraft: true\n---\nBody";
    let fm = parse(input).unwrap().front_matter.unwrap();
    assert_eq!(fm.title.as_deref(), Some("Hi"));
    assert!(fm.tag.is_none());
}

#[test]
fn front_matter_round_trips_through_serialisation() {
    let input = "---\ntitle: Hi\ntag: x\nttr: 1m\nsummary: s\n---\nBody";
    let fm = parse(input).unwrap().front_matter.unwrap();

    let reserialised = format!(
        "---\n{}---\nBody",
        serde_yaml::to_string(&fm).expect("front matter serialises")
    );
    let again = parse(&reserialised).unwrap().front_matter.unwrap();
    assert_eq!(fm, again);
}

#[test]
fn empty_block_is_invalid_metadata_not_absent_metadata() {
    let err = parse("---\n---\nBody").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err}");
}

#[test]
fn malformed_block_fails_with_parse_error() {
    let err = parse("---\n[:::\n---\nBody").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err}");
}

#[test]
fn scalar_block_is_not_a_mapping() {
    let err = parse("---\njust a sentence, not a mapping\n---\nBody").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err}");
}

#[test]
fn missing_closing_marker_takes_the_remainder_as_block() {
    let parsed = parse("---\ntitle: Hi").unwrap();
    let fm = parsed.front_matter.expect("front matter present");
    assert_eq!(fm.title.as_deref(), Some("Hi"));
    assert_eq!(parsed.body, "");
}

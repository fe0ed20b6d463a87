// tests/console_commands.rs

use skilltree::console::{Command, LoadSource, parse_command};
use skilltree::scene::FilterMode;

#[test]
fn verbs_are_case_insensitive_but_arguments_are_not() {
    assert_eq!(
        parse_command("TOGGLE cs101"),
        Command::Toggle("cs101".to_string())
    );
    assert_eq!(
        parse_command("Toggle CS101"),
        Command::Toggle("CS101".to_string())
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        parse_command("   toggle    CS101   "),
        Command::Toggle("CS101".to_string())
    );
}

#[test]
fn blank_lines_are_empty_commands() {
    assert_eq!(parse_command(""), Command::Empty);
    assert_eq!(parse_command("   "), Command::Empty);
}

#[test]
fn arguments_may_contain_spaces() {
    assert_eq!(
        parse_command("search deep learning"),
        Command::Search("deep learning".to_string())
    );
    assert_eq!(
        parse_command("generate music theory for beginners"),
        Command::Generate("music theory for beginners".to_string())
    );
}

#[test]
fn missing_arguments_produce_usage_notices() {
    for (line, usage) in [
        ("toggle", "usage: toggle <course-id>"),
        ("search", "usage: search <text>"),
        ("details", "usage: details <course-id>"),
        ("generate", "usage: generate <topic>"),
    ] {
        match parse_command(line) {
            Command::Invalid(msg) => assert_eq!(msg, usage),
            other => panic!("expected Invalid for {line:?}, got: {other:?}"),
        }
    }
}

#[test]
fn filter_modes_parse_case_insensitively() {
    assert_eq!(parse_command("filter all"), Command::Filter(FilterMode::All));
    assert_eq!(
        parse_command("filter NEXT"),
        Command::Filter(FilterMode::Next)
    );
    assert_eq!(
        parse_command("filter Completed"),
        Command::Filter(FilterMode::Completed)
    );

    match parse_command("filter bogus") {
        Command::Invalid(msg) => assert_eq!(msg, "usage: filter <all|next|completed>"),
        other => panic!("expected Invalid, got: {other:?}"),
    }
    match parse_command("filter") {
        Command::Invalid(_) => {}
        other => panic!("expected Invalid, got: {other:?}"),
    }
}

#[test]
fn load_distinguishes_the_example_from_paths() {
    assert_eq!(
        parse_command("load example"),
        Command::Load(LoadSource::Example)
    );
    assert_eq!(
        parse_command("load EXAMPLE"),
        Command::Load(LoadSource::Example)
    );
    assert_eq!(
        parse_command("load courses/my plan.csv"),
        Command::Load(LoadSource::Path("courses/my plan.csv".to_string()))
    );
    match parse_command("load") {
        Command::Invalid(msg) => assert!(msg.contains("load example")),
        other => panic!("expected Invalid, got: {other:?}"),
    }
}

#[test]
fn confirmation_words_map_to_confirm() {
    assert_eq!(parse_command("y"), Command::Confirm);
    assert_eq!(parse_command("yes"), Command::Confirm);
    assert_eq!(parse_command("Y"), Command::Confirm);
    assert_eq!(parse_command("YES"), Command::Confirm);
}

#[test]
fn bare_verbs_parse() {
    assert_eq!(parse_command("reset"), Command::Reset);
    assert_eq!(parse_command("map"), Command::Map);
    assert_eq!(parse_command("progress"), Command::Progress);
    assert_eq!(parse_command("help"), Command::Help);
}

#[test]
fn quit_has_aliases() {
    assert_eq!(parse_command("quit"), Command::Quit);
    assert_eq!(parse_command("exit"), Command::Quit);
    assert_eq!(parse_command("q"), Command::Quit);
    assert_eq!(parse_command("QUIT"), Command::Quit);
}

#[test]
fn unknown_verbs_name_themselves_in_the_notice() {
    match parse_command("frobnicate everything") {
        Command::Invalid(msg) => {
            assert!(msg.contains("frobnicate"));
            assert!(msg.contains("help"));
        }
        other => panic!("expected Invalid, got: {other:?}"),
    }
}

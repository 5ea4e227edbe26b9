use ghostlink_ui::utils::{InputMode, AMBIGUOUS_INPUT_MSG, MISSING_INPUT_MSG};

#[test]
fn test_both_inputs_rejected() {
    let mode = InputMode::classify("hello", true);
    assert_eq!(mode, InputMode::Both);
    assert_eq!(mode.rejection(), Some(AMBIGUOUS_INPUT_MSG));
    assert_eq!(mode.unused_field(), None);
}

#[test]
fn test_neither_input_rejected() {
    let mode = InputMode::classify("", false);
    assert_eq!(mode, InputMode::None);
    assert_eq!(mode.rejection(), Some(MISSING_INPUT_MSG));
    assert_eq!(mode.unused_field(), None);
}

#[test]
fn test_whitespace_text_counts_as_empty() {
    assert_eq!(InputMode::classify("   \n\t", false), InputMode::None);
    assert_eq!(InputMode::classify("  \n", true), InputMode::FileOnly);
}

#[test]
fn test_text_only_drops_file_field() {
    let mode = InputMode::classify("  secret  ", false);
    assert_eq!(mode, InputMode::TextOnly);
    assert_eq!(mode.rejection(), None);
    assert_eq!(mode.unused_field(), Some("file"));
}

#[test]
fn test_file_only_drops_text_field() {
    let mode = InputMode::classify("", true);
    assert_eq!(mode, InputMode::FileOnly);
    assert_eq!(mode.rejection(), None);
    assert_eq!(mode.unused_field(), Some("text"));
}

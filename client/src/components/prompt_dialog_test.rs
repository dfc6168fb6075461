use super::*;

#[test]
fn prompt_result_trims_value() {
    assert_eq!(prompt_result("  New title  "), Some("New title".to_owned()));
}

#[test]
fn prompt_result_blank_is_cancel() {
    assert_eq!(prompt_result(""), None);
    assert_eq!(prompt_result(" \n\t "), None);
}

#[test]
fn prompt_result_keeps_inner_newlines() {
    assert_eq!(prompt_result("line one\nline two\n"), Some("line one\nline two".to_owned()));
}

use super::*;

#[test]
fn parse_category_filter_all_means_none() {
    assert_eq!(parse_category_filter(""), None);
}

#[test]
fn parse_category_filter_reads_id() {
    assert_eq!(parse_category_filter("12"), Some(12));
}

#[test]
fn parse_category_filter_ignores_garbage() {
    assert_eq!(parse_category_filter("abc"), None);
}

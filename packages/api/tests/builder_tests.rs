//! Fluent builder tests

use qsplit::{Preset, SeparatorProblem, Split, SplitBuilder, SplitConfig, SplitError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_builder_without_separators_fails() {
    assert_eq!(
        SplitBuilder::new().split("test"),
        Err(SplitError::InvalidSeparators(SeparatorProblem::Empty))
    );
    assert_eq!(
        Split::on("").split("test"),
        Err(SplitError::InvalidSeparators(SeparatorProblem::Empty))
    );
}

#[test]
fn test_quote_separator_rejected() {
    assert_eq!(
        Split::on('"').split("test"),
        Err(SplitError::InvalidSeparators(SeparatorProblem::ContainsQuote))
    );
    assert!(Split::on(' ').also_on('"').tokenizer().is_err());
}

#[test]
fn test_remove_empty_is_default() {
    let builder = Split::on(' ');
    assert!(builder.removes_empty());
    assert_eq!(builder.split("  test sample   ").expect("split"), ["test", "sample"]);
}

#[test]
fn test_keep_empty() {
    assert_eq!(
        Split::on(' ').keep_empty().split(" test sample  ").expect("split"),
        ["", "test", "sample", "", ""]
    );
    assert_eq!(Split::on(' ').keep_empty().split("").expect("split"), [""]);
    assert!(Split::on(' ').split("").expect("split").is_empty());
}

#[test]
fn test_separator_sources_agree() {
    let input = "  a;\"test;sample\";  \"quoted text\"";
    let expected = ["a", "\"test;sample\"", "\"quoted text\""];

    assert_eq!(Split::on("; ").split(input).expect("split"), expected);
    assert_eq!(Split::on([';', ' ']).split(input).expect("split"), expected);
    assert_eq!(Split::on(' ').also_on(';').split(input).expect("split"), expected);
    assert_eq!(
        SplitBuilder::new().also_on(";").also_on(" ").split(input).expect("split"),
        expected
    );
    let chars: &[char] = &[' ', ';'];
    assert_eq!(Split::on(chars).split(input).expect("split"), expected);
}

#[test]
fn test_presets() {
    assert_eq!(
        Split::whitespace().split("a\tb\n\"c d\"\r\ne").expect("split"),
        ["a", "b", "\"c d\"", "e"]
    );
    assert_eq!(
        qsplit::on(Preset::CommaOrSemicolon)
            .split("x,y;\"z,;\"")
            .expect("split"),
        ["x", "y", "\"z,;\""]
    );
    assert_eq!(Preset::Words.as_str(), ",. ");
}

#[test]
fn test_borrowed_and_stats() {
    init_logging();
    let text = String::from("one \"two three\" four");
    let builder = Split::on(' ').debug();
    let tokens = builder.split_borrowed(&text).expect("split");
    assert_eq!(tokens, ["one", "\"two three\"", "four"]);

    let (_, stats) = builder.split_with_stats(&text).expect("split");
    assert_eq!(stats.tokens_emitted, 3);
    assert_eq!(stats.quoted_spans, 1);
    assert_eq!(stats.units_scanned, text.chars().count());
}

#[test]
fn test_unterminated_quote_through_builder() {
    init_logging();
    assert_eq!(
        Split::on(' ').debug().split("    \"\"  \"   "),
        Err(SplitError::UnterminatedQuote { opened_at: 8 })
    );
}

#[test]
fn test_config_round_trip() {
    let config = SplitConfig::new(",", false);
    let builder = Split::with_config(&config);
    assert_eq!(builder.to_config(), config);
    assert_eq!(builder.separator_chars(), Some(","));
    assert_eq!(builder.split("a,,b").expect("split"), ["a", "", "b"]);

    let unset = SplitBuilder::default().to_config();
    assert_eq!(unset.separators, "");
}

#[test]
fn test_tokenizer_reuse() {
    let tokenizer = Split::on(", ").tokenizer().expect("valid separators");
    assert_eq!(tokenizer.split_str("a, b").expect("split"), ["a", "b"]);
    assert_eq!(tokenizer.split_str("\"a, b\"").expect("split"), ["\"a, b\""]);
}

#[test]
fn test_free_functions_reexported() {
    assert_eq!(
        qsplit::split("test", " ", true).expect("split"),
        ["test"]
    );
    assert_eq!(
        qsplit::split_bytes(b"a b", b" ", true).expect("split"),
        [b"a".to_vec(), b"b".to_vec()]
    );
}

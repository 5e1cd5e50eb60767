//! Reusable tokenizer tests
//!
//! Borrowed output, spans and scan statistics.

use std::sync::Arc;
use std::thread;

use qsplit_core::{SeparatorSet, SplitStats, Tokenizer};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_split_str_borrows_from_input() {
    init_logging();
    let text = String::from("one two \"three four\"");
    let tokenizer = Tokenizer::from_chars(" ", true).expect("valid separators");
    let tokens = tokenizer.split_str(&text).expect("split");

    assert_eq!(tokens, ["one", "two", "\"three four\""]);
    let base = text.as_ptr() as usize;
    assert_eq!(tokens[1].as_ptr() as usize - base, 4);
}

#[test]
fn test_str_spans_are_byte_ranges() {
    let tokenizer = Tokenizer::from_chars(" ", false).expect("valid separators");
    let spans = tokenizer.str_spans("é ab").expect("split");
    assert_eq!(spans, [0..2, 3..5]);
}

#[test]
fn test_unit_spans() {
    let tokenizer = Tokenizer::from_units(b",", false).expect("valid separators");
    assert_eq!(tokenizer.spans(b",a,,\"b,c\"").expect("split"), [0..0, 1..2, 3..3, 4..9]);
}

#[test]
fn test_stats_for_kept_and_suppressed_tokens() {
    let tokenizer = Tokenizer::from_chars(" ", true).expect("valid separators");
    let (tokens, stats) = tokenizer
        .split_str_with_stats("  a \"b c\"  d ")
        .expect("split");

    assert_eq!(tokens, ["a", "\"b c\"", "d"]);
    assert_eq!(
        stats,
        SplitStats {
            units_scanned: 13,
            tokens_emitted: 3,
            empty_suppressed: 4,
            quoted_spans: 1,
            state_transitions: 2,
        }
    );
}

#[test]
fn test_stats_over_units() {
    let tokenizer = Tokenizer::from_units(b" ", false).expect("valid separators");
    let (tokens, stats) = tokenizer.split_with_stats(b"\"\" x").expect("split");
    assert_eq!(tokens, [b"\"\"".as_slice(), b"x".as_slice()]);
    assert_eq!(stats.tokens_emitted, 2);
    assert_eq!(stats.empty_suppressed, 0);
    assert_eq!(stats.quoted_spans, 1);
}

#[test]
fn test_tokenizer_accessors() {
    let separators = SeparatorSet::from_chars(",;").expect("valid separators");
    let tokenizer = Tokenizer::new(separators.clone(), false);
    assert_eq!(tokenizer.separators(), &separators);
    assert!(!tokenizer.removes_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let tokenizer = Tokenizer::from_chars(" ;", true).expect("valid separators");
    let first = tokenizer.split_str("x; \"y;z\" w").expect("split");
    let second = tokenizer.split_str("x; \"y;z\" w").expect("split");
    assert_eq!(first, second);
    assert!(tokenizer.split_str("\"open").is_err());
    assert_eq!(tokenizer.split_str("x; \"y;z\" w").expect("split"), first);
}

#[test]
fn test_shared_across_threads() {
    let tokenizer = Arc::new(Tokenizer::from_chars(",", true).expect("valid separators"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tokenizer = Arc::clone(&tokenizer);
            thread::spawn(move || {
                let input = format!("{i},\"{i},{i}\",,{i}");
                tokenizer
                    .split_str(&input)
                    .expect("split")
                    .into_iter()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tokens = handle.join().expect("thread should not panic");
        assert_eq!(tokens, [format!("{i}"), format!("\"{i},{i}\""), format!("{i}")]);
    }
}

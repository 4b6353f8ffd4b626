use crate::fonts::{ApproxMetrics, FontMetrics};
use crate::wrap::wrap_lines;

fn width_of(n_chars: usize) -> f32 {
    ApproxMetrics::default().text_width(&"x".repeat(n_chars), 10.0)
}

#[test]
fn short_text_stays_on_one_line() {
    let m = ApproxMetrics::default();
    let lines = wrap_lines(&m, "hello world", 10.0, width_of(20));
    assert_eq!(lines, vec!["hello world".to_string()]);
}

#[test]
fn wraps_at_word_boundaries() {
    let m = ApproxMetrics::default();
    // Ten characters fit per line; "aaaa bbbb" is nine, adding " cccc"
    // exceeds it.
    let lines = wrap_lines(&m, "aaaa bbbb cccc", 10.0, width_of(10));
    assert_eq!(lines, vec!["aaaa bbbb".to_string(), "cccc".to_string()]);
}

#[test]
fn collapses_runs_of_whitespace() {
    let m = ApproxMetrics::default();
    let lines = wrap_lines(&m, "a   b\t c", 10.0, width_of(20));
    assert_eq!(lines, vec!["a b c".to_string()]);
}

#[test]
fn honors_hard_newlines() {
    let m = ApproxMetrics::default();
    let lines = wrap_lines(&m, "first\n\nthird", 10.0, width_of(20));
    assert_eq!(
        lines,
        vec!["first".to_string(), String::new(), "third".to_string()]
    );
}

#[test]
fn breaks_oversized_words_by_character() {
    let m = ApproxMetrics::default();
    let lines = wrap_lines(&m, &"z".repeat(25), 10.0, width_of(10));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 10);
    assert_eq!(lines[1].len(), 10);
    assert_eq!(lines[2].len(), 5);
}

#[test]
fn empty_text_reserves_one_line() {
    let m = ApproxMetrics::default();
    assert_eq!(wrap_lines(&m, "", 10.0, width_of(10)), vec![String::new()]);
}

#[test]
fn line_count_matches_measure_entry_point() {
    let m = ApproxMetrics::default();
    let text = "some body text that will wrap across a few lines of output";
    let lines = wrap_lines(&m, text, 10.0, width_of(15));
    assert_eq!(
        m.measure_wrapped_lines(text, 10.0, width_of(15)),
        lines.len()
    );
}

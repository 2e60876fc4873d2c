//! Property tests for the rendered diff.

use linediff_core::diff::{
    compute_edit_script, edit_distance, format, format_with, split_lines, MISSING_NEWLINE_MARKER,
};
use linediff_core::RenderConfig;
use proptest::prelude::*;

/// Texts over a tiny alphabet so that shared lines are common.
fn text_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", ""]), 0..12),
        any::<bool>(),
    )
        .prop_map(|(lines, terminated)| {
            let mut text = lines.join("\n");
            if terminated && !lines.is_empty() {
                text.push('\n');
            }
            text
        })
}

/// Rendered output split into its lines, without terminators.
fn rendered_lines(rendered: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(lines.pop(), Some(""), "output must end with a newline or be empty");
    lines
}

/// Longest common subsequence length over lines, prefix-indexed.
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

proptest! {
    #[test]
    fn prop_split_counts_lines_from_terminators(text in text_strategy()) {
        let seq = split_lines(&text);
        let unterminated = !text.is_empty() && !text.ends_with('\n');
        let expected = text.matches('\n').count() + usize::from(unterminated);
        prop_assert_eq!(seq.len(), expected);

        let last = seq.as_slice().last().map(String::as_str);
        if unterminated {
            prop_assert!(
                last.is_some_and(|line| line.ends_with(MISSING_NEWLINE_MARKER)),
                "last line {:?} lacks the marker", last
            );
        } else {
            prop_assert!(!last.is_some_and(|line| line.ends_with(MISSING_NEWLINE_MARKER)));
        }
    }

    #[test]
    fn prop_identity_keeps_every_line(text in text_strategy()) {
        let expected: String = split_lines(&text)
            .iter()
            .map(|line| format!(" {}\n", line))
            .collect();
        prop_assert_eq!(format(&text, &text), expected);
    }

    #[test]
    fn prop_complementarity_rebuilds_both_inputs(t1 in text_strategy(), t2 in text_strategy()) {
        let rendered = format(&t1, &t2);
        let lines = rendered_lines(&rendered);

        let old: Vec<String> = lines
            .iter()
            .filter(|l| !l.starts_with('+'))
            .map(|l| l[1..].to_string())
            .collect();
        let new: Vec<String> = lines
            .iter()
            .filter(|l| !l.starts_with('-'))
            .map(|l| l[1..].to_string())
            .collect();

        let (a, b) = (split_lines(&t1), split_lines(&t2));
        prop_assert_eq!(old.as_slice(), a.as_slice());
        prop_assert_eq!(new.as_slice(), b.as_slice());
    }

    #[test]
    fn prop_changes_equal_minimum_distance(t1 in text_strategy(), t2 in text_strategy()) {
        let (a, b) = (split_lines(&t1), split_lines(&t2));
        let rendered = format(&t1, &t2);
        let lines = rendered_lines(&rendered);
        let changed = lines.iter().filter(|l| !l.starts_with(' ')).count();
        let kept = lines.len() - changed;

        let minimum = a.len() + b.len() - 2 * lcs_len(a.as_slice(), b.as_slice());
        prop_assert_eq!(changed, minimum);
        prop_assert_eq!(edit_distance(&t1, &t2), minimum);
        prop_assert!(changed <= a.len() + b.len());
        prop_assert_eq!(changed == a.len() + b.len(), kept == 0);
    }

    #[test]
    fn prop_distance_is_symmetric(t1 in text_strategy(), t2 in text_strategy()) {
        prop_assert_eq!(edit_distance(&t1, &t2), edit_distance(&t2, &t1));
    }

    #[test]
    fn prop_suppressed_output_numbers_the_changed_lines(t1 in text_strategy(), t2 in text_strategy()) {
        let full = format(&t1, &t2);
        let suppressed = format_with(&t1, &t2, &RenderConfig::suppressing_common());

        let (mut old_pos, mut new_pos) = (0usize, 0usize);
        let mut expected = String::new();
        for line in rendered_lines(&full) {
            match line.as_bytes().first() {
                Some(b' ') => {
                    old_pos += 1;
                    new_pos += 1;
                }
                Some(b'-') => {
                    old_pos += 1;
                    expected.push_str(&format!("{}{}\n", old_pos, line));
                }
                Some(b'+') => {
                    new_pos += 1;
                    expected.push_str(&format!("{}{}\n", new_pos, line));
                }
                other => prop_assert!(false, "unexpected line prefix {:?}", other),
            }
        }
        prop_assert_eq!(suppressed, expected);
    }

    #[test]
    fn prop_script_stats_match_distance(t1 in text_strategy(), t2 in text_strategy()) {
        let script = compute_edit_script(&t1, &t2);
        let stats = script.stats();
        prop_assert_eq!(stats.changed(), script.distance);
        prop_assert_eq!(stats.kept + stats.deleted, split_lines(&t1).len());
        prop_assert_eq!(stats.kept + stats.inserted, split_lines(&t2).len());
        prop_assert_eq!(script.is_identical(), split_lines(&t1) == split_lines(&t2));
    }
}

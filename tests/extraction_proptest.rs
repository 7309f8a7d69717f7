//! Property-based tests for extraction
//!
//! Generated logs mix `name=` tokens with ordinary `key=value` noise. Most
//! values avoid quotes so the expected list can be read straight off the
//! generator under either policy. A separate generator embeds apostrophes
//! (`O'Brien`) that only the lookahead policy keeps intact.

use namex::extraction::collation::collation_key;
use namex::{extract, ExtractionOptions, MatchPolicy};
use proptest::prelude::*;
use std::collections::HashSet;

/// Values without quote characters, including accented and mixed-case ones.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_-]{0,12}",
        "[a-zA-ZéÉöÖñÑ ]{1,12}",
        Just(String::new()),
        Just("Bob".to_string()),
        Just("bob".to_string()),
    ]
}

fn noise_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z_]{0,8}", "[a-z0-9]{1,8}").prop_map(|(k, v)| format!("{}={}", k, v))
}

/// One token on a line: either a name with its value, or noise.
#[derive(Debug, Clone)]
enum Token {
    Name(String, char),
    Noise(String),
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        (value_strategy(), prop_oneof![Just('\''), Just('"')])
            .prop_map(|(v, q)| Token::Name(v, q)),
        noise_strategy().prop_map(Token::Noise),
    ]
}

fn log_strategy() -> impl Strategy<Value = Vec<Vec<Token>>> {
    prop::collection::vec(prop::collection::vec(token_strategy(), 0..6), 0..8)
}

fn render(lines: &[Vec<Token>]) -> String {
    lines
        .iter()
        .map(|tokens| {
            tokens
                .iter()
                .map(|t| match t {
                    Token::Name(v, q) => format!("name={q}{v}{q}"),
                    Token::Noise(n) => n.clone(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn expected_values(lines: &[Vec<Token>]) -> Vec<String> {
    lines
        .iter()
        .flatten()
        .filter_map(|t| match t {
            Token::Name(v, _) => Some(v.clone()),
            Token::Noise(_) => None,
        })
        .collect()
}

/// Values with an embedded apostrophe that is never followed by whitespace.
fn apostrophe_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,6}'[A-Za-z]{1,6}",
        "[a-z]{0,4}'[a-z]{1,4}'[a-z]{1,4}",
        Just("O'Brien".to_string()),
    ]
}

fn apostrophe_log_strategy() -> impl Strategy<Value = Vec<Vec<Token>>> {
    let token = prop_oneof![
        apostrophe_value_strategy().prop_map(|v| Token::Name(v, '\'')),
        value_strategy().prop_map(|v| Token::Name(v, '\'')),
        noise_strategy().prop_map(Token::Noise),
    ];
    prop::collection::vec(prop::collection::vec(token, 0..6), 0..8)
}

fn options_strategy() -> impl Strategy<Value = ExtractionOptions> {
    let policy = prop_oneof![Just(MatchPolicy::Lookahead), Just(MatchPolicy::Symmetric)];
    (any::<bool>(), any::<bool>(), policy)
        .prop_map(|(u, s, p)| ExtractionOptions::new().unique(u).sorted(s).policy(p))
}

proptest! {
    #[test]
    fn finds_every_generated_name_in_order(lines in log_strategy()) {
        let text = render(&lines);
        for policy in MatchPolicy::ALL {
            let result = extract(&text, &ExtractionOptions::new().policy(policy));
            let expected = expected_values(&lines);
            prop_assert_eq!(result.values(), expected.as_slice());
        }
    }

    #[test]
    fn lookahead_keeps_embedded_apostrophes(lines in apostrophe_log_strategy()) {
        let text = render(&lines);
        let result = extract(&text, &ExtractionOptions::new().policy(MatchPolicy::Lookahead));
        let expected = expected_values(&lines);
        prop_assert_eq!(result.values(), expected.as_slice());
    }

    #[test]
    fn extraction_is_deterministic(lines in log_strategy(), options in options_strategy()) {
        let text = render(&lines);
        prop_assert_eq!(extract(&text, &options), extract(&text, &options));
    }

    #[test]
    fn count_matches_length(lines in log_strategy(), options in options_strategy()) {
        let result = extract(&render(&lines), &options);
        prop_assert_eq!(result.count(), result.values().len());
    }

    #[test]
    fn unique_has_no_exact_duplicates(lines in log_strategy(), sorted in any::<bool>()) {
        let options = ExtractionOptions::new().unique(true).sorted(sorted);
        let result = extract(&render(&lines), &options);
        let distinct: HashSet<&String> = result.values().iter().collect();
        prop_assert_eq!(distinct.len(), result.count());
    }

    #[test]
    fn sorted_is_non_decreasing_by_collation(lines in log_strategy(), unique in any::<bool>()) {
        let options = ExtractionOptions::new().unique(unique).sorted(true);
        let result = extract(&render(&lines), &options);
        for pair in result.values().windows(2) {
            prop_assert!(collation_key(&pair[0]) <= collation_key(&pair[1]));
        }
    }

    #[test]
    fn unique_extraction_is_idempotent(lines in log_strategy()) {
        let options = ExtractionOptions::new().unique(true);
        let first = extract(&render(&lines), &options);
        let reformatted = first
            .values()
            .iter()
            .map(|v| format!("name='{}'", v))
            .collect::<Vec<_>>()
            .join(" ");
        let second = extract(&reformatted, &options);

        let a: HashSet<&String> = first.values().iter().collect();
        let b: HashSet<&String> = second.values().iter().collect();
        prop_assert_eq!(a, b);
    }
}

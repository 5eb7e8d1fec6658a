use digraph_regex::compile_pattern;
use quickcheck::{quickcheck, TestResult};

/// Map arbitrary bytes onto uppercase letters, which are never
/// metacharacters.
fn letters(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| (b'A' + b % 26) as char).collect()
}

quickcheck! {
    fn prop_literal_matches_only_itself(bytes: Vec<u8>, extra: u8) -> bool {
        let pattern = letters(&bytes);
        let matcher = match compile_pattern(&pattern) {
            Ok(matcher) => matcher,
            Err(_) => return false,
        };
        let longer = format!("{}{}", pattern, letters(&[extra]));
        let shorter: String = pattern.chars().skip(1).collect();
        matcher.recognize(&pattern)
            && !matcher.recognize(&longer)
            && (pattern.is_empty() || !matcher.recognize(&shorter))
    }

    fn prop_dots_match_any_text_of_same_length(text: String) -> bool {
        let n = text.chars().count();
        let exact = compile_pattern(&".".repeat(n));
        let one_more = compile_pattern(&".".repeat(n + 1));
        match (exact, one_more) {
            (Ok(exact), Ok(one_more)) => {
                exact.recognize(&text) && !one_more.recognize(&text)
            }
            _ => false,
        }
    }

    fn prop_star_repeats_any_number_of_times(n: u8) -> bool {
        let matcher = match compile_pattern("AB*A") {
            Ok(matcher) => matcher,
            Err(_) => return false,
        };
        let text = format!("A{}A", "B".repeat(n as usize));
        matcher.recognize(&text) && !matcher.recognize(&text[..text.len() - 1])
    }

    fn prop_compile_and_match_are_deterministic(pattern: String, text: String) -> TestResult {
        let first = compile_pattern(&pattern);
        let second = compile_pattern(&pattern);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                if a.nfa() != b.nfa() {
                    return TestResult::failed();
                }
                TestResult::from_bool(a.recognize(&text) == b.recognize(&text))
            }
            (Err(a), Err(b)) => TestResult::from_bool(a == b),
            _ => TestResult::failed(),
        }
    }

    fn prop_alternation_accepts_either_side(left: Vec<u8>, right: Vec<u8>) -> bool {
        let (left, right) = (letters(&left), letters(&right));
        let matcher = match compile_pattern(&format!("({}|{})", left, right)) {
            Ok(matcher) => matcher,
            Err(_) => return false,
        };
        matcher.recognize(&left) && matcher.recognize(&right)
    }
}

use digraph_regex::{compile_pattern, Nfa};

fn main() {
    println!("Digraph Regex - NFA Structure Demo");
    println!("==================================");

    // Each pattern with a few texts to try against it.
    let test_patterns: Vec<(&str, Vec<&str>)> = vec![
        ("ABC", vec!["ABC", "ABCD", "AB"]),
        ("A.C", vec!["ABC", "AxC", "AC"]),
        ("AB*A", vec!["AA", "ABA", "ABBBBA", "AB"]),
        ("(A|B)C", vec!["AC", "BC", "CC"]),
        ("((A*B|AC)D)", vec!["AABD", "AAAABD", "ACD", "AAAABC"]),
        ("(A*)", vec!["", "AAA", "B"]),
        ("((A|B)|C)*", vec!["", "ABCCBA", "ABD"]),
        // Malformed patterns are reported, never matched.
        ("(A|B", vec!["A"]),
        ("A|B", vec!["A"]),
        ("(A|B|C)", vec!["A"]),
        ("*A", vec!["A"]),
    ];

    for (pattern, texts) in test_patterns {
        println!("\n=== Pattern: '{}' ===", pattern);

        let matcher = match compile_pattern(pattern) {
            Ok(matcher) => matcher,
            Err(e) => {
                println!("Failed to compile: {}", e);
                continue;
            }
        };

        print_nfa(matcher.nfa());

        for text in texts {
            println!("  {:?} -> {}", text, matcher.recognize(text));
        }
    }
}

fn print_nfa(nfa: &Nfa) {
    println!("Accept state: {}", nfa.accept_state());
    println!("Epsilon edges: {}", nfa.graph().edge_count());
    println!("States:");
    print!("{}", nfa);
}

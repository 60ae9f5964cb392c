//! Reader for the `--NAME--`-delimited fixture format defined by
//! `examples/original_source/php_test.go`. The tokenizer/compiler that
//! would turn a fixture's `FILE` section into an operator tree is out of
//! scope for this crate (spec Non-goals), so fixtures here are consumed as
//! plain named expectation records and exercised by building trees directly
//! with the public `Builder` API — the format itself is still honored.

use std::collections::HashMap;

/// One `--NAME--`-delimited fixture: an ordered map from section name
/// (`TEST`, `FILE`, `EXPECT`, ...) to its trimmed body text.
#[derive(Debug, Default)]
pub struct Fixture {
    sections: HashMap<String, String>,
}

impl Fixture {
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }
}

/// Parses the `--NAME--` section format byte-for-byte the way
/// `php_test.go`'s `runTest` does: a line starting and ending with `--`
/// opens a new section, and everything up to the next such line (or EOF)
/// belongs to it.
pub fn parse_fixture(text: &str) -> Fixture {
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if line.starts_with("--") && line.len() >= 4 && line.ends_with("--") {
            if let Some((name, body)) = current.take() {
                sections.insert(name, body.trim().to_string());
            }
            let name = line[2..line.len() - 2].to_string();
            current = Some((name, String::new()));
            continue;
        }

        if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }

    if let Some((name, body)) = current {
        sections.insert(name, body.trim().to_string());
    }

    Fixture { sections }
}

/// Compares trimmed output to trimmed expectation byte-for-byte, matching
/// the harness's pass condition.
pub fn matches_expectation(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_sections() {
        let fixture = parse_fixture(
            "--TEST--\nsimple append\n--FILE--\n<?php echo \"a\" . \"b\";\n--EXPECT--\nab\n",
        );
        assert_eq!(fixture.section("TEST"), Some("simple append"));
        assert_eq!(fixture.section("FILE"), Some("<?php echo \"a\" . \"b\";"));
        assert_eq!(fixture.section("EXPECT"), Some("ab"));
    }

    #[test]
    fn expectation_comparison_trims_both_sides() {
        assert!(matches_expectation("  ab\n", "ab"));
        assert!(!matches_expectation("ab", "ac"));
    }
}

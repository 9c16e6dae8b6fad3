use tracing::debug;

use super::sample_too_short;

/// Guard message for snippets below the short-input floor.
pub const MSG_TOO_SHORT: &str = "Error: Input is too short to detect a programming language.";

/// Message when the rule table is exhausted without a hit. Distinct from the
/// short-input error so callers can tell the two apart.
pub const MSG_NO_MATCH: &str = "Unknown programming language. No patterns matched.";

/// One classification rule: a language label and the substrings that tag it.
#[derive(Debug, Clone, Copy)]
pub struct CodeRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// The rule table is a priority list, not a set: rules are tried top to
/// bottom and the first language with any keyword present wins. Keyword sets
/// overlap deliberately (`#include` appears under both C and C++, and a bare
/// `;` is enough to tag C-like text as C), so table order is the sole
/// tie-break. Reordering entries changes results.
pub const CODE_RULES: &[CodeRule] = &[
    CodeRule {
        label: "Python",
        keywords: &["def ", "print(", "import ", "class ", ":"],
    },
    CodeRule {
        label: "JavaScript",
        keywords: &["function ", "console.log", "let ", "var ", "const ", "=>"],
    },
    CodeRule {
        label: "Java",
        keywords: &["public class", "System.out.println", "void main(", "import java."],
    },
    CodeRule {
        label: "C",
        keywords: &["#include", "int main(", "printf(", ";"],
    },
    CodeRule {
        label: "C++",
        keywords: &["#include", "std::cout", "using namespace std;", "std::endl"],
    },
    CodeRule {
        label: "HTML",
        keywords: &["<!DOCTYPE html>", "<html>", "<head>", "<body>", "</html>"],
    },
];

/// Classifies code snippets by ordered keyword rules.
///
/// Matching is a raw case-sensitive substring test over the untouched input:
/// no tokenization, no syntax awareness. Fast and predictable, with known
/// precision limits inherited from the rule table above.
pub struct CodeLanguageDetector {
    rules: &'static [CodeRule],
}

impl CodeLanguageDetector {
    /// Detector over the standard rule table.
    pub fn new() -> Self {
        Self::with_rules(CODE_RULES)
    }

    /// Detector over a custom rule table (used by rule-ordering tests).
    pub fn with_rules(rules: &'static [CodeRule]) -> Self {
        Self { rules }
    }

    /// First-match-wins scan; `None` when no rule fires.
    pub fn classify(&self, snippet: &str) -> Option<&'static str> {
        for rule in self.rules {
            if rule.keywords.iter().any(|keyword| snippet.contains(keyword)) {
                debug!(label = rule.label, "rule table matched");
                return Some(rule.label);
            }
        }
        None
    }

    /// Detect the programming language of `snippet` and describe the result.
    ///
    /// Returns the bare language label on a hit; guard and no-match cases
    /// come back as fixed message strings.
    pub fn detect(&self, snippet: &str) -> String {
        if sample_too_short(snippet) {
            debug!("snippet below short-input floor, rules not evaluated");
            return MSG_TOO_SHORT.to_string();
        }

        match self.classify(snippet) {
            Some(label) => label.to_string(),
            None => MSG_NO_MATCH.to_string(),
        }
    }
}

impl Default for CodeLanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_skips_rules() {
        let detector = CodeLanguageDetector::new();
        // ";" would match the C rule if the guard did not fire first
        for snippet in ["", "   ", ";", "  ;  ", "a;b"] {
            assert_eq!(detector.detect(snippet), MSG_TOO_SHORT);
        }
    }

    #[test]
    fn test_single_language_snippets() {
        let detector = CodeLanguageDetector::new();
        let cases = [
            ("print('hello world')", "Python"),
            ("def greet(name) -> None", "Python"),
            ("console.log(greeting)", "JavaScript"),
            ("const greeting = `hi`", "JavaScript"),
            ("System.out.println(greeting)", "Java"),
            ("void main(String[] args)", "Java"),
            ("printf(\"%d\\n\", n)", "C"),
            ("<html> <p>hello</p> </html>", "HTML"),
            ("<!DOCTYPE html>", "HTML"),
        ];
        for (snippet, expected) in &cases {
            assert_eq!(detector.detect(snippet), *expected, "snippet: {snippet}");
        }
    }

    #[test]
    fn test_semicolon_alone_tags_c() {
        let detector = CodeLanguageDetector::new();
        assert_eq!(detector.detect("x = y + z;"), "C");
    }

    #[test]
    fn test_colon_tags_python_before_later_rules() {
        // ":" belongs to the Python rule, which outranks everything below it.
        // That includes "std::cout": real C++ snippets land on Python or C
        // long before the C++ rule is consulted, a precision limit the table
        // carries on purpose.
        let detector = CodeLanguageDetector::new();
        let cases = [
            "SELECT a FROM t WHERE b: 1",
            "std::cout << value",
            "#include <iostream>\nstd::cout << \"hi\" << std::endl",
        ];
        for snippet in &cases {
            assert_eq!(detector.detect(snippet), "Python", "snippet: {snippet}");
        }
    }

    #[test]
    fn test_c_outranks_cpp_for_shared_include() {
        // "#include" appears under both C and C++; with the Python ":" rule
        // out of the way the earlier C entry always claims it
        static C_FAMILY: &[CodeRule] = &[
            CodeRule {
                label: "C",
                keywords: &["#include", "int main(", "printf(", ";"],
            },
            CodeRule {
                label: "C++",
                keywords: &["#include", "std::cout", "using namespace std;", "std::endl"],
            },
        ];
        let detector = CodeLanguageDetector::with_rules(C_FAMILY);
        assert_eq!(detector.detect("#include <stdio.h>"), "C");
        assert_eq!(
            detector.detect("#include <iostream>\nstd::cout << x << std::endl"),
            "C"
        );
    }

    #[test]
    fn test_no_match_message_is_distinct() {
        let detector = CodeLanguageDetector::new();
        let message = detector.detect("plain prose without any code tokens at all");
        assert_eq!(message, MSG_NO_MATCH);
        assert_ne!(message, MSG_TOO_SHORT);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let detector = CodeLanguageDetector::new();
        // "PRINT(" is not "print(" and "#INCLUDE" is not "#include"
        assert_eq!(
            detector.detect("PRINT(UPPERCASE) #INCLUDE"),
            MSG_NO_MATCH
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let detector = CodeLanguageDetector::new();
        let snippet = "function add(a, b) { return a + b; }";
        let first = detector.detect(snippet);
        let second = detector.detect(snippet);
        assert_eq!(first, second);
        // "function " (JavaScript) outranks ";" (C)
        assert_eq!(first, "JavaScript");
    }

    #[test]
    fn test_table_order_is_the_tie_break() {
        static REVERSED: &[CodeRule] = &[
            CodeRule {
                label: "C++",
                keywords: &["#include", "std::cout", "using namespace std;", "std::endl"],
            },
            CodeRule {
                label: "C",
                keywords: &["#include", "int main(", "printf(", ";"],
            },
        ];
        let detector = CodeLanguageDetector::with_rules(REVERSED);
        assert_eq!(detector.detect("#include <stdio.h>"), "C++");
    }
}

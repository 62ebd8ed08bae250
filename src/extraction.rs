//! Best-effort extraction of function signatures from C/C++ source text.
//!
//! This is deliberately a single-pass pattern match, not a parser. A
//! signature is any `<word> <word>(<params>)` directly followed by an
//! opening brace, so only definitions are found; bare declarations ending
//! in `;` never match. The parameter text is everything up to the first
//! `)`, which keeps the scan linear but has known blind spots:
//!
//! - A nested parenthesis in the parameter list (function-pointer types)
//!   makes the brace check fail, so such definitions are skipped.
//! - Qualified return types clip at the last word: `std::any f(...)`
//!   is captured as `any f(...)`.
//! - Multi-word return types keep only their final word
//!   (`unsigned int count(char c)` becomes `int count(char c)`).
//! - Any two words directly before the parenthesis pass for a signature,
//!   so `else if(x > 0) {` (no space before the paren) is a false
//!   positive.
//!
//! Callers rely on these exact semantics; do not swap in a real parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// A function definition head: return-type word, name word, and a
/// parameter list that stops at the first `)`, with the body brace
/// (and any whitespace before it) outside the capture.
static FUNCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\w+\s+\w+\([^)]*\))\s*\{").unwrap());

/// Extract all function-definition signatures from `source`, in order of
/// appearance. Duplicates are preserved; no match yields an empty vector.
pub fn extract_signatures(source: &str) -> Vec<String> {
    FUNCTION_PATTERN
        .captures_iter(source)
        .map(|captures| captures.get(1).unwrap().as_str().to_string())
        .collect()
}

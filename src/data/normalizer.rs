// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Turns a raw corpus sentence into a whitespace-separated
// token stream, following the preprocessing convention of
// yoonkim/CNN_sentence (process_data.py), which most
// sentence-classification corpora downstream of it expect.
//
// Cleaning steps (applied in order):
//   1. Replace every character outside A-Z a-z 0-9 ( ) , ! ? ' `
//      with a single space
//   2. Split contraction suffixes ('s 've n't 're 'd 'll)
//      off their stems with one inserted space
//   3. Pad , ! ( ) ? with surrounding spaces — parens and
//      question marks come out backslash-escaped (" \( "),
//      a quirk of the CNN_sentence replacement strings that
//      is kept for token-level compatibility
//   4. Collapse whitespace runs into a single space
//   5. Trim leading/trailing whitespace
//
// The function is pure and total: deterministic, no side
// effects, never fails on any input.
//
// Regexes are compiled once at first use and reused across
// calls.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything outside the allowed alphabet becomes a space
    static ref DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9(),!?'`]").unwrap();

    /// Contraction suffixes, each split off with one space.
    /// Order mirrors the reference chain; the suffix itself is
    /// kept verbatim.
    static ref CONTRACTIONS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"'s").unwrap(),  " 's"),
        (Regex::new(r"'ve").unwrap(), " 've"),
        (Regex::new(r"n't").unwrap(), " n't"),
        (Regex::new(r"'re").unwrap(), " 're"),
        (Regex::new(r"'d").unwrap(),  " 'd"),
        (Regex::new(r"'ll").unwrap(), " 'll"),
    ];

    /// Punctuation padding. The replacement strings for ( ) ?
    /// carry a literal backslash — see the module header.
    static ref PUNCTUATION: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r",").unwrap(),  " , "),
        (Regex::new(r"!").unwrap(),  " ! "),
        (Regex::new(r"\(").unwrap(), r" \( "),
        (Regex::new(r"\)").unwrap(), r" \) "),
        (Regex::new(r"\?").unwrap(), r" \? "),
    ];

    /// Two or more whitespace characters in a row
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Tokenization/string cleaning for sentence-classification
/// corpora. Returns the cleaned, single-spaced token string.
pub fn clean_str(s: &str) -> String {
    let mut out = DISALLOWED.replace_all(s, " ").into_owned();
    for (re, rep) in CONTRACTIONS.iter().chain(PUNCTUATION.iter()) {
        out = re.replace_all(&out, *rep).into_owned();
    }
    let out = MULTI_SPACE.replace_all(&out, " ");
    out.trim().to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tokenization() {
        // Contraction split, escaped paren padding, bang padding
        assert_eq!(clean_str("It's (great)!"), r"It 's \( great \) !");
    }

    #[test]
    fn test_disallowed_chars_become_spaces() {
        assert_eq!(clean_str("a-b;c"), "a b c");
        assert_eq!(clean_str("naïve"), "na ve");
    }

    #[test]
    fn test_contraction_suffixes() {
        assert_eq!(clean_str("they've"), "they 've");
        assert_eq!(clean_str("don't"), "do n't");
        assert_eq!(clean_str("we're"), "we 're");
        assert_eq!(clean_str("he'd"), "he 'd");
        assert_eq!(clean_str("she'll"), "she 'll");
    }

    #[test]
    fn test_comma_and_question_padding() {
        assert_eq!(clean_str("well, really?"), r"well , really \?");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(clean_str("  too   many\tspaces \n"), "too many spaces");
    }

    #[test]
    fn test_idempotent_after_first_pass() {
        let inputs = [
            "It's (great)!",
            "simply the best film of the year",
            "what were they thinking?",
            "",
        ];
        for s in inputs {
            let once = clean_str(s);
            assert_eq!(clean_str(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_total_over_odd_inputs() {
        // Never panics, whatever the input
        assert_eq!(clean_str(""), "");
        assert_eq!(clean_str("   "), "");
        assert_eq!(clean_str("\u{FFFD}\u{0}"), "");
        assert_eq!(clean_str("100% fresh"), "100 fresh");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical text form used for keyword matching.
///
/// Contract:
/// 1. NFKC fold (fullwidth forms, compatibility characters)
/// 2. drop every character that is neither a word character nor whitespace
/// 3. collapse each whitespace run to a single space
/// 4. trim and lower-case
///
/// Total over any input (empty maps to empty) and idempotent:
/// `normalize_text(normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let stripped = RE_NON_WORD.replace_all(&folded, "");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

/// Spell out the symbols that carry meaning in skill names (`c++`, `c#`)
/// before `normalize_text` strips them. Without this fold those entries
/// would all collapse to the bare token `c` and become unmatchable.
///
/// Applied to vocabulary entries at load time and to input text in the
/// extraction pipeline, so both sides share the same representation.
pub fn fold_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '+' => out.push_str("plus"),
            '#' => out.push_str("sharp"),
            _ => out.push(c),
        }
    }
    out
}

/// Symbol fold + normalization, the representation skill matching runs on.
pub fn normalize_for_matching(text: &str) -> String {
    normalize_text(&fold_symbols(text))
}

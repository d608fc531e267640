/// Canonical marker for a missing or unknown attribute.
pub const MISSING: &str = "-";

const BLANK_MARKERS: [&str; 4] = ["", "nan", "NaN", "-"];
const DASH_VARIANTS: [char; 3] = ['\u{2014}', '\u{2013}', '\u{2212}'];

/// Matching key for free-text labels: dash variants unified, whitespace
/// collapsed, case folded. Blank input maps to [`MISSING`].
pub fn norm_key(input: &str) -> String {
    let trimmed = input.trim();
    if BLANK_MARKERS.contains(&trimmed) {
        return MISSING.to_string();
    }

    trimmed
        .replace(DASH_VARIANTS, "-")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// Trims a raw field, returning `None` when it carries no value.
pub fn clean_field(input: Option<&str>) -> Option<&str> {
    let trimmed = input?.trim();
    if BLANK_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

/// Uppercases the first letter of every word and lowercases the rest.
/// A word starts after any non-alphabetic character, so `"ac/dc"` becomes
/// `"Ac/Dc"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}

/// Splits a delimiter-separated field into trimmed, non-empty tokens.
pub fn split_list(input: &str, delimiter: char) -> impl Iterator<Item = &str> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

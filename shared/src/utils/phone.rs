//! Phone number utility functions
//!
//! Stored phone numbers vary widely in format: with or without a leading
//! zero, with or without the international calling code. This module
//! produces the set of plausible alternative representations for a number
//! so loosely-formatted stored values can still be matched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Calling codes this deployment recognizes when rewriting between
/// international and local formats. The first entry is the default used
/// when guessing an international form for a bare local number.
pub const KNOWN_CALLING_CODES: &[&str] = &["963", "961", "962", "964"];

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Normalize a phone identifier for use as a map key (trim whitespace).
pub fn normalize_phone(phone: &str) -> String {
    phone.trim().to_string()
}

/// Check whether a string is composed solely of ASCII digits
pub fn is_all_digits(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}

/// Expand a phone number into its plausible alternative representations.
///
/// This is a best-effort heuristic, not an E.164 parser; it exists to
/// maximize the chance of matching a loosely-formatted stored value.
/// Two accounts storing ambiguous local/international forms of the same
/// digits can both match the expansion, so a wrong-record match is a
/// known, accepted risk of callers using this for lookups.
///
/// Rules applied to the trimmed input:
/// - `+<cc><local>`: the bare digits, plus `0<local>` when `<cc>` is a
///   recognized calling code.
/// - `0<local>`: the digits without the zero, plus international guesses
///   with the default calling code.
/// - bare digits starting with a recognized calling code: the
///   `+`-prefixed form plus the `0<local>` rewrite.
/// - any other bare digits: a `0`-prefixed and a `+<default cc>` guess.
///
/// The input itself is always part of the returned set; order is
/// deterministic and duplicates are removed.
///
/// # Examples
///
/// ```
/// use cv_shared::utils::phone::phone_variants;
///
/// let variants = phone_variants("+963912345678");
/// assert!(variants.contains(&"963912345678".to_string()));
/// assert!(variants.contains(&"0912345678".to_string()));
/// ```
pub fn phone_variants(phone: &str) -> Vec<String> {
    let input = phone.trim();
    let mut variants: Vec<String> = Vec::new();
    push_unique(&mut variants, input.to_string());

    if let Some(stripped) = input.strip_prefix('+') {
        push_unique(&mut variants, stripped.to_string());
        if is_all_digits(stripped) {
            if let Some((_, local)) = split_calling_code(stripped) {
                push_unique(&mut variants, format!("0{}", local));
            }
        }
    } else if let Some(local) = input.strip_prefix('0') {
        if is_all_digits(input) {
            let default_code = KNOWN_CALLING_CODES[0];
            push_unique(&mut variants, local.to_string());
            push_unique(&mut variants, format!("{}{}", default_code, local));
            push_unique(&mut variants, format!("+{}{}", default_code, local));
        }
    } else if is_all_digits(input) {
        if let Some((_, local)) = split_calling_code(input) {
            push_unique(&mut variants, format!("+{}", input));
            push_unique(&mut variants, format!("0{}", local));
        } else {
            let default_code = KNOWN_CALLING_CODES[0];
            push_unique(&mut variants, format!("0{}", input));
            push_unique(&mut variants, format!("+{}{}", default_code, input));
        }
    }

    variants
}

/// Mask a phone number for logging (show only the last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}

/// Split `digits` into a recognized calling code and the remaining local
/// part. Returns `None` when no known code prefixes the digits or the
/// remainder would be empty.
fn split_calling_code(digits: &str) -> Option<(&str, &str)> {
    KNOWN_CALLING_CODES.iter().find_map(|code| {
        digits
            .strip_prefix(code)
            .filter(|local| !local.is_empty())
            .map(|local| (*code, local))
    })
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_phone("  0912345678 "), "0912345678");
    }

    #[test]
    fn test_international_input_expands_to_local() {
        let variants = phone_variants("+963912345678");
        assert!(variants.contains(&"+963912345678".to_string()));
        assert!(variants.contains(&"963912345678".to_string()));
        assert!(variants.contains(&"0912345678".to_string()));
    }

    #[test]
    fn test_zero_prefixed_input_expands_to_international() {
        let variants = phone_variants("0912345678");
        assert!(variants.contains(&"912345678".to_string()));
        assert!(variants.contains(&"+963912345678".to_string()));
        assert!(variants.contains(&"963912345678".to_string()));
    }

    #[test]
    fn test_bare_digits_with_calling_code_prefix() {
        let variants = phone_variants("963912345678");
        assert!(variants.contains(&"+963912345678".to_string()));
        assert!(variants.contains(&"0912345678".to_string()));
    }

    #[test]
    fn test_bare_digits_without_prefix_guesses_both_forms() {
        let variants = phone_variants("712345678");
        assert!(variants.contains(&"712345678".to_string()));
        assert!(variants.contains(&"0712345678".to_string()));
        assert!(variants.contains(&"+963712345678".to_string()));
    }

    #[test]
    fn test_unknown_calling_code_keeps_stripped_form_only() {
        let variants = phone_variants("+4915112345678");
        assert!(variants.contains(&"4915112345678".to_string()));
        // No local rewrite for unrecognized codes
        assert!(!variants.iter().any(|v| v.starts_with('0')));
    }

    #[test]
    fn test_no_duplicates_and_input_first() {
        let variants = phone_variants("0912345678");
        assert_eq!(variants[0], "0912345678");
        let unique: std::collections::HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn test_non_numeric_input_passes_through() {
        let variants = phone_variants("not-a-number");
        assert_eq!(variants, vec!["not-a-number".to_string()]);
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+963912345678"), "***5678");
        assert_eq!(mask_phone("0912345678"), "***5678");
        assert_eq!(mask_phone("123"), "***");
    }
}

// src/core/domain.rs

//! Input handling shared by every check: turning whatever the user typed
//! into a bare host name, deciding whether it looks like a domain at all,
//! the rolling hash that seeds the simulated results, and the trusted
//! domain classifier.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Well-known domains that always receive the favourable simulated result.
/// Subdomains of these entries are trusted as well.
const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "github.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "cloudflare.com",
    "mozilla.org",
    "w3.org",
    "stackoverflow.com",
    "wikipedia.org",
];

/// Public-sector suffixes that are trusted regardless of the label in front.
const TRUSTED_SUFFIXES: &[&str] = &[".edu", ".gov"];

// Labels of letters, digits and hyphens joined by dots, ending in an alphabetic TLD.
static RE_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:[a-z0-9-]+\.)+[a-z]{2,}$").unwrap());

/// Reduces raw input to a bare, lower-case host name.
///
/// Trims whitespace, lower-cases, removes an `http://` or `https://` scheme and
/// a leading `www.`, then cuts everything from the first `/` or `?`. Never
/// fails; garbage in gives a (possibly empty) string out. The pass is repeated
/// until the string stops changing so that cleaning twice is the same as
/// cleaning once, even for inputs like `www.www.example.com`.
pub fn clean_domain(input: &str) -> String {
    let mut current = clean_once(input);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let host = match without_www.find(['/', '?']) {
        Some(end) => &without_www[..end],
        None => without_www,
    };
    host.to_string()
}

/// Returns `true` when the input, once cleaned, is shaped like a domain name.
///
/// This is the caller's gate: the assessment itself accepts any string.
pub fn is_valid_domain(input: &str) -> bool {
    let cleaned = clean_domain(input);
    let valid = RE_DOMAIN.is_match(&cleaned);
    debug!(input, cleaned = %cleaned, valid, "Validated domain input.");
    valid
}

/// 32-bit rolling hash: `acc = acc * 31 + unit` with signed wraparound,
/// returning the absolute value of the final accumulator.
///
/// Characters are folded in as UTF-16 code units, which for any domain-shaped
/// input are the plain code points. The result is a `u32` because the
/// absolute value of `i32::MIN` does not fit in an `i32`.
pub fn simple_hash(input: &str) -> u32 {
    let acc = input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)));
    acc.unsigned_abs()
}

/// Whether a domain belongs to the fixed allow-list, is a subdomain of an
/// allow-listed entry, or sits under `.edu` or `.gov`.
pub fn is_trusted_domain(domain: &str) -> bool {
    let domain = domain.strip_prefix("www.").unwrap_or(domain);

    if TRUSTED_SUFFIXES.iter().any(|suffix| domain.ends_with(suffix)) {
        return true;
    }

    TRUSTED_DOMAINS.iter().any(|trusted| {
        domain == *trusted
            || domain
                .strip_suffix(trusted)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clean_domain_strips_scheme_www_path_and_query() {
        assert_eq!(clean_domain("HTTPS://WWW.Google.com/path?x=1"), "google.com");
        assert_eq!(clean_domain("  http://example.org  "), "example.org");
        assert_eq!(clean_domain("example.org?utm=1"), "example.org");
        assert_eq!(clean_domain("docs.github.com/en/actions"), "docs.github.com");
    }

    #[test]
    fn clean_domain_never_fails_on_odd_input() {
        assert_eq!(clean_domain(""), "");
        assert_eq!(clean_domain("   "), "");
        assert_eq!(clean_domain("https://"), "");
        assert_eq!(clean_domain("/just/a/path"), "");
    }

    #[test]
    fn clean_domain_reaches_a_fixed_point() {
        assert_eq!(clean_domain("www.www.example.com"), "example.com");
        assert_eq!(clean_domain("https://https://example.com"), "https:");
    }

    #[test]
    fn valid_domains_are_accepted() {
        assert!(is_valid_domain("google.com"));
        assert!(is_valid_domain("HTTPS://WWW.Google.com/path?x=1"));
        assert!(is_valid_domain("my-site.co.uk"));
        assert!(is_valid_domain("a1.example.io"));
    }

    #[test]
    fn malformed_domains_are_rejected() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain("example.123"));
        assert!(!is_valid_domain("exa mple.com"));
        assert!(!is_valid_domain("example..com"));
        assert!(!is_valid_domain(".com"));
    }

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(simple_hash(""), 0);
        assert_eq!(simple_hash("a"), 97);
        assert_eq!(simple_hash("google.com"), 1_536_293_812);
        assert_eq!(simple_hash("example.com"), 1_944_013_059);
        assert_eq!(simple_hash("a.com"), 91_050_612);
    }

    #[test]
    fn hash_takes_the_absolute_value_of_negative_accumulators() {
        // "abc.xyz" overflows into the negative range before the final abs.
        assert_eq!(simple_hash("abc.xyz"), 1_207_881_203);
    }

    #[test]
    fn trusted_domains_include_allow_list_and_subdomains() {
        assert!(is_trusted_domain("google.com"));
        assert!(is_trusted_domain("www.github.com"));
        assert!(is_trusted_domain("docs.github.com"));
        assert!(is_trusted_domain("mit.edu"));
        assert!(is_trusted_domain("data.gov"));
    }

    #[test]
    fn lookalike_domains_are_not_trusted() {
        assert!(!is_trusted_domain("notgoogle.com"));
        assert!(!is_trusted_domain("google.com.evil.net"));
        assert!(!is_trusted_domain("education.com"));
        assert!(!is_trusted_domain("example.com"));
        assert!(!is_trusted_domain(""));
    }

    proptest! {
        #[test]
        fn cleaning_is_idempotent(input in ".*") {
            let once = clean_domain(&input);
            prop_assert_eq!(clean_domain(&once), once);
        }

        #[test]
        fn cleaned_output_has_no_scheme_www_or_path(input in "(https?://)?(www\\.)?[a-zA-Z0-9.-]{0,20}(/[a-z]{0,5})?(\\?[a-z=]{0,5})?") {
            let cleaned = clean_domain(&input);
            prop_assert!(!cleaned.starts_with("http://"));
            prop_assert!(!cleaned.starts_with("https://"));
            prop_assert!(!cleaned.starts_with("www."));
            prop_assert!(!cleaned.contains('/'));
            prop_assert!(!cleaned.contains('?'));
        }
    }
}

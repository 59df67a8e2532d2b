//! Permissive email format check used to gate the airdrop form.
//!
//! This is a UX check only: a local part, a single `@`, and a domain that
//! contains a dot, with no whitespace anywhere. It is not RFC 5322.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("[email] pattern failed to compile: {e}");
                None
            }
        })
        .as_ref()
}

/// Returns `true` when `email` looks like `local@domain.tld`.
///
/// # Example
/// ```
/// use strutmaster::email::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("a@bco"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("strut.master@meme.coin.io"));
        assert!(is_valid_email("x+airdrop@sub.domain.org"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a@localhost"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn permissive_about_odd_but_dotted_domains() {
        // Not RFC compliant, only a UX gate.
        assert!(is_valid_email("a@b..co"));
        assert!(is_valid_email("a@-b.c"));
    }
}

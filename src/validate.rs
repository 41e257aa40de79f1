use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Plausibility check only; deliverability is the upstream services' problem.
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_plausible_email("owner@roanokeacpros.com"));
        assert!(is_plausible_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_implausible_addresses() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("two words@example.com"));
        assert!(!is_plausible_email("missing@tld"));
    }
}

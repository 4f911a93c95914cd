/// Shared input validation for the public lead-capture forms and signup.
pub fn is_valid_email(email: &str) -> bool {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    )
    .map(|re| re.is_match(email))
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("no@tld@twice.com"));
        assert!(!is_valid_email(""));
    }
}

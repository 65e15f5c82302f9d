/// Avatar URL for an email address: base URL plus the lowercase hex MD5
/// digest of the normalized address. Only used to point clients at an
/// external avatar service, carries no security weight.
pub fn avatar_url(base_url: &str, email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    format!("{}{:x}", base_url, md5::compute(normalized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        let url = avatar_url("https://www.gravatar.com/avatar/", "ada@example.com");
        assert_eq!(
            url,
            "https://www.gravatar.com/avatar/3e3417d7ef77d5932a6734b916515ed5"
        );
    }

    #[test]
    fn case_and_whitespace_fold_to_the_same_url() {
        let canonical = avatar_url("https://avatars.test/", "grace@example.com");
        assert_eq!(avatar_url("https://avatars.test/", "  Grace@Example.COM "), canonical);
        assert!(canonical.ends_with("9f528ceb410182ebd9d490172948f11f"));
    }

    #[test]
    fn distinct_emails_get_distinct_digests() {
        let a = avatar_url("https://avatars.test/", "ada@example.com");
        let b = avatar_url("https://avatars.test/", "grace@example.com");
        assert_ne!(a, b);
    }
}

use sha2::Digest;
use sha2::Sha256;

/// Derive the avatar URL for an email address.
///
/// Gravatar convention: SHA-256 of the trimmed, lowercased address,
/// hex-encoded. Pure function, no network call; the avatar service resolves
/// the hash when the client fetches the image. Parameters: 200px, PG
/// rating, "mystery person" fallback.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(gravatar_url("a@x.com"), gravatar_url("a@x.com"));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(gravatar_url("A@X.com "), gravatar_url("a@x.com"));
    }

    #[test]
    fn test_url_shape() {
        let url = gravatar_url("a@x.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));

        let hash = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .split('?')
            .next()
            .unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_emails_distinct_avatars() {
        assert_ne!(gravatar_url("a@x.com"), gravatar_url("b@x.com"));
    }
}

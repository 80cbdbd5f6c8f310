use crate::error::ValidationError;
use url::Url;

/// Checks that `candidate` is an absolute URL and returns it trimmed.
///
/// The input is parsed with WHATWG URL semantics. On top of that the URL
/// must spell out an authority (`scheme://host...`) with a non-empty host,
/// which rules out forms like `mailto:a@b.c` or `ftp:/bad` that a lenient
/// parser would accept. The returned slice is the trimmed input; case and
/// percent-encoding are preserved exactly as entered.
pub fn validate_url(candidate: &str) -> Result<&str, ValidationError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let parsed = Url::parse(trimmed).map_err(|e| ValidationError::MalformedUrl {
        reason: e.to_string(),
    })?;

    let has_authority = trimmed
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"));
    if !has_authority {
        return Err(ValidationError::MalformedUrl {
            reason: format!("'{}' URL has no authority component", parsed.scheme()),
        });
    }

    if !parsed.host_str().is_some_and(|host| !host.is_empty()) {
        return Err(ValidationError::MalformedUrl {
            reason: "URL has an empty host".to_string(),
        });
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_malformed(candidate: &str) -> bool {
        matches!(
            validate_url(candidate),
            Err(ValidationError::MalformedUrl { .. })
        )
    }

    #[test]
    fn valid_urls() {
        assert_eq!(validate_url("http://example.com"), Ok("http://example.com"));
        assert_eq!(validate_url("https://example.com"), Ok("https://example.com"));
        assert_eq!(
            validate_url("https://example.com/path?query=1#frag"),
            Ok("https://example.com/path?query=1#frag")
        );
        assert_eq!(validate_url("http://localhost:8080"), Ok("http://localhost:8080"));
        assert_eq!(
            validate_url("ftp://files.example.org/a.txt"),
            Ok("ftp://files.example.org/a.txt")
        );
        assert_eq!(
            validate_url("https://user:pw@[::1]:443/"),
            Ok("https://user:pw@[::1]:443/")
        );
    }

    #[test]
    fn returns_trimmed_input_without_normalising() {
        assert_eq!(
            validate_url("  HTTPS://Example.COM/A%2fB \n"),
            Ok("HTTPS://Example.COM/A%2fB")
        );
        assert_eq!(validate_url("\thttps://a.com"), Ok("https://a.com"));
    }

    #[test]
    fn empty_input() {
        for candidate in ["", " ", "\t\n", "\u{3000}"] {
            assert_eq!(validate_url(candidate), Err(ValidationError::EmptyInput));
        }
    }

    #[test]
    fn not_a_url() {
        assert!(is_malformed("not a url"));
        assert!(is_malformed("www.example.com"));
        assert!(is_malformed("example.com/page"));
        assert!(is_malformed("/relative/path"));
    }

    #[test]
    fn missing_authority() {
        assert!(is_malformed("ftp:/bad"));
        assert!(is_malformed("mailto:someone@example.com"));
        assert!(is_malformed("localhost:8080"));
        assert!(is_malformed("https:example.com"));
    }

    #[test]
    fn empty_host() {
        assert!(is_malformed("http://"));
        assert!(is_malformed("file:///etc/passwd"));
    }
}

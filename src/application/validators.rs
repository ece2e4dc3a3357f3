/// Syntactic email check: a single `@` separating a non-empty local part
/// from a non-empty domain, no whitespace anywhere, and the domain must
/// contain an interior dot ("user@localhost" is rejected).
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with at least one character on each side.
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}

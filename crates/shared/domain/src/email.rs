//! Email address normalization.

/// Normalize an email address by lower-casing its domain part.
///
/// Surrounding whitespace is trimmed and everything after the last `@` is
/// lower-cased. The local part keeps its case, since mailbox names may be
/// case-sensitive. An address without `@` is returned untouched.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

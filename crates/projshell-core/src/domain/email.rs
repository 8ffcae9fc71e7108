//! Syntactic email format check.
//!
//! The check is purely lexical: one or more of `[A-Za-z0-9._%+-]`, an `@`,
//! one or more of `[A-Za-z0-9.-]`, a literal `.`, then at least two ASCII
//! letters, anchored at both ends. It does not look at deliverability,
//! quoted local parts, IP-literal domains or internationalized names.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

/// The fixed email pattern.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";

// Compiled once per process; shared read-only across threads.
static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Check `email` against [`EMAIL_PATTERN`], surfacing pattern errors.
///
/// Returns `Ok(true)` only when the entire string matches.
pub fn check_format(email: &str) -> Result<bool, DomainError> {
    match EMAIL_REGEX.as_ref() {
        Ok(re) => Ok(re.is_match(email)),
        Err(e) => Err(DomainError::InvalidPattern {
            pattern: EMAIL_PATTERN.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// Check `email` against [`EMAIL_PATTERN`].
///
/// A pattern that fails to compile reads as "no match"; use
/// [`check_format`] to tell the two apart.
pub fn is_valid_format(email: &str) -> bool {
    check_format(email).unwrap_or_else(|e| {
        tracing::error!(error = %e, "email pattern unusable, treating as no match");
        false
    })
}

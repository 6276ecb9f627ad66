//! # Versioning Policy
//!
//! Pure functions deciding whether a conditional write is accepted and what
//! version it produces. Nothing in here touches the store.
//!
//! ## Concurrency Tokens
//!
//! A widget's version is exposed to clients as a quoted decimal (`3` ↔ `"3"`),
//! in the `ETag` response header and the `If-Match` request header.
//!
//! ## Match Modes
//!
//! - [`MatchMode::Strict`]: the token is decoded to an integer and compared
//!   numerically. `"3"`, `3` and `W/"3"` all match version 3.
//! - [`MatchMode::Loose`]: the raw header is compared, ignoring ASCII case,
//!   against the unquoted decimal. Only `3` matches version 3; `"3"` does not.
//!   This mode exists for clients of the older update route.

use crate::error::{Result, WidgetzError};
use crate::model::Version;

/// Version assigned by an accepted save. An absent version counts as 0.
pub fn next_version(current: Option<Version>) -> Version {
    current.unwrap_or(0) + 1
}

pub fn matches(expected: Version, actual: Version) -> bool {
    expected == actual
}

pub fn format_token(version: Version) -> String {
    format!("\"{}\"", version)
}

pub fn parse_token(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let opaque = trimmed.strip_prefix("W/").unwrap_or(trimmed);
    let digits = opaque
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(opaque);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WidgetzError::InvalidToken(raw.to_string()));
    }
    digits
        .parse()
        .map_err(|_| WidgetzError::InvalidToken(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Strict,
    Loose,
}

/// The precondition a client attached to an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfMatch {
    raw: Option<String>,
    mode: MatchMode,
}

impl IfMatch {
    pub fn strict(raw: Option<impl Into<String>>) -> Self {
        Self {
            raw: raw.map(Into::into),
            mode: MatchMode::Strict,
        }
    }

    pub fn loose(raw: Option<impl Into<String>>) -> Self {
        Self {
            raw: raw.map(Into::into),
            mode: MatchMode::Loose,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Checks the precondition against the stored version.
    ///
    /// Returns `Conflict` on a mismatch, `MissingPrecondition` when no token
    /// was sent, and `InvalidToken` when a strict token cannot be decoded.
    pub fn check(&self, actual: Version) -> Result<()> {
        let raw = self
            .raw
            .as_deref()
            .ok_or(WidgetzError::MissingPrecondition)?;

        let accepted = match self.mode {
            MatchMode::Strict => matches(parse_token(raw)?, actual),
            MatchMode::Loose => raw.eq_ignore_ascii_case(&actual.to_string()),
        };

        if accepted {
            Ok(())
        } else {
            Err(WidgetzError::Conflict {
                expected: raw.to_string(),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_save_yields_one() {
        assert_eq!(next_version(None), 1);
        assert_eq!(next_version(Some(0)), 1);
    }

    #[test]
    fn next_version_increments_by_one() {
        assert_eq!(next_version(Some(1)), 2);
        assert_eq!(next_version(Some(41)), 42);
    }

    #[test]
    fn matches_is_exact_equality() {
        assert!(matches(3, 3));
        assert!(!matches(2, 3));
        assert!(!matches(4, 3));
    }

    #[test]
    fn token_is_quoted_decimal() {
        assert_eq!(format_token(3), "\"3\"");
    }

    #[test]
    fn parses_quoted_bare_and_weak_tokens() {
        assert_eq!(parse_token("\"3\"").unwrap(), 3);
        assert_eq!(parse_token("3").unwrap(), 3);
        assert_eq!(parse_token(" W/\"12\" ").unwrap(), 12);
    }

    #[test]
    fn rejects_garbage_tokens() {
        for raw in ["", "\"\"", "abc", "\"3", "-1", "*", "\"1\", \"2\""] {
            assert!(
                matches!(parse_token(raw), Err(WidgetzError::InvalidToken(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn strict_match_compares_decoded_value() {
        assert!(IfMatch::strict(Some("\"2\"")).check(2).is_ok());
        assert!(IfMatch::strict(Some("2")).check(2).is_ok());
        assert!(matches!(
            IfMatch::strict(Some("\"1\"")).check(2),
            Err(WidgetzError::Conflict { actual: 2, .. })
        ));
    }

    #[test]
    fn strict_match_reports_invalid_token() {
        assert!(matches!(
            IfMatch::strict(Some("two")).check(2),
            Err(WidgetzError::InvalidToken(_))
        ));
    }

    #[test]
    fn loose_match_compares_raw_text() {
        assert!(IfMatch::loose(Some("2")).check(2).is_ok());
        assert!(matches!(
            IfMatch::loose(Some("\"2\"")).check(2),
            Err(WidgetzError::Conflict { .. })
        ));
        assert!(matches!(
            IfMatch::loose(Some("two")).check(2),
            Err(WidgetzError::Conflict { .. })
        ));
    }

    #[test]
    fn missing_token_is_reported_in_both_modes() {
        assert!(matches!(
            IfMatch::strict(None::<&str>).check(1),
            Err(WidgetzError::MissingPrecondition)
        ));
        assert!(matches!(
            IfMatch::loose(None::<&str>).check(1),
            Err(WidgetzError::MissingPrecondition)
        ));
    }
}

//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// An upstream StopPoint identifier, e.g. `940GZZLUBST` for Baker Street.
///
/// Codes are spliced into request paths, so this type guarantees they are
/// non-empty and contain no whitespace or URL delimiters.
///
/// # Examples
///
/// ```
/// use tube_server::domain::StationCode;
///
/// let bst = StationCode::parse("940GZZLUBST").unwrap();
/// assert_eq!(bst.as_str(), "940GZZLUBST");
///
/// // Path delimiters are rejected
/// assert!(StationCode::parse("940G/ZZ").is_err());
///
/// // Empty is rejected
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be non-empty and
    /// free of whitespace, `/`, `?` and `#`.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(InvalidStationCode {
                reason: "must not contain whitespace or URL delimiters",
            });
        }

        Ok(StationCode(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use crate::error::Error;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Serialize, Serializer};

/// A single dot-delimited component of a prerelease or build sequence.
///
/// An identifier is either purely numeric (`0`, `42`) or alphanumeric
/// (`beta`, `rc-1`, `x86-64`). Numeric identifiers forbid leading zeros
/// unless the literal value is `0`. Alphanumeric identifiers may use any
/// mix of ASCII letters, digits, and hyphens, with at least one non-digit.
///
/// Identifiers order by precedence: numerics compare by value, alphanumerics
/// compare lexically, and a numeric is always less than an alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A non-negative integer identifier, like the `1` in `beta.1`.
    Numeric(u64),
    /// A textual identifier, like the `beta` in `beta.1`.
    AlphaNumeric(String),
}

impl Identifier {
    /// Returns true for strings made only of `[0-9A-Za-z-]` characters.
    pub(crate) fn chars_are_valid(s: &str) -> bool {
        !s.is_empty()
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    }

    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl FromStr for Identifier {
    type Err = Error;

    /// Parses a single identifier against the identifier grammar.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidIdentifier`] if the string is empty,
    /// contains characters outside `[0-9A-Za-z-]`, or is a numeric
    /// identifier with a leading zero (or one too large to represent).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::chars_are_valid(s) {
            return Err(Error::invalid_identifier(s));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(Error::invalid_identifier(s));
            }
            let value = s.parse().map_err(|_| Error::invalid_identifier(s))?;
            Ok(Identifier::Numeric(value))
        } else {
            Ok(Identifier::AlphaNumeric(s.to_owned()))
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::AlphaNumeric(text) => f.write_str(text),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use Identifier::*;
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.cmp(b),
            (AlphaNumeric(a), AlphaNumeric(b)) => a.cmp(b),
            // a numeric identifier always has lower precedence
            (Numeric(_), AlphaNumeric(_)) => Ordering::Less,
            (AlphaNumeric(_), Numeric(_)) => Ordering::Greater,
        }
    }
}

impl Serialize for Identifier {
    /// Numerics serialize as JSON numbers, alphanumerics as JSON strings,
    /// so a prerelease sequence renders as e.g. `["beta", 1]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identifier::Numeric(value) => serializer.serialize_u64(*value),
            Identifier::AlphaNumeric(text) => serializer.serialize_str(text),
        }
    }
}

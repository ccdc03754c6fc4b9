/// Errors returned by the parsing and increment APIs.
///
/// Every variant carries the offending input so messages can name it verbatim.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input, after coercion, does not match the strict semver grammar.
    #[error("Value \"{input}\" is not a valid semver version")]
    InvalidVersion {
        /// The rejected (post-coercion) version string.
        input: String,
    },

    /// A supplied prerelease identifier violates the identifier grammar.
    #[error("Identifier \"{identifier}\" is not a valid prerelease identifier")]
    InvalidIdentifier {
        /// The rejected identifier string.
        identifier: String,
    },

    /// A release-type name is not one of the eight defined release types.
    #[error("\"{value}\" is not a valid release type")]
    InvalidReleaseType {
        /// The rejected release-type string.
        value: String,
    },

    /// An identifier-base value could not be resolved to `0`, `1`, or a boolean.
    #[error("\"{value}\" is not a valid identifier base (expected \"0\", \"1\", \"true\", or \"false\")")]
    InvalidIdentifierBase {
        /// The rejected identifier-base string.
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid_version(input: impl Into<String>) -> Self {
        Error::InvalidVersion {
            input: input.into(),
        }
    }

    pub(crate) fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Error::InvalidIdentifier {
            identifier: identifier.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_message_names_input() {
        let err = Error::invalid_version("not-a-version");
        assert_eq!(
            err.to_string(),
            "Value \"not-a-version\" is not a valid semver version"
        );
    }

    #[test]
    fn test_invalid_identifier_message_names_identifier() {
        let err = Error::invalid_identifier("beta!");
        assert_eq!(
            err.to_string(),
            "Identifier \"beta!\" is not a valid prerelease identifier"
        );
    }
}

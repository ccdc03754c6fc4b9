use crate::{error::Error, identifier::Identifier};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// An immutable, decomposed semantic version.
///
/// A `Version` is produced by [`Version::parse`] (usually after
/// [`coerce`](crate::coerce) has normalized a loose input) and never mutated:
/// every transformation, like [`increment`](Version::increment), returns a
/// freshly constructed value.
///
/// Versions are totally ordered by semver precedence. Build metadata carries
/// no precedence weight, so it is excluded from both ordering and equality:
/// `1.0.0+linux` and `1.0.0+macos` compare as equal.
///
/// # Examples
///
/// ```
/// use semver_next::Version;
///
/// let version = Version::parse("1.2.3-beta.1+build.5").unwrap();
/// assert_eq!(1, version.major());
/// assert_eq!(2, version.minor());
/// assert_eq!(3, version.patch());
/// assert_eq!(2, version.prerelease().len());
/// assert!(version.is_prerelease());
/// assert_eq!("1.2.3-beta.1+build.5", version.to_string());
///
/// let release = Version::parse("1.2.3").unwrap();
/// assert!(version < release);
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    pub(crate) fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    pub(crate) fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Parses a strict semver string into a [`Version`].
    ///
    /// The full grammar is `MAJOR.MINOR.PATCH[-prerelease][+build]`, where
    /// the numeric components forbid leading zeros, prerelease is a
    /// dot-separated identifier sequence (numeric identifiers forbid leading
    /// zeros unless exactly `0`), and build identifiers share the lexical
    /// grammar but permit leading zeros since they carry no precedence.
    ///
    /// Unlike coercion, parsing accepts no partial matches: any unmatched
    /// leading or trailing text rejects the whole string.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidVersion`] naming the input when it does
    /// not match the grammar.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse()
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease identifier sequence. Empty for a release version.
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// The build metadata identifier sequence. Never affects precedence.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Whether this version has any prerelease identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::invalid_version(s);

        // build metadata follows the first `+`; prerelease follows the first
        // `-` before that. the numeric triple itself can contain neither.
        let (rest, build) = match s.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (s, None),
        };
        let (triple, prerelease) = match rest.split_once('-') {
            Some((triple, prerelease)) => (triple, Some(prerelease)),
            None => (rest, None),
        };

        let mut components = triple.split('.');
        let major = numeric_component(components.next(), err)?;
        let minor = numeric_component(components.next(), err)?;
        let patch = numeric_component(components.next(), err)?;
        if components.next().is_some() {
            return Err(err());
        }

        let mut version = Version::new(major, minor, patch);

        if let Some(prerelease) = prerelease {
            version.prerelease = prerelease
                .split('.')
                .map(|identifier| identifier.parse().map_err(|_| err()))
                .collect::<Result<_, _>>()?;
        }

        if let Some(build) = build {
            version.build = build
                .split('.')
                .map(|identifier| {
                    if Identifier::chars_are_valid(identifier) {
                        Ok(identifier.to_owned())
                    } else {
                        Err(err())
                    }
                })
                .collect::<Result<_, _>>()?;
        }

        Ok(version)
    }
}

/// Parses one of the `MAJOR`/`MINOR`/`PATCH` components: digits only, no
/// leading zero unless exactly `0`, and within `u64` range.
fn numeric_component(component: Option<&str>, err: impl Fn() -> Error) -> Result<u64, Error> {
    let component = component.ok_or_else(&err)?;
    if component.is_empty()
        || !component.bytes().all(|b| b.is_ascii_digit())
        || (component.len() > 1 && component.starts_with('0'))
    {
        return Err(err());
    }
    component.parse().map_err(|_| err())
}

impl Display for Version {
    /// Renders the canonical form: minimal-width components, `-` before the
    /// prerelease sequence, `+` before the build sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (position, identifier) in self.prerelease.iter().enumerate() {
            f.write_str(if position == 0 { "-" } else { "." })?;
            write!(f, "{}", identifier)?;
        }
        for (position, identifier) in self.build.iter().enumerate() {
            f.write_str(if position == 0 { "+" } else { "." })?;
            f.write_str(identifier)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Total order per semver precedence.
    ///
    /// The numeric triple compares lexicographically first. On a tie, a
    /// release outranks any prerelease of the same triple; two prerelease
    /// sequences compare identifier-by-identifier, with a shorter sequence
    /// that prefixes a longer one comparing as less. Build metadata never
    /// participates.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                _ => self.prerelease.cmp(&other.prerelease),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_parse_ok() {
        let args = [
            ("0.0.0", (0, 0, 0)),
            ("1.2.3", (1, 2, 3)),
            ("10.20.30", (10, 20, 30)),
            ("0.0.4", (0, 0, 4)),
            ("18446744073709551615.0.0", (u64::MAX, 0, 0)),
        ];

        for (input, (major, minor, patch)) in args {
            let version = Version::parse(input).unwrap();
            assert_eq!(major, version.major());
            assert_eq!(minor, version.minor());
            assert_eq!(patch, version.patch());
            assert!(!version.is_prerelease());
        }
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let version = Version::parse("1.2.3-beta.1+build.007").unwrap();
        assert_eq!(
            &[
                Identifier::AlphaNumeric("beta".to_owned()),
                Identifier::Numeric(1)
            ],
            version.prerelease()
        );
        assert_eq!(&["build".to_owned(), "007".to_owned()], version.build());
        assert!(version.is_prerelease());
    }

    #[test]
    fn test_parse_rejects() {
        let args = [
            "",
            "1",
            "1.2",
            "1.2.3.4",
            "01.2.3",  // leading zero
            "1.02.3",  // leading zero
            "1.2.03",  // leading zero
            "v1.2.3",  // coercion's job, not the parser's
            " 1.2.3",
            "1.2.3 ",
            "1.2.3-",        // empty prerelease
            "1.2.3-beta..1", // empty identifier
            "1.2.3-01",      // numeric identifier leading zero
            "1.2.3-beta!",
            "1.2.3+",  // empty build
            "1.2.3+a_b",
            "-1.2.3",
            "1.-2.3",
            "18446744073709551616.0.0", // u64 overflow, grammar-valid
        ];

        for input in args {
            assert_eq!(
                Err(Error::invalid_version(input)),
                Version::parse(input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_allows_leading_zero_numerics() {
        // build identifiers carry no precedence, so `01` is fine there
        let version = Version::parse("1.2.3+01.0a").unwrap();
        assert_eq!(&["01".to_owned(), "0a".to_owned()], version.build());
    }

    #[test]
    fn test_canonical_round_trip() {
        let args = [
            "0.0.0",
            "1.2.3",
            "1.2.3-beta.1",
            "1.2.3-alpha.beta.rc",
            "1.2.3+build",
            "1.2.3-rc.1+build.5",
        ];

        for input in args {
            let version = Version::parse(input).unwrap();
            assert_eq!(input, version.to_string());
            assert_eq!(version, Version::parse(&version.to_string()).unwrap());
        }
    }

    #[test]
    fn test_precedence_ladder() {
        // strictly ascending, per the semver.org worked example
        let ladder = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "2.0.0",
            "2.1.0",
            "2.1.1",
        ];

        let versions: Vec<Version> = ladder.iter().map(|s| Version::parse(s).unwrap()).collect();

        for (lesser, greater) in versions.iter().tuple_windows() {
            assert!(lesser < greater, "{lesser} should precede {greater}");
        }
    }

    #[test]
    fn test_total_order_properties() {
        let versions: Vec<Version> = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0",
            "1.0.1",
            "2.0.0-0",
        ]
        .iter()
        .map(|s| Version::parse(s).unwrap())
        .collect();

        for a in &versions {
            assert_eq!(Ordering::Equal, a.cmp(a));
        }

        // antisymmetry over every pair, transitivity over every triple
        for (a, b) in versions.iter().cartesian_product(&versions) {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
        for ((a, b), c) in versions
            .iter()
            .cartesian_product(&versions)
            .cartesian_product(&versions)
        {
            if a <= b && b <= c {
                assert!(a <= c);
            }
        }
    }

    #[test]
    fn test_build_ignored_by_comparison() {
        let a = Version::parse("1.0.0+linux").unwrap();
        let b = Version::parse("1.0.0+macos").unwrap();
        assert_eq!(a, b);
        assert_eq!(Ordering::Equal, a.cmp(&b));
    }

    #[test]
    fn test_shorter_prefix_prerelease_is_less() {
        let shorter = Version::parse("1.0.0-beta").unwrap();
        let longer = Version::parse("1.0.0-beta.0").unwrap();
        assert!(shorter < longer);
    }
}

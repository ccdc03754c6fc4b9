use crate::{error::Error, identifier::Identifier, version::Version};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The eight kinds of increment that can be applied to a version.
///
/// The first seven come from the standard semver operation set. `Pre` is an
/// extension: it behaves like `Prerelease` but operates purely on the
/// prerelease component, never bumping patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// Bump major, then start a new prerelease sequence.
    Premajor,
    /// Bump minor, then start a new prerelease sequence.
    Preminor,
    /// Bump patch, then start a new prerelease sequence.
    Prepatch,
    /// Bump major and clear the prerelease, unless the version is already a
    /// prerelease of the next major.
    Major,
    /// Bump minor and clear the prerelease, unless the version is already a
    /// prerelease of the next minor.
    Minor,
    /// Bump patch and clear the prerelease, unless the version is already a
    /// prerelease of the next patch.
    Patch,
    /// Advance an existing prerelease sequence, or bump patch and start one.
    Prerelease,
    /// Advance or start a prerelease sequence without touching the triple.
    Pre,
}

impl ReleaseType {
    /// All release types, in the order the output contract lists them.
    pub const ALL: [ReleaseType; 8] = [
        ReleaseType::Premajor,
        ReleaseType::Preminor,
        ReleaseType::Prepatch,
        ReleaseType::Major,
        ReleaseType::Minor,
        ReleaseType::Patch,
        ReleaseType::Pre,
        ReleaseType::Prerelease,
    ];

    /// The release type's name, as it appears in output field names.
    pub fn name(self) -> &'static str {
        match self {
            ReleaseType::Premajor => "premajor",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::Prerelease => "prerelease",
            ReleaseType::Pre => "pre",
        }
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseType {
    type Err = Error;

    /// Resolves a release-type name. With the closed enum this is only
    /// reachable from untyped boundaries, where an unknown name must fail
    /// loudly rather than fall back to anything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseType::ALL
            .into_iter()
            .find(|release| release.name() == s)
            .ok_or_else(|| Error::InvalidReleaseType {
                value: s.to_owned(),
            })
    }
}

/// The starting numeral used when an increment mints a new numeric
/// prerelease identifier.
///
/// Callers at the boundary may say `true`/`1` (start at one), `false`/`0`
/// (start at zero), or nothing at all; `Unspecified` resolves to the
/// implementation default of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierBase {
    /// New numeric identifiers start at `0`.
    Zero,
    /// New numeric identifiers start at `1`.
    One,
    /// Use the implementation default (`0`).
    #[default]
    Unspecified,
}

impl IdentifierBase {
    /// The numeral this base seeds new identifiers with.
    pub fn seed(self) -> u64 {
        match self {
            IdentifierBase::One => 1,
            IdentifierBase::Zero | IdentifierBase::Unspecified => 0,
        }
    }
}

impl FromStr for IdentifierBase {
    type Err = Error;

    /// Resolves a boundary value: boolean interpretation first (the word
    /// forms `true`/`false` in their usual capitalizations), then the
    /// literal strings `"0"` and `"1"`.
    ///
    /// # Errors
    ///
    /// Anything else is an [`Error::InvalidIdentifierBase`]. An unset value
    /// is the caller's concern and maps to [`IdentifierBase::Unspecified`];
    /// it never arrives here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" | "True" | "TRUE" | "1" => Ok(IdentifierBase::One),
            "false" | "False" | "FALSE" | "0" => Ok(IdentifierBase::Zero),
            _ => Err(Error::InvalidIdentifierBase {
                value: s.to_owned(),
            }),
        }
    }
}

impl Version {
    /// Returns the next version for the given release type.
    ///
    /// `identifier`, when supplied, names the prerelease sequence to seed or
    /// continue (the `beta` of `1.2.3-beta.1`). `base` decides the starting
    /// numeral of any newly minted numeric identifier. The build component
    /// is always dropped from the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use semver_next::{IdentifierBase, ReleaseType, Version};
    ///
    /// let version = Version::parse("1.2.3-beta.1").unwrap();
    /// let next = version
    ///     .increment(ReleaseType::Prerelease, None, IdentifierBase::Unspecified)
    ///     .unwrap();
    /// assert_eq!("1.2.3-beta.2", next.to_string());
    ///
    /// let release = Version::parse("1.2.3").unwrap();
    /// let next = release
    ///     .increment(ReleaseType::Prepatch, Some("rc"), IdentifierBase::Unspecified)
    ///     .unwrap();
    /// assert_eq!("1.2.4-rc.0", next.to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidIdentifier`] if `identifier` violates the
    /// identifier grammar.
    pub fn increment(
        &self,
        release: ReleaseType,
        identifier: Option<&str>,
        base: IdentifierBase,
    ) -> Result<Version, Error> {
        let identifier = identifier.map(str::parse::<Identifier>).transpose()?;
        Ok(self.apply(release, identifier.as_ref(), base))
    }

    fn apply(
        &self,
        release: ReleaseType,
        identifier: Option<&Identifier>,
        base: IdentifierBase,
    ) -> Version {
        use ReleaseType::*;

        match release {
            Major => {
                // a prerelease of X.0.0 graduates to X.0.0 itself
                if self.is_prerelease() && self.minor() == 0 && self.patch() == 0 {
                    Version::new(self.major(), 0, 0)
                } else {
                    Version::new(self.major().saturating_add(1), 0, 0)
                }
            }
            Minor => {
                if self.is_prerelease() && self.patch() == 0 {
                    Version::new(self.major(), self.minor(), 0)
                } else {
                    Version::new(self.major(), self.minor().saturating_add(1), 0)
                }
            }
            Patch => {
                if self.is_prerelease() {
                    Version::new(self.major(), self.minor(), self.patch())
                } else {
                    Version::new(self.major(), self.minor(), self.patch().saturating_add(1))
                }
            }
            Premajor => Version::new(self.major().saturating_add(1), 0, 0)
                .with_prerelease(seeded_sequence(identifier, base)),
            Preminor => Version::new(self.major(), self.minor().saturating_add(1), 0)
                .with_prerelease(seeded_sequence(identifier, base)),
            Prepatch => Version::new(self.major(), self.minor(), self.patch().saturating_add(1))
                .with_prerelease(seeded_sequence(identifier, base)),
            Prerelease => {
                if self.is_prerelease() {
                    Version::new(self.major(), self.minor(), self.patch())
                        .with_prerelease(bumped_sequence(self.prerelease(), identifier, base))
                } else {
                    Version::new(self.major(), self.minor(), self.patch().saturating_add(1))
                        .with_prerelease(seeded_sequence(identifier, base))
                }
            }
            Pre => {
                let prerelease = if self.is_prerelease() {
                    bumped_sequence(self.prerelease(), identifier, base)
                } else {
                    seeded_sequence(identifier, base)
                };
                Version::new(self.major(), self.minor(), self.patch()).with_prerelease(prerelease)
            }
        }
    }
}

/// A freshly minted prerelease sequence: `[identifier, base]` when an
/// identifier is supplied, `[base]` alone when not.
fn seeded_sequence(identifier: Option<&Identifier>, base: IdentifierBase) -> Vec<Identifier> {
    match identifier {
        Some(identifier) => vec![identifier.clone(), Identifier::Numeric(base.seed())],
        None => vec![Identifier::Numeric(base.seed())],
    }
}

/// Advances an existing prerelease sequence.
///
/// A supplied identifier that does not match the sequence's leading
/// non-numeric identifier replaces the whole sequence. Otherwise the
/// rightmost numeric identifier is incremented, or `base` is appended when
/// there is none.
fn bumped_sequence(
    current: &[Identifier],
    identifier: Option<&Identifier>,
    base: IdentifierBase,
) -> Vec<Identifier> {
    if let Some(identifier) = identifier {
        let leading_matches = matches!(
            current.first(),
            Some(leading) if !leading.is_numeric() && leading == identifier
        );
        if !leading_matches {
            return seeded_sequence(Some(identifier), base);
        }
    }

    let mut sequence = current.to_vec();
    match sequence
        .iter_mut()
        .rev()
        .find_map(|identifier| match identifier {
            Identifier::Numeric(value) => Some(value),
            Identifier::AlphaNumeric(_) => None,
        }) {
        Some(value) => *value = value.saturating_add(1),
        None => sequence.push(Identifier::Numeric(base.seed())),
    }
    sequence
}

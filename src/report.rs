use crate::{
    coerce::coerce,
    error::Error,
    identifier::Identifier,
    increment::{IdentifierBase, ReleaseType},
    version::Version,
};
use serde::{Serialize, Serializer};
use serde_json::json;

/// The parsed version together with its eight next versions.
///
/// This is the output object the hosting environment consumes: the
/// decomposed input version plus one increment per [`ReleaseType`], all
/// derived from the same immutable source.
///
/// # Examples
///
/// ```
/// use semver_next::{IdentifierBase, ReleaseType, Report};
///
/// let report = Report::from_raw("v1.2.3-beta.1", None, IdentifierBase::Unspecified).unwrap();
/// assert_eq!("1.2.3-beta.1", report.version().to_string());
/// assert_eq!("1.2.3-beta.2", report.next(ReleaseType::Prerelease).to_string());
/// assert_eq!("1.2.3", report.next(ReleaseType::Patch).to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    version: Version,
    premajor: Version,
    preminor: Version,
    prepatch: Version,
    major: Version,
    minor: Version,
    patch: Version,
    pre: Version,
    prerelease: Version,
}

impl Report {
    /// Coerces and parses `raw`, then assembles the full report.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidVersion`] when the coerced input does not
    /// parse, or an [`Error::InvalidIdentifier`] when `identifier` violates
    /// the identifier grammar. Either failure is terminal: no partial
    /// report is produced.
    pub fn from_raw(
        raw: &str,
        identifier: Option<&str>,
        base: IdentifierBase,
    ) -> Result<Self, Error> {
        Self::new(Version::parse(&coerce(raw))?, identifier, base)
    }

    /// Assembles the report for an already-parsed version.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidIdentifier`] when `identifier` violates
    /// the identifier grammar.
    pub fn new(
        version: Version,
        identifier: Option<&str>,
        base: IdentifierBase,
    ) -> Result<Self, Error> {
        let next = |release| version.increment(release, identifier, base);

        Ok(Self {
            premajor: next(ReleaseType::Premajor)?,
            preminor: next(ReleaseType::Preminor)?,
            prepatch: next(ReleaseType::Prepatch)?,
            major: next(ReleaseType::Major)?,
            minor: next(ReleaseType::Minor)?,
            patch: next(ReleaseType::Patch)?,
            pre: next(ReleaseType::Pre)?,
            prerelease: next(ReleaseType::Prerelease)?,
            version,
        })
    }

    /// The parsed input version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The next version for the given release type.
    pub fn next(&self, release: ReleaseType) -> &Version {
        match release {
            ReleaseType::Premajor => &self.premajor,
            ReleaseType::Preminor => &self.preminor,
            ReleaseType::Prepatch => &self.prepatch,
            ReleaseType::Major => &self.major,
            ReleaseType::Minor => &self.minor,
            ReleaseType::Patch => &self.patch,
            ReleaseType::Pre => &self.pre,
            ReleaseType::Prerelease => &self.prerelease,
        }
    }

    /// The fixed-name output pairs, in their contractual order:
    /// `version`, `major`, `minor`, `patch`, `prerelease`, `build`, one
    /// `next.<type>` per release type, and finally the aggregated `json`.
    ///
    /// Sequence-valued fields render as JSON arrays; `json` renders as the
    /// compact form of [`Report::to_json`].
    pub fn outputs(&self) -> Vec<(String, String)> {
        let mut outputs = vec![
            ("version".to_owned(), self.version.to_string()),
            ("major".to_owned(), self.version.major().to_string()),
            ("minor".to_owned(), self.version.minor().to_string()),
            ("patch".to_owned(), self.version.patch().to_string()),
            (
                "prerelease".to_owned(),
                json!(self.version.prerelease()).to_string(),
            ),
            ("build".to_owned(), json!(self.version.build()).to_string()),
        ];
        for release in ReleaseType::ALL {
            outputs.push((format!("next.{release}"), self.next(release).to_string()));
        }
        outputs.push(("json".to_owned(), self.to_json().to_string()));
        outputs
    }

    /// The aggregated JSON object: the parsed version's fields plus the
    /// derived `isPrerelease`, with each `next.<type>` expanded to a full
    /// version object of the same shape.
    pub fn to_json(&self) -> serde_json::Value {
        json!(self)
    }
}

/// The JSON shape of a single version within the aggregated object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionObject<'v> {
    version: String,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &'v [Identifier],
    build: &'v [String],
    is_prerelease: bool,
}

impl<'v> From<&'v Version> for VersionObject<'v> {
    fn from(version: &'v Version) -> Self {
        Self {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.prerelease(),
            build: version.build(),
            is_prerelease: version.is_prerelease(),
        }
    }
}

#[derive(Serialize)]
struct NextObject<'r> {
    premajor: VersionObject<'r>,
    preminor: VersionObject<'r>,
    prepatch: VersionObject<'r>,
    major: VersionObject<'r>,
    minor: VersionObject<'r>,
    patch: VersionObject<'r>,
    pre: VersionObject<'r>,
    prerelease: VersionObject<'r>,
}

#[derive(Serialize)]
struct ReportObject<'r> {
    #[serde(flatten)]
    version: VersionObject<'r>,
    next: NextObject<'r>,
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportObject {
            version: self.version().into(),
            next: NextObject {
                premajor: (&self.premajor).into(),
                preminor: (&self.preminor).into(),
                prepatch: (&self.prepatch).into(),
                major: (&self.major).into(),
                minor: (&self.minor).into(),
                patch: (&self.patch).into(),
                pre: (&self.pre).into(),
                prerelease: (&self.prerelease).into(),
            },
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn beta_report() -> Report {
        Report::from_raw("v1.2.3-beta.1", None, IdentifierBase::Unspecified).unwrap()
    }

    #[test]
    fn test_bare_major_input() {
        let report = Report::from_raw("1", None, IdentifierBase::Unspecified).unwrap();

        let args = [
            (ReleaseType::Major, "2.0.0"),
            (ReleaseType::Minor, "1.1.0"),
            (ReleaseType::Patch, "1.0.1"),
            (ReleaseType::Premajor, "2.0.0-0"),
            (ReleaseType::Prerelease, "1.0.1-0"),
        ];

        assert_eq!("1.0.0", report.version().to_string());
        for (release, expected) in args {
            assert_eq!(expected, report.next(release).to_string());
        }
    }

    #[rstest]
    fn test_prefixed_prerelease_input(beta_report: Report) {
        assert_eq!("1.2.3-beta.1", beta_report.version().to_string());
        assert_eq!(
            "1.2.3-beta.2",
            beta_report.next(ReleaseType::Prerelease).to_string()
        );
        assert_eq!("1.2.3", beta_report.next(ReleaseType::Patch).to_string());
    }

    #[test]
    fn test_matching_identifier_with_base_one() {
        let report =
            Report::from_raw("1.2.3-beta.1", Some("beta"), IdentifierBase::One).unwrap();
        // the numeric tail already exists, so the base never applies
        assert_eq!(
            "1.2.3-beta.2",
            report.next(ReleaseType::Prerelease).to_string()
        );
    }

    #[test]
    fn test_invalid_input_is_terminal() {
        let result = Report::from_raw("not-a-version", None, IdentifierBase::Unspecified);
        assert_eq!(Err(Error::invalid_version("not-a-version")), result);
    }

    #[rstest]
    fn test_output_names_and_order(beta_report: Report) {
        let names: Vec<String> = beta_report
            .outputs()
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(
            vec![
                "version",
                "major",
                "minor",
                "patch",
                "prerelease",
                "build",
                "next.premajor",
                "next.preminor",
                "next.prepatch",
                "next.major",
                "next.minor",
                "next.patch",
                "next.pre",
                "next.prerelease",
                "json",
            ],
            names
        );
    }

    #[rstest]
    fn test_output_values(beta_report: Report) {
        let outputs = beta_report.outputs();
        let value = |name: &str| {
            outputs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!("1.2.3-beta.1", value("version"));
        assert_eq!("1", value("major"));
        assert_eq!("2", value("minor"));
        assert_eq!("3", value("patch"));
        assert_eq!(r#"["beta",1]"#, value("prerelease"));
        assert_eq!("[]", value("build"));
        assert_eq!("2.0.0-0", value("next.premajor"));
        assert_eq!("1.3.0-0", value("next.preminor"));
        assert_eq!("1.2.4-0", value("next.prepatch"));
        assert_eq!("2.0.0", value("next.major"));
        assert_eq!("1.3.0", value("next.minor"));
        assert_eq!("1.2.3", value("next.patch"));
        assert_eq!("1.2.3-beta.2", value("next.pre"));
        assert_eq!("1.2.3-beta.2", value("next.prerelease"));
    }

    #[rstest]
    fn test_json_shape(beta_report: Report) {
        let json = beta_report.to_json();

        assert_eq!(json!("1.2.3-beta.1"), json["version"]);
        assert_eq!(json!(1), json["major"]);
        assert_eq!(json!(["beta", 1]), json["prerelease"]);
        assert_eq!(json!([]), json["build"]);
        assert_eq!(json!(true), json["isPrerelease"]);
        assert_eq!(json!("2.0.0"), json["next"]["major"]["version"]);
        assert_eq!(json!(false), json["next"]["major"]["isPrerelease"]);
        assert_eq!(json!("1.2.3-beta.2"), json["next"]["prerelease"]["version"]);
        assert_eq!(json!(["beta", 2]), json["next"]["prerelease"]["prerelease"]);
    }

    #[test]
    fn test_identifier_threads_through_every_next() {
        let report = Report::from_raw("1.2.3", Some("rc"), IdentifierBase::Unspecified).unwrap();
        assert_eq!("1.2.4-rc.0", report.next(ReleaseType::Prepatch).to_string());
        assert_eq!("1.3.0-rc.0", report.next(ReleaseType::Preminor).to_string());
        assert_eq!("2.0.0-rc.0", report.next(ReleaseType::Premajor).to_string());
        assert_eq!(
            "1.2.4-rc.0",
            report.next(ReleaseType::Prerelease).to_string()
        );
    }
}

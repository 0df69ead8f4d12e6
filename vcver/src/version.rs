use std::fmt;

use serde::Serialize;


/// The result of a version resolution.
///
/// `commits` is kept as the text found in the describe output, it is never
/// validated as a number. Use [`Version::commits_count()`] for a parsed view.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Serialize)]
pub struct Version {
    version: String,
    commits: String,
    sha: String,
}

impl Version {
    pub fn new(version: impl Into<String>, commits: impl Into<String>, sha: impl Into<String>) -> Self {
        Version {
            version: version.into(),
            commits: commits.into(),
            sha: sha.into(),
        }
    }

    /// The display-ready version: the tag, optionally followed by a `.devN` suffix.
    pub fn version(&self) -> &str { &self.version }

    /// Number of commits since the most recent tag, as text.
    pub fn commits(&self) -> &str { &self.commits }

    /// Abbreviated commit identifier.
    pub fn sha(&self) -> &str { &self.sha }

    /// Number of commits since the most recent tag, if it is a valid integer.
    ///
    /// # Example
    /// ```
    /// # use vcver::Version;
    /// assert_eq!(Version::new("1.0.dev2", "2", "gfeeb").commits_count(), Some(2));
    /// assert_eq!(Version::new("1.0", "x", "gfeeb").commits_count(), None);
    /// ```
    pub fn commits_count(&self) -> Option<u64> {
        self.commits.parse().ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}


/// The three parts of a `describe`-style string: `<tag>-<commits>-<sha>`.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Describe<'a> {
    pub tag: &'a str,
    pub commits: &'a str,
    pub sha: &'a str,
}

impl<'a> Describe<'a> {
    /// Split a raw describe string from the right on its last two hyphens.
    ///
    /// Hyphens inside the tag itself are kept. Returns `None` when there are
    /// fewer than two hyphens.
    ///
    /// # Example
    /// ```
    /// # use vcver::Describe;
    /// let d = Describe::parse("v1.0-rc1-3-gabc123").unwrap();
    /// assert_eq!((d.tag, d.commits, d.sha), ("v1.0-rc1", "3", "gabc123"));
    /// assert!(Describe::parse("foob").is_none());
    /// ```
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.rsplitn(3, '-');
        let sha = parts.next()?;
        let commits = parts.next()?;
        let tag = parts.next()?;
        Some(Describe { tag, commits, sha })
    }

    /// Build the final [`Version`], appending `.dev<commits>` to the tag when
    /// there are commits after it and `include_dev_version` is set.
    pub fn to_version(&self, include_dev_version: bool) -> Version {
        let version = if self.commits == "0" || !include_dev_version {
            self.tag.to_string()
        }
        else {
            format!("{}.dev{}", self.tag, self.commits)
        };
        Version::new(version, self.commits, self.sha)
    }
}

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.tag, self.commits, self.sha)
    }
}

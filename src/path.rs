use std::fmt;

/// A site-relative asset or file reference (favicon, logo, stylesheet, ...).
///
/// Paths are stored relative to the site root; absolute paths are rejected at
/// deserialization time.
#[derive(
    Default,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_unchecked(value: &str) -> Self {
        Self(relative_path::RelativePathBuf::from(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_relative_path(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('/') {
            Err("Asset paths must be relative to the site root")
        } else {
            Ok(Self(relative_path::RelativePathBuf::from(value)))
        }
    }
}

impl TryFrom<String> for RelPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl std::ops::Deref for RelPath {
    type Target = relative_path::RelativePath;

    #[inline]
    fn deref(&self) -> &relative_path::RelativePath {
        self.as_relative_path()
    }
}

impl AsRef<str> for RelPath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Site identity, kept at the top level of the raw input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub url: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<crate::path::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: Default::default(),
            tagline: Default::default(),
            url: Default::default(),
            base_url: "/".to_owned(),
            favicon: Default::default(),
            organization: Default::default(),
            project: Default::default(),
        }
    }
}

/// Build presets handed to the hosting framework: docs and blog handling plus
/// an optional custom stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Preset {
    pub docs: Docs,
    pub blog: Blog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<crate::path::RelPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Docs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<crate::path::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Blog {
    pub show_reading_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

impl Default for Blog {
    fn default() -> Self {
        Self {
            show_reading_time: true,
            edit_url: Default::default(),
        }
    }
}

/// Theming options: analytics keys, search indexing, the share image, and the
/// optional announcement banner.  Key material is opaque to this crate and
/// passed through to the rendering pipeline untouched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<crate::path::RelPath>,
    pub sidebar_collapsible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<AnnouncementBar>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            analytics: Default::default(),
            search: Default::default(),
            image: Default::default(),
            sidebar_collapsible: true,
            announcement: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Analytics {
    pub tracking_id: String,
    pub anonymize_ip: bool,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            tracking_id: Default::default(),
            anonymize_ip: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Search {
    pub api_key: String,
    pub index_name: String,
}

/// A dismissible strip of text shown site-wide.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct AnnouncementBar {
    pub id: String,
    /// Raw HTML, rendered verbatim by the site builder.
    pub content: String,
    pub background_color: String,
    pub text_color: String,
    pub closeable: bool,
}

pub(crate) const DEFAULT_BANNER_BACKGROUND: &str = "#fff";
pub(crate) const DEFAULT_BANNER_TEXT: &str = "#000";

impl Default for AnnouncementBar {
    fn default() -> Self {
        Self {
            id: Default::default(),
            content: Default::default(),
            background_color: DEFAULT_BANNER_BACKGROUND.to_owned(),
            text_color: DEFAULT_BANNER_TEXT.to_owned(),
            closeable: true,
        }
    }
}

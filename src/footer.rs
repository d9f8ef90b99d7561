/// The footer: ordered link columns plus an optional copyright template.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<FooterColumn>,
    /// Stored verbatim; `{{year}}` is substituted at render time via
    /// [`Footer::copyright`], never at load time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

const YEAR_PLACEHOLDER: &str = "{{year}}";

impl Footer {
    /// Render the copyright line for the given year.
    pub fn copyright(&self, year: i32) -> Option<String> {
        self.copyright
            .as_ref()
            .map(|template| template.replace(YEAR_PLACEHOLDER, &year.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FooterColumn {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<FooterLink>,
}

/// A footer link targets either a page inside the site or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FooterLink {
    Internal { label: String, to: String },
    External { label: String, href: String },
}

impl FooterLink {
    pub fn label(&self) -> &str {
        match self {
            FooterLink::Internal { label, .. } => label,
            FooterLink::External { label, .. } => label,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            FooterLink::Internal { to, .. } => to,
            FooterLink::External { href, .. } => href,
        }
    }
}

/// The top navigation bar: an optional branding block plus an ordered list of
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Logo {
    pub alt: String,
    pub src: crate::path::RelPath,
}

/// One entry in the top navigation bar.
///
/// Tagged on `kind` so that consumers match exhaustively; a new kind is a
/// compile error at every consumption site rather than a silent fall-through.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Doc {
        doc_id: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
    Search {
        #[serde(default)]
        position: Position,
    },
    Link {
        href: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
}

impl NavItem {
    pub fn position(&self) -> Position {
        match self {
            NavItem::Doc { position, .. } => *position,
            NavItem::Search { position } => *position,
            NavItem::Link { position, .. } => *position,
        }
    }

    /// The user-visible label, if the entry has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            NavItem::Doc { label, .. } => Some(label),
            NavItem::Search { .. } => None,
            NavItem::Link { label, .. } => Some(label),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Position {
    #[default]
    Left,
    Right,
}

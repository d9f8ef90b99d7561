use serde_yaml::Value;

use super::*;
use crate::path::RelPath;

pub(crate) fn load(raw: &Value) -> Result<Config, ConfigErrors> {
    let mut errors = ConfigErrors::new();
    if !matches!(raw, Value::Mapping(_) | Value::Null) {
        errors.push(FieldError::InvalidType {
            path: ".".to_owned(),
            expected: "mapping",
            found: type_name(raw),
        });
        return Err(errors);
    }

    let config = Config {
        site: site(raw, &mut errors),
        theme: theme(raw, &mut errors),
        navbar: navbar(raw, &mut errors),
        footer: footer(raw, &mut errors),
        preset: preset(raw, &mut errors),
    };
    errors.into_result(config)
}

fn site(root: &Value, errors: &mut ConfigErrors) -> Site {
    let mut site = Site::default();
    if let Some(title) = required_str(root, "title", "", errors) {
        site.title = title;
    }
    if let Some(url) = required_str(root, "url", "", errors) {
        site.url = url;
    }
    site.tagline = opt_str(root, "tagline", "", errors);
    if let Some(base_url) = opt_str(root, "base_url", "", errors) {
        site.base_url = base_url;
    }
    site.favicon = opt_rel_path(root, "favicon", "", errors);
    site.organization = opt_str(root, "organization", "", errors);
    site.project = opt_str(root, "project", "", errors);
    site
}

fn theme(root: &Value, errors: &mut ConfigErrors) -> Theme {
    let mut theme = Theme::default();
    let Some(value) = section(root, "theme", "", errors) else {
        return theme;
    };

    if let Some(analytics) = section(value, "analytics", "theme", errors) {
        let tracking_id = required_str(analytics, "tracking_id", "theme.analytics", errors);
        let anonymize_ip = opt_bool(analytics, "anonymize_ip", "theme.analytics", errors);
        if let Some(tracking_id) = tracking_id {
            theme.analytics = Some(Analytics {
                tracking_id,
                anonymize_ip: anonymize_ip.unwrap_or(true),
            });
        }
    }

    if let Some(search) = section(value, "search", "theme", errors) {
        let api_key = required_str(search, "api_key", "theme.search", errors);
        let index_name = required_str(search, "index_name", "theme.search", errors);
        if let (Some(api_key), Some(index_name)) = (api_key, index_name) {
            theme.search = Some(Search { api_key, index_name });
        }
    }

    theme.image = opt_rel_path(value, "image", "theme", errors);
    if let Some(collapsible) = opt_bool(value, "sidebar_collapsible", "theme", errors) {
        theme.sidebar_collapsible = collapsible;
    }

    if let Some(banner) = section(value, "announcement", "theme", errors) {
        theme.announcement = announcement(banner, errors);
    }

    theme
}

fn announcement(value: &Value, errors: &mut ConfigErrors) -> Option<AnnouncementBar> {
    const PREFIX: &str = "theme.announcement";
    let id = required_str(value, "id", PREFIX, errors);
    let content = required_str(value, "content", PREFIX, errors);
    let background_color = opt_str(value, "background_color", PREFIX, errors);
    let text_color = opt_str(value, "text_color", PREFIX, errors);
    let closeable = opt_bool(value, "closeable", PREFIX, errors);
    Some(AnnouncementBar {
        id: id?,
        content: content?,
        background_color: background_color
            .unwrap_or_else(|| crate::theme::DEFAULT_BANNER_BACKGROUND.to_owned()),
        text_color: text_color.unwrap_or_else(|| crate::theme::DEFAULT_BANNER_TEXT.to_owned()),
        closeable: closeable.unwrap_or(true),
    })
}

fn navbar(root: &Value, errors: &mut ConfigErrors) -> Navbar {
    let mut navbar = Navbar::default();
    let Some(value) = section(root, "navbar", "", errors) else {
        return navbar;
    };

    navbar.title = opt_str(value, "title", "navbar", errors);

    if let Some(logo) = section(value, "logo", "navbar", errors) {
        let alt = required_str(logo, "alt", "navbar.logo", errors);
        let src = required_rel_path(logo, "src", "navbar.logo", errors);
        if let (Some(alt), Some(src)) = (alt, src) {
            navbar.logo = Some(Logo { alt, src });
        }
    }

    if let Some(items) = sequence(value, "items", "navbar", errors) {
        for (index, item) in items.iter().enumerate() {
            let path = format!("navbar.items[{index}]");
            if let Some(item) = nav_item(item, &path, errors) {
                navbar.items.push(item);
            }
        }
    }

    navbar
}

fn nav_item(value: &Value, path: &str, errors: &mut ConfigErrors) -> Option<NavItem> {
    if !value.is_mapping() {
        errors.push(FieldError::InvalidType {
            path: path.to_owned(),
            expected: "mapping",
            found: type_name(value),
        });
        return None;
    }

    let kind_path = join(path, "kind");
    let kind = match value.get("kind") {
        None | Some(Value::Null) => {
            errors.push(FieldError::MissingField { path: kind_path });
            return None;
        }
        Some(Value::String(kind)) => kind.as_str(),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: kind_path,
                expected: "string",
                found: type_name(other),
            });
            return None;
        }
    };

    let position = position(value, path, errors);
    match kind {
        "doc" => {
            let doc_id = required_str(value, "doc_id", path, errors);
            let label = required_str(value, "label", path, errors);
            Some(NavItem::Doc {
                doc_id: doc_id?,
                label: label?,
                position,
            })
        }
        "search" => Some(NavItem::Search { position }),
        "link" => {
            let href = required_str(value, "href", path, errors);
            let label = required_str(value, "label", path, errors);
            Some(NavItem::Link {
                href: href?,
                label: label?,
                position,
            })
        }
        other => {
            errors.push(FieldError::InvalidVariant {
                path: join(path, "kind"),
                value: other.to_owned(),
            });
            None
        }
    }
}

fn position(value: &Value, prefix: &str, errors: &mut ConfigErrors) -> Position {
    match value.get("position") {
        None | Some(Value::Null) => Position::Left,
        Some(Value::String(position)) => match position.as_str() {
            "left" => Position::Left,
            "right" => Position::Right,
            other => {
                errors.push(FieldError::InvalidVariant {
                    path: join(prefix, "position"),
                    value: other.to_owned(),
                });
                Position::Left
            }
        },
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, "position"),
                expected: "string",
                found: type_name(other),
            });
            Position::Left
        }
    }
}

fn footer(root: &Value, errors: &mut ConfigErrors) -> Footer {
    let mut footer = Footer::default();
    let Some(value) = section(root, "footer", "", errors) else {
        return footer;
    };

    footer.copyright = opt_str(value, "copyright", "footer", errors);

    if let Some(columns) = sequence(value, "links", "footer", errors) {
        for (index, column) in columns.iter().enumerate() {
            let path = format!("footer.links[{index}]");
            if let Some(column) = footer_column(column, &path, errors) {
                footer.links.push(column);
            }
        }
    }

    footer
}

fn footer_column(value: &Value, path: &str, errors: &mut ConfigErrors) -> Option<FooterColumn> {
    if !value.is_mapping() {
        errors.push(FieldError::InvalidType {
            path: path.to_owned(),
            expected: "mapping",
            found: type_name(value),
        });
        return None;
    }

    let title = required_str(value, "title", path, errors);

    let mut items = Vec::new();
    if let Some(links) = sequence(value, "items", path, errors) {
        for (index, link) in links.iter().enumerate() {
            let link_path = format!("{path}.items[{index}]");
            if let Some(link) = footer_link(link, &link_path, errors) {
                items.push(link);
            }
        }
    }

    Some(FooterColumn {
        title: title?,
        items,
    })
}

fn footer_link(value: &Value, path: &str, errors: &mut ConfigErrors) -> Option<FooterLink> {
    if !value.is_mapping() {
        errors.push(FieldError::InvalidType {
            path: path.to_owned(),
            expected: "mapping",
            found: type_name(value),
        });
        return None;
    }

    let label = required_str(value, "label", path, errors);
    let to = opt_str(value, "to", path, errors);
    let href = opt_str(value, "href", path, errors);

    // An internal `to` wins when both targets are given.
    match (to, href) {
        (Some(to), _) => Some(FooterLink::Internal { label: label?, to }),
        (None, Some(href)) => Some(FooterLink::External { label: label?, href }),
        (None, None) => {
            errors.push(FieldError::MissingField {
                path: join(path, "href"),
            });
            None
        }
    }
}

fn preset(root: &Value, errors: &mut ConfigErrors) -> Preset {
    let mut preset = Preset::default();
    let Some(value) = section(root, "preset", "", errors) else {
        return preset;
    };

    if let Some(docs) = section(value, "docs", "preset", errors) {
        preset.docs.sidebar_path = opt_rel_path(docs, "sidebar_path", "preset.docs", errors);
        preset.docs.edit_url = opt_str(docs, "edit_url", "preset.docs", errors);
    }

    if let Some(blog) = section(value, "blog", "preset", errors) {
        if let Some(show) = opt_bool(blog, "show_reading_time", "preset.blog", errors) {
            preset.blog.show_reading_time = show;
        }
        preset.blog.edit_url = opt_str(blog, "edit_url", "preset.blog", errors);
    }

    preset.custom_css = opt_rel_path(value, "custom_css", "preset", errors);
    preset
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// A present-and-non-empty string field; absence and emptiness are the same
/// error.
fn required_str(
    value: &Value,
    key: &str,
    prefix: &str,
    errors: &mut ConfigErrors,
) -> Option<String> {
    match value.get(key) {
        None | Some(Value::Null) => {
            errors.push(FieldError::MissingField {
                path: join(prefix, key),
            });
            None
        }
        Some(Value::String(field)) if field.is_empty() => {
            errors.push(FieldError::MissingField {
                path: join(prefix, key),
            });
            None
        }
        Some(Value::String(field)) => Some(field.clone()),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "string",
                found: type_name(other),
            });
            None
        }
    }
}

fn opt_str(value: &Value, key: &str, prefix: &str, errors: &mut ConfigErrors) -> Option<String> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(field)) => Some(field.clone()),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "string",
                found: type_name(other),
            });
            None
        }
    }
}

fn opt_bool(value: &Value, key: &str, prefix: &str, errors: &mut ConfigErrors) -> Option<bool> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(field)) => Some(*field),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "boolean",
                found: type_name(other),
            });
            None
        }
    }
}

fn opt_rel_path(
    value: &Value,
    key: &str,
    prefix: &str,
    errors: &mut ConfigErrors,
) -> Option<RelPath> {
    let field = opt_str(value, key, prefix, errors)?;
    rel_path(field, key, prefix, errors)
}

fn required_rel_path(
    value: &Value,
    key: &str,
    prefix: &str,
    errors: &mut ConfigErrors,
) -> Option<RelPath> {
    let field = required_str(value, key, prefix, errors)?;
    rel_path(field, key, prefix, errors)
}

fn rel_path(field: String, key: &str, prefix: &str, errors: &mut ConfigErrors) -> Option<RelPath> {
    match RelPath::try_from(field) {
        Ok(path) => Some(path),
        Err(_) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "relative path",
                found: "absolute path",
            });
            None
        }
    }
}

/// A nested mapping section; absent or explicit-null sections are skipped.
fn section<'v>(
    value: &'v Value,
    key: &str,
    prefix: &str,
    errors: &mut ConfigErrors,
) -> Option<&'v Value> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(nested @ Value::Mapping(_)) => Some(nested),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "mapping",
                found: type_name(other),
            });
            None
        }
    }
}

fn sequence<'v>(
    value: &'v Value,
    key: &str,
    prefix: &str,
    errors: &mut ConfigErrors,
) -> Option<&'v Vec<Value>> {
    match value.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Sequence(entries)) => Some(entries),
        Some(other) => {
            errors.push(FieldError::InvalidType {
                path: join(prefix, key),
                expected: "sequence",
                found: type_name(other),
            });
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn load_str(raw: &str) -> Result<Config, ConfigErrors> {
        let value: Value = serde_yaml::from_str(raw).unwrap();
        Config::load(&value)
    }

    #[test]
    fn minimal_fills_defaults() {
        let config = load_str(
            "
title: Flutter Version Management
url: https://fvm.app
",
        )
        .unwrap();
        assert_eq!(config.site.title, "Flutter Version Management");
        assert_eq!(config.site.base_url, "/");
        assert!(config.theme.sidebar_collapsible);
        assert!(config.preset.blog.show_reading_time);
        assert!(config.navbar.items.is_empty());
        assert!(config.footer.links.is_empty());
    }

    #[test]
    fn missing_title_and_url_both_reported() {
        let errors = load_str("tagline: just a tagline").unwrap_err();
        let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
        assert_eq!(paths, ["title", "url"]);
        for error in &errors {
            assert!(matches!(error, FieldError::MissingField { .. }));
        }
    }

    #[test]
    fn empty_title_counts_as_missing() {
        let errors = load_str(
            "
title: ''
url: https://fvm.app
",
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::MissingField {
                path: "title".to_owned()
            }
        );
    }

    #[test]
    fn title_of_wrong_type() {
        let errors = load_str(
            "
title: 42
url: https://fvm.app
",
        )
        .unwrap_err();
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::InvalidType {
                path: "title".to_owned(),
                expected: "string",
                found: "number",
            }
        );
    }

    #[test]
    fn unrecognized_nav_kind() {
        let errors = load_str(
            "
title: FVM
url: https://fvm.app
navbar:
  items:
    - kind: gizmo
      label: Gadgets
",
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::InvalidVariant {
                path: "navbar.items[0].kind".to_owned(),
                value: "gizmo".to_owned(),
            }
        );
    }

    #[test]
    fn nav_position_defaults_left() {
        let config = load_str(
            "
title: FVM
url: https://fvm.app
navbar:
  items:
    - kind: doc
      doc_id: guides/basic_commands
      label: Guides
",
        )
        .unwrap();
        assert_eq!(config.navbar.items[0].position(), Position::Left);
    }

    #[test]
    fn nav_position_unrecognized() {
        let errors = load_str(
            "
title: FVM
url: https://fvm.app
navbar:
  items:
    - kind: search
      position: center
",
        )
        .unwrap_err();
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::InvalidVariant {
                path: "navbar.items[0].position".to_owned(),
                value: "center".to_owned(),
            }
        );
    }

    #[test]
    fn banner_colors_default() {
        let config = load_str(
            "
title: FVM
url: https://fvm.app
theme:
  announcement:
    id: support_us
    content: Give us a star
",
        )
        .unwrap();
        let banner = config.theme.announcement.unwrap();
        assert_eq!(banner.background_color, "#fff");
        assert_eq!(banner.text_color, "#000");
        assert!(banner.closeable);
    }

    #[test]
    fn footer_column_with_empty_title() {
        let errors = load_str(
            "
title: FVM
url: https://fvm.app
footer:
  links:
    - title: Docs
      items:
        - label: Guides
          to: /docs/guides
    - title: ''
      items:
        - label: GitHub
          href: https://github.com/leoafarias/fvm
",
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::MissingField {
                path: "footer.links[1].title".to_owned()
            }
        );
    }

    #[test]
    fn footer_link_without_target() {
        let errors = load_str(
            "
title: FVM
url: https://fvm.app
footer:
  links:
    - title: Docs
      items:
        - label: Dangling
",
        )
        .unwrap_err();
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::MissingField {
                path: "footer.links[0].items[0].href".to_owned()
            }
        );
    }

    #[test]
    fn two_problems_two_entries() {
        let errors = load_str(
            "
url: https://fvm.app
navbar:
  items:
    - kind: gizmo
",
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        let paths: Vec<_> = errors.iter().map(|e| e.path()).collect();
        assert_eq!(paths, ["title", "navbar.items[0].kind"]);
    }

    #[test]
    fn scalar_root_rejected() {
        let value: Value = serde_yaml::from_str("just a string").unwrap();
        let errors = Config::load(&value).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.iter().next().unwrap(),
            FieldError::InvalidType { .. }
        ));
    }

    #[test]
    fn nav_items_round_trip() {
        let config = load_str(
            "
title: FVM
url: https://fvm.app
navbar:
  title: FVM
  logo:
    alt: FVM Logo
    src: img/logo.svg
  items:
    - kind: doc
      doc_id: getting_started/overview
      label: Getting Started
      position: right
    - kind: search
      position: right
    - kind: link
      href: https://github.com/leoafarias/fvm
      label: GitHub
      position: right
",
        )
        .unwrap();
        let serialized = serde_yaml::to_value(&config).unwrap();
        let reloaded = Config::load(&serialized).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.navbar.items.len(), 3);
        assert_eq!(reloaded.navbar.items[1].position(), Position::Right);
    }

    #[test]
    fn absolute_asset_path_rejected() {
        let errors = load_str(
            "
title: FVM
url: https://fvm.app
favicon: /img/favicon.ico
",
        )
        .unwrap_err();
        assert_eq!(
            errors.iter().next().unwrap(),
            &FieldError::InvalidType {
                path: "favicon".to_owned(),
                expected: "relative path",
                found: "absolute path",
            }
        );
    }
}

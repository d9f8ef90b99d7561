use std::fmt;
use std::path;

use super::*;

/// The validated site configuration, aggregating the independent sections.
///
/// Immutable after load; the site builder reads it, renders, and discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(flatten)]
    pub site: Site,
    pub theme: Theme,
    pub navbar: Navbar,
    pub footer: Footer,
    pub preset: Preset,
}

impl Config {
    /// Validate a raw configuration value.
    ///
    /// Returns either a fully valid `Config` or every problem found, in
    /// source order.  Performs no I/O.
    pub fn load(raw: &serde_yaml::Value) -> Result<Config, ConfigErrors> {
        crate::validate::load(raw)
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let raw: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
            Status::new("Failed to parse config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let config = Self::load(&raw).map_err(|e| {
            Status::new("Invalid config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        // No fallback to defaults: a site without `title`/`url` can never be
        // valid.
        let file_path = find_project_file(&cwd, "docsite.yml").ok_or_else(|| {
            Status::new("No docsite.yml file found")
                .context_with(|c| c.insert("Directory", cwd.display().to_string()))
        })?;
        log::debug!("Using config file `{}`", file_path.display());
        Self::from_file(file_path)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let config = Config::from_file("tests/fixtures/config/docsite.yml").unwrap();
        assert_eq!(config.site.title, "Flutter Version Management");
        assert_eq!(config.site.url, "https://fvm.app");
        assert_eq!(config.navbar.items.len(), 4);
        assert_eq!(config.footer.links.len(), 3);
        assert_eq!(
            config.footer.copyright(2021).as_deref(),
            Some("Copyright © 2021 Leo Farias.")
        );
        assert!(!config.theme.sidebar_collapsible);
    }

    #[test]
    fn test_from_file_minimal() {
        let config = Config::from_file("tests/fixtures/config/minimal.yml").unwrap();
        assert_eq!(config.site.base_url, "/");
        assert!(config.navbar.items.is_empty());
    }

    #[test]
    fn test_from_file_missing_title() {
        let result = Config::from_file("tests/fixtures/config/missing_title.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let config = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(config.site.title, "Flutter Version Management");
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures");
        assert!(result.is_err());
    }

    #[test]
    fn display_round_trips() {
        let config = Config::from_file("tests/fixtures/config/docsite.yml").unwrap();
        let raw: serde_yaml::Value = serde_yaml::from_str(&config.to_string()).unwrap();
        let reloaded = Config::load(&raw).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", "docsite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", "docsite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/docsite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let actual = find_project_file("tests/fixtures", "docsite.yml");
        assert_eq!(actual, None);
    }
}

//! Typed configuration for a documentation site.
//!
//! The schema covers site identity, theming, the navigation bar, the footer
//! link structure, and build presets.  [`Config::load`] validates a raw YAML
//! value in one pass and reports every problem at once; file discovery and
//! reading live in [`Config::from_file`] and [`Config::from_cwd`].

mod config;
mod error;
mod footer;
mod navbar;
mod preset;
mod site;
mod theme;
mod validate;

pub mod path;

pub use self::config::*;
pub use self::error::*;
pub use self::footer::*;
pub use self::navbar::*;
pub use self::preset::*;
pub use self::site::*;
pub use self::theme::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;

//! Configuration module for Browse-Mirror
//!
//! Settings come from the command line and, optionally, a TOML file. They are
//! layered (CLI over file over defaults), validated, and resolved into a
//! [`Config`] that is passed explicitly into the crawl.
//!
//! # Example
//!
//! ```no_run
//! use browse_mirror::config::{load_config, Settings};
//! use std::path::Path;
//!
//! let config = load_config(Some(Path::new("mirror.toml")), Settings::default()).unwrap();
//! println!("Mirroring {} into {}", config.base_url, config.output_dir.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{default_user_agent, Config, Settings, TlsMode, DEFAULT_OUTPUT_DIR};

// Re-export parser functions
pub use parser::{load_config, load_settings};
pub use validation::{resolve, validate_base_url};

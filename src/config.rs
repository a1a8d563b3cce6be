//! Build-time configuration.
//!
//! The app runs in the browser, so settings are baked in from the
//! environment at compile time and fall back to defaults.

use std::str::FromStr;

use log::{Level, warn};

fn parse_or<T: FromStr>(var: &str, raw: Option<&str>, default: T) -> T
where
	T::Err: std::fmt::Display,
{
	match raw {
		Some(val) => match val.trim().parse() {
			Ok(parsed) => parsed,
			Err(e) => {
				warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
				default
			}
		},
		None => default,
	}
}

fn non_empty(raw: Option<&str>) -> Option<String> {
	raw.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

/// Settings for the backend connection and tree layout.
#[derive(Clone, Debug)]
pub struct AppConfig {
	/// Backend origin without a trailing slash (`GIA_PHA_API_BASE`).
	pub api_base: String,
	/// Family tree list endpoint (`GIA_PHA_TREE_PATH`).
	pub tree_path: String,
	/// Member detail endpoint; the id is appended (`GIA_PHA_MEMBER_PATH`).
	pub member_path: String,
	/// Deepest generation laid out below the root (`GIA_PHA_MAX_DEPTH`).
	pub max_depth: usize,
	/// Name that wins a tie when choosing the root (`GIA_PHA_PREFERRED_ROOT`).
	pub preferred_root: Option<String>,
	/// Maximum log level (`GIA_PHA_LOG_LEVEL`).
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base: "http://localhost:8000".into(),
			tree_path: "/api/family-tree".into(),
			member_path: "/api/members".into(),
			max_depth: 64,
			preferred_root: None,
			log_level: Level::Debug,
		}
	}
}

impl AppConfig {
	/// Reads the `GIA_PHA_*` variables captured when the crate was compiled.
	pub fn from_build_env() -> Self {
		Self::from_values(|var| match var {
			"GIA_PHA_API_BASE" => option_env!("GIA_PHA_API_BASE"),
			"GIA_PHA_TREE_PATH" => option_env!("GIA_PHA_TREE_PATH"),
			"GIA_PHA_MEMBER_PATH" => option_env!("GIA_PHA_MEMBER_PATH"),
			"GIA_PHA_MAX_DEPTH" => option_env!("GIA_PHA_MAX_DEPTH"),
			"GIA_PHA_PREFERRED_ROOT" => option_env!("GIA_PHA_PREFERRED_ROOT"),
			"GIA_PHA_LOG_LEVEL" => option_env!("GIA_PHA_LOG_LEVEL"),
			_ => None,
		})
	}

	fn from_values<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
		let defaults = Self::default();
		Self {
			api_base: non_empty(lookup("GIA_PHA_API_BASE"))
				.map(|s| s.trim_end_matches('/').to_string())
				.unwrap_or(defaults.api_base),
			tree_path: non_empty(lookup("GIA_PHA_TREE_PATH")).unwrap_or(defaults.tree_path),
			member_path: non_empty(lookup("GIA_PHA_MEMBER_PATH")).unwrap_or(defaults.member_path),
			max_depth: parse_or("GIA_PHA_MAX_DEPTH", lookup("GIA_PHA_MAX_DEPTH"), defaults.max_depth),
			preferred_root: non_empty(lookup("GIA_PHA_PREFERRED_ROOT")),
			log_level: parse_or("GIA_PHA_LOG_LEVEL", lookup("GIA_PHA_LOG_LEVEL"), defaults.log_level),
		}
	}

	/// Absolute URL for a backend path, or `path` unchanged if it is already absolute.
	pub fn url(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_string();
		}
		if path.starts_with('/') {
			format!("{}{}", self.api_base, path)
		} else {
			format!("{}/{}", self.api_base, path)
		}
	}
}

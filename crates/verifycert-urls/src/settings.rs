//! Breadcrumb settings.
//!
//! Every field has a default, so an empty TOML document yields the stock
//! `Home` / `Unknown Page` trail:
//!
//! ```toml
//! home_label = "Start"
//! home_href = "/"
//! unknown_label = "Not Found"
//! ```

use crate::error::SettingsError;
use serde::Deserialize;
use std::path::Path;

/// Labels and links used by the breadcrumb builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbSettings {
	/// Label of the leading Home entry.
	pub home_label: String,
	/// Link of the leading Home entry. Must be an absolute path.
	pub home_href: String,
	/// Label of the active entry when no route matches.
	pub unknown_label: String,
}

impl Default for BreadcrumbSettings {
	fn default() -> Self {
		Self {
			home_label: "Home".to_string(),
			home_href: "/".to_string(),
			unknown_label: "Unknown Page".to_string(),
		}
	}
}

impl BreadcrumbSettings {
	/// Parses and validates settings from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(text)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the Home entry links to an absolute path.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::InvalidHomeHref`] when `home_href` is empty
	/// or does not start with `/`.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.home_href.starts_with('/') {
			return Err(SettingsError::InvalidHomeHref(self.home_href.clone()));
		}
		Ok(())
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&text)?;
		tracing::info!(path = %path.display(), "Loaded breadcrumb settings");
		Ok(settings)
	}
}

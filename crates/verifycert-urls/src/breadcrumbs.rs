//! Breadcrumb trail derivation.
//!
//! A trail is recomputed from `(path, table)` on every call:
//!
//! 1. Unmatched path: `Home > Unknown Page`.
//! 2. Matched path: `Home` (unless the path is the root), then the parent
//!    route if it exists and is not the root, then the current route.
//!
//! The last item is the only active one and never links anywhere.

use crate::error::SettingsError;
use crate::resolver::RouteMatch;
use crate::settings::BreadcrumbSettings;
use crate::table::RouteTable;
use serde::Serialize;

/// The path whose trail has no separate Home entry.
const ROOT_PATH: &str = "/";

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
	label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	href: Option<String>,
	#[serde(skip_serializing_if = "is_false")]
	active: bool,
}

fn is_false(value: &bool) -> bool {
	!*value
}

impl BreadcrumbItem {
	/// Creates a navigable entry.
	pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: Some(href.into()),
			active: false,
		}
	}

	/// Creates the active entry for the current page.
	pub fn current(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: None,
			active: true,
		}
	}

	/// Returns the label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the link target. `None` for the active entry.
	pub fn href(&self) -> Option<&str> {
		self.href.as_deref()
	}

	/// Returns whether this entry is the current page.
	pub fn is_active(&self) -> bool {
		self.active
	}
}

/// Builds breadcrumb trails from a route table.
#[derive(Debug, Clone)]
pub struct BreadcrumbBuilder<'a> {
	table: &'a RouteTable,
	settings: BreadcrumbSettings,
}

impl<'a> BreadcrumbBuilder<'a> {
	/// Creates a builder with default settings.
	pub fn new(table: &'a RouteTable) -> Self {
		Self {
			table,
			settings: BreadcrumbSettings::default(),
		}
	}

	/// Creates a builder with the given settings.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::InvalidHomeHref`] when the Home link is not
	/// an absolute path.
	pub fn with_settings(
		table: &'a RouteTable,
		settings: BreadcrumbSettings,
	) -> Result<Self, SettingsError> {
		settings.validate()?;
		Ok(Self { table, settings })
	}

	/// Returns the route table.
	pub fn table(&self) -> &'a RouteTable {
		self.table
	}

	/// Returns the settings.
	pub fn settings(&self) -> &BreadcrumbSettings {
		&self.settings
	}

	/// Resolves `path` and builds its trail.
	pub fn build(&self, path: &str) -> Vec<BreadcrumbItem> {
		match self.table.match_route(path) {
			Some(route_match) => self.build_matched(path, &route_match),
			None => {
				tracing::debug!(path, "Falling back to unknown-page breadcrumbs");
				vec![
					self.home_link(),
					BreadcrumbItem::current(self.settings.unknown_label.clone()),
				]
			}
		}
	}

	fn build_matched(&self, path: &str, route_match: &RouteMatch<'_>) -> Vec<BreadcrumbItem> {
		let mut trail = Vec::with_capacity(3);

		if path != ROOT_PATH {
			trail.push(self.home_link());
		}

		// Parents are static routes, so their label needs no parameters.
		// A route naming itself as parent would link to the current page.
		if let Some(parent) = route_match
			.config
			.parent()
			.filter(|&parent| parent != ROOT_PATH && parent != route_match.config.path())
			.and_then(|parent| self.table.find_by_path(parent))
			&& let Some(label) = parent.label().as_static()
		{
			trail.push(BreadcrumbItem::link(label, parent.path()));
		}

		trail.push(BreadcrumbItem::current(route_match.label()));
		trail
	}

	fn home_link(&self) -> BreadcrumbItem {
		BreadcrumbItem::link(
			self.settings.home_label.clone(),
			self.settings.home_href.clone(),
		)
	}
}

//! Current-location tracking and the breadcrumbs hook.
//!
//! [`Location`] is the shared "where are we" handle a navigation layer
//! updates. [`use_breadcrumbs`] binds a trail to it: reading the hook
//! rebuilds the trail whenever the path differs from the last read.

use crate::breadcrumbs::{BreadcrumbBuilder, BreadcrumbItem};
use crate::error::SettingsError;
use crate::settings::BreadcrumbSettings;
use crate::table::RouteTable;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

#[derive(Debug)]
struct LocationState {
	path: String,
	revision: u64,
}

/// The current navigation path, shared between clones.
#[derive(Debug, Clone)]
pub struct Location {
	state: Arc<RwLock<LocationState>>,
}

impl Default for Location {
	fn default() -> Self {
		Self::new("/")
	}
}

impl Location {
	/// Creates a location at `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			state: Arc::new(RwLock::new(LocationState {
				path: path.into(),
				revision: 0,
			})),
		}
	}

	/// Returns the current path.
	pub fn path(&self) -> String {
		self.state.read().path.clone()
	}

	/// Returns how many times the path has changed.
	pub fn revision(&self) -> u64 {
		self.state.read().revision
	}

	/// Moves to `path`. Navigating to the current path is a no-op.
	pub fn navigate(&self, path: impl Into<String>) {
		let path = path.into();
		let mut state = self.state.write();
		if state.path == path {
			return;
		}
		tracing::trace!(from = %state.path, to = %path, "Location changed");
		state.path = path;
		state.revision += 1;
	}
}

/// A breadcrumb trail bound to a [`Location`].
#[derive(Debug)]
pub struct Breadcrumbs<'a> {
	location: Location,
	builder: BreadcrumbBuilder<'a>,
	cache: Mutex<Option<(String, Vec<BreadcrumbItem>)>>,
}

impl<'a> Breadcrumbs<'a> {
	/// Returns the trail for the location's current path.
	///
	/// The trail is rebuilt only when the path changed since the last call;
	/// either way the result equals a fresh build for that path.
	pub fn get(&self) -> Vec<BreadcrumbItem> {
		let path = self.location.path();
		let mut cache = self.cache.lock();

		if let Some((cached_path, items)) = cache.as_ref()
			&& *cached_path == path
		{
			return items.clone();
		}

		let items = self.builder.build(&path);
		*cache = Some((path, items.clone()));
		items
	}

	/// Returns the bound location.
	pub fn location(&self) -> &Location {
		&self.location
	}

	/// Returns the underlying builder.
	pub fn builder(&self) -> &BreadcrumbBuilder<'a> {
		&self.builder
	}
}

/// Binds a breadcrumb trail to `location` using default settings.
pub fn use_breadcrumbs<'a>(location: &Location, table: &'a RouteTable) -> Breadcrumbs<'a> {
	use_breadcrumbs_with(location, BreadcrumbBuilder::new(table))
}

/// Binds a breadcrumb trail to `location` using the given settings.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidHomeHref`] when the Home link is not an
/// absolute path.
pub fn use_breadcrumbs_with_settings<'a>(
	location: &Location,
	table: &'a RouteTable,
	settings: BreadcrumbSettings,
) -> Result<Breadcrumbs<'a>, SettingsError> {
	let builder = BreadcrumbBuilder::with_settings(table, settings)?;
	Ok(use_breadcrumbs_with(location, builder))
}

fn use_breadcrumbs_with<'a>(location: &Location, builder: BreadcrumbBuilder<'a>) -> Breadcrumbs<'a> {
	Breadcrumbs {
		location: location.clone(),
		builder,
		cache: Mutex::new(None),
	}
}

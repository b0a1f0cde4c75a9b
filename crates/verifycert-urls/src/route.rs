//! Route descriptors and their labels.

use crate::error::{RouterError, RouterResult};
use crate::pattern::{PathParams, PathPattern};
use std::sync::Arc;

/// Type alias for label generator functions.
pub type LabelFn = Arc<dyn Fn(&PathParams) -> String + Send + Sync>;

/// The human-readable label of a route.
///
/// Static paths carry a fixed label; parameterized paths derive theirs
/// from the captured parameters.
#[derive(Clone)]
pub enum Label {
	/// A fixed label.
	Static(String),
	/// A label generated from captured parameters.
	Dynamic(LabelFn),
}

impl Label {
	/// Creates a fixed label.
	pub fn fixed(text: impl Into<String>) -> Self {
		Self::Static(text.into())
	}

	/// Creates a generated label.
	pub fn generated<F>(f: F) -> Self
	where
		F: Fn(&PathParams) -> String + Send + Sync + 'static,
	{
		Self::Dynamic(Arc::new(f))
	}

	/// Returns whether the label is generated from parameters.
	pub fn is_dynamic(&self) -> bool {
		matches!(self, Self::Dynamic(_))
	}

	/// Returns the fixed text, if this is a static label.
	pub fn as_static(&self) -> Option<&str> {
		match self {
			Self::Static(text) => Some(text),
			Self::Dynamic(_) => None,
		}
	}

	/// Produces the label text for `params`.
	pub fn render(&self, params: &PathParams) -> String {
		match self {
			Self::Static(text) => text.clone(),
			Self::Dynamic(generate) => generate(params),
		}
	}
}

impl std::fmt::Debug for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

/// Generated labels compare by identity: two descriptors share a label only
/// when they hold the same generator.
impl PartialEq for Label {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Static(a), Self::Static(b)) => a == b,
			(Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// An unvalidated route definition, compiled by
/// [`RouteTableBuilder::build`](crate::table::RouteTableBuilder::build).
#[derive(Debug, Clone)]
pub struct RouteDef {
	path: String,
	label: Label,
	parent: Option<String>,
	name: Option<String>,
}

impl RouteDef {
	/// Defines a route with a fixed label.
	pub fn fixed(path: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			label: Label::fixed(label),
			parent: None,
			name: None,
		}
	}

	/// Defines a parameterized route whose label is generated from the
	/// captured parameters.
	pub fn generated<F>(path: impl Into<String>, generate: F) -> Self
	where
		F: Fn(&PathParams) -> String + Send + Sync + 'static,
	{
		Self {
			path: path.into(),
			label: Label::generated(generate),
			parent: None,
			name: None,
		}
	}

	/// Sets the path of the route shown as this route's breadcrumb parent.
	pub fn parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}

	/// Names the route for reverse lookups.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub(crate) fn compile(self) -> RouterResult<RouteDescriptor> {
		let pattern = PathPattern::new(&self.path).map_err(|source| RouterError::InvalidPattern {
			path: self.path.clone(),
			source,
		})?;

		if pattern.is_exact() == self.label.is_dynamic() {
			return Err(RouterError::LabelMismatch { path: self.path });
		}

		Ok(RouteDescriptor {
			pattern,
			label: self.label,
			parent: self.parent,
			name: self.name,
		})
	}
}

/// A compiled route table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
	pattern: PathPattern,
	label: Label,
	parent: Option<String>,
	name: Option<String>,
}

impl RouteDescriptor {
	/// Returns the path pattern as declared.
	pub fn path(&self) -> &str {
		self.pattern.as_str()
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the label.
	pub fn label(&self) -> &Label {
		&self.label
	}

	/// Returns whether the path contains placeholders.
	///
	/// Always agrees with [`Label::is_dynamic`].
	pub fn is_dynamic(&self) -> bool {
		!self.pattern.is_exact()
	}

	/// Returns the declared parent path.
	pub fn parent(&self) -> Option<&str> {
		self.parent.as_deref()
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Produces this route's label for `params`.
	pub fn render_label(&self, params: &PathParams) -> String {
		self.label.render(params)
	}
}

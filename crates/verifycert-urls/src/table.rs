//! The ordered route table.
//!
//! A table is built once, validated, and then only read. Declaration order
//! is the sole tie-break between patterns that could match the same path.

use crate::error::{RouterError, RouterResult};
use crate::pattern::PathParams;
use crate::route::{RouteDef, RouteDescriptor};
use std::collections::HashMap;

/// An immutable, ordered list of route descriptors.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<RouteDescriptor>,
	named_routes: HashMap<String, usize>,
}

impl RouteTable {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns `true` when the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Iterates routes in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, RouteDescriptor> {
		self.routes.iter()
	}

	/// Finds the first route whose declared path equals `path` exactly.
	///
	/// This compares pattern text, it does not match: `find_by_path("/verify/:tokenId")`
	/// finds the parameterized route, `find_by_path("/verify/1")` finds nothing.
	pub fn find_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
		self.routes.iter().find(|route| route.path() == path)
	}

	/// Finds a route by name.
	pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
		self.named_routes.get(name).map(|&index| &self.routes[index])
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Returns the routes whose parent reference names no route in the table.
	///
	/// These are tolerated: breadcrumbs for such routes simply omit the
	/// intermediate entry.
	pub fn dangling_parents(&self) -> Vec<&RouteDescriptor> {
		self.routes
			.iter()
			.filter(|route| {
				route
					.parent()
					.is_some_and(|parent| self.find_by_path(parent).is_none())
			})
			.collect()
	}

	/// Generates a concrete path for the named route.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidRouteName`] for unknown names and
	/// [`RouterError::MissingParameter`] when a placeholder has no value.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> RouterResult<String> {
		let route = self
			.find_by_name(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let params: PathParams = params.iter().copied().collect();
		route
			.pattern()
			.reverse(&params)
			.map_err(|param| RouterError::MissingParameter {
				route: name.to_string(),
				param: param.to_string(),
			})
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a RouteDescriptor;
	type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Collects route definitions and compiles them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
	defs: Vec<RouteDef>,
}

impl RouteTableBuilder {
	/// Appends a route. Earlier routes take precedence.
	pub fn route(mut self, def: RouteDef) -> Self {
		self.defs.push(def);
		self
	}

	/// Appends several routes in order.
	pub fn routes(mut self, defs: impl IntoIterator<Item = RouteDef>) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Compiles and validates the table.
	///
	/// Dangling and self-referencing parents are logged and kept. A
	/// repeated route name is logged and the earlier route keeps it.
	///
	/// # Errors
	///
	/// Fails on the first malformed pattern, label/path mismatch, or parent
	/// reference naming a parameterized route.
	pub fn build(self) -> RouterResult<RouteTable> {
		let routes = self
			.defs
			.into_iter()
			.map(RouteDef::compile)
			.collect::<RouterResult<Vec<_>>>()?;

		let mut named_routes = HashMap::new();
		for (index, route) in routes.iter().enumerate() {
			let Some(name) = route.name() else {
				continue;
			};
			if named_routes.contains_key(name) {
				tracing::warn!(
					route_name = name,
					path = route.path(),
					"Duplicate route name ignored; the earlier route keeps it"
				);
				continue;
			}
			named_routes.insert(name.to_string(), index);
		}

		let table = RouteTable {
			routes,
			named_routes,
		};

		for route in &table.routes {
			let Some(parent) = route.parent() else {
				continue;
			};
			if parent == route.path() {
				tracing::warn!(
					path = route.path(),
					"Route names itself as parent; breadcrumb entry will be omitted"
				);
				continue;
			}
			match table.find_by_path(parent) {
				Some(target) if target.is_dynamic() => {
					return Err(RouterError::DynamicParent {
						path: route.path().to_string(),
						parent: parent.to_string(),
					});
				}
				Some(_) => {}
				None => {
					tracing::warn!(
						path = route.path(),
						parent,
						"Route parent does not name any route; breadcrumb entry will be omitted"
					);
				}
			}
		}

		tracing::debug!(routes = table.len(), "Route table built");
		Ok(table)
	}
}

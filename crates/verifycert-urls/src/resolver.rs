//! Path resolution against a route table.

use crate::pattern::PathParams;
use crate::route::RouteDescriptor;
use crate::table::RouteTable;

/// A matched route with extracted parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
	/// The matched route.
	pub config: &'a RouteDescriptor,
	/// Extracted path parameters. Empty for static routes.
	pub params: PathParams,
}

impl RouteMatch<'_> {
	/// Produces the label of the matched route for its parameters.
	pub fn label(&self) -> String {
		self.config.render_label(&self.params)
	}
}

impl RouteTable {
	/// Resolves `path` to the first route that matches it.
	///
	/// Routes are tried in declaration order and static routes get no
	/// priority over parameterized ones: if `/verify/:tokenId` is declared
	/// before `/verify/new`, the path `/verify/new` resolves to the former.
	pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
		let route_match = self.iter().find_map(|route| {
			route
				.pattern()
				.matches(path)
				.map(|params| RouteMatch {
					config: route,
					params,
				})
		});

		match &route_match {
			Some(m) => tracing::trace!(path, route = m.config.path(), "Route matched"),
			None => tracing::debug!(path, "No route matches path"),
		}
		route_match
	}

	/// Returns the first route matching `path` without extracting parameters.
	///
	/// Follows the same precedence as [`RouteTable::match_route`].
	pub fn get_route_config(&self, path: &str) -> Option<&RouteDescriptor> {
		self.iter().find(|route| route.pattern().is_match(path))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::RouteDef;
	use rstest::{fixture, rstest};

	#[fixture]
	fn table() -> RouteTable {
		RouteTable::builder()
			.route(RouteDef::fixed("/", "Home"))
			.route(RouteDef::fixed("/verify", "Verify Certificate"))
			.route(
				RouteDef::generated("/verify/:tokenId", |p| {
					format!("Verify Certificate #{}", p.get_or_empty("tokenId"))
				})
				.parent("/verify"),
			)
			.route(RouteDef::generated("/certificate/:tokenId", |p| {
				format!("Certificate #{}", p.get_or_empty("tokenId"))
			}))
			.route(RouteDef::generated("/user/:userId/post/:postId", |p| {
				format!("Post {}", p.get_or_empty("postId"))
			}))
			.build()
			.unwrap()
	}

	#[rstest]
	#[case("/")]
	#[case("/verify")]
	fn test_static_exact_match(table: RouteTable, #[case] path: &str) {
		let m = table.match_route(path).unwrap();
		assert_eq!(m.config.path(), path);
		assert!(m.params.is_empty());
	}

	#[rstest]
	fn test_dynamic_extraction(table: RouteTable) {
		let m = table.match_route("/certificate/456").unwrap();
		assert_eq!(m.config.path(), "/certificate/:tokenId");
		assert_eq!(m.params.get("tokenId"), Some("456"));
		assert_eq!(m.label(), "Certificate #456");
	}

	#[rstest]
	fn test_multi_parameter_extraction(table: RouteTable) {
		let m = table.match_route("/user/456/post/789").unwrap();
		let pairs: Vec<(&str, &str)> = m.params.iter().collect();
		assert_eq!(pairs, vec![("userId", "456"), ("postId", "789")]);
	}

	#[rstest]
	#[case("/totally-unknown")]
	#[case("/verify/")]
	#[case("/verify/1/2")]
	#[case("")]
	fn test_no_match(table: RouteTable, #[case] path: &str) {
		assert!(table.match_route(path).is_none());
		assert!(table.get_route_config(path).is_none());
	}

	#[rstest]
	fn test_get_route_config(table: RouteTable) {
		assert_eq!(
			table.get_route_config("/verify/9").map(RouteDescriptor::path),
			Some("/verify/:tokenId")
		);
	}

	#[rstest]
	fn test_earlier_dynamic_route_wins_over_later_static() {
		let table = RouteTable::builder()
			.route(RouteDef::generated("/verify/:tokenId", |_| "dynamic".to_string()))
			.route(RouteDef::fixed("/verify/new", "static"))
			.build()
			.unwrap();

		let m = table.match_route("/verify/new").unwrap();
		assert_eq!(m.config.path(), "/verify/:tokenId");
		assert_eq!(m.params.get("tokenId"), Some("new"));
		assert_eq!(
			table.get_route_config("/verify/new").map(RouteDescriptor::path),
			Some("/verify/:tokenId")
		);
	}

	#[rstest]
	fn test_earlier_static_route_wins_over_later_dynamic() {
		let table = RouteTable::builder()
			.route(RouteDef::fixed("/verify/new", "static"))
			.route(RouteDef::generated("/verify/:tokenId", |_| "dynamic".to_string()))
			.build()
			.unwrap();

		assert_eq!(table.match_route("/verify/new").unwrap().label(), "static");
		assert_eq!(table.match_route("/verify/7").unwrap().label(), "dynamic");
	}

	#[rstest]
	fn test_match_is_idempotent(table: RouteTable) {
		let first = table.match_route("/verify/123");
		let second = table.match_route("/verify/123");
		assert_eq!(first, second);
	}
}

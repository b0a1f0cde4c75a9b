//! The VerifyCert route table and its process-wide accessors.
//!
//! The table is built once, on first use, and is read-only afterwards.
//! Code that needs a different table (tests in particular) should build its
//! own with [`verifycert_routes`] or [`RouteTable::builder`] and use the
//! engine API directly instead of these accessors.

use once_cell::sync::Lazy;
use verifycert_urls::{
	BreadcrumbBuilder, BreadcrumbItem, Breadcrumbs, Location, RouteDef, RouteDescriptor,
	RouteMatch, RouteTable, RouterResult,
};

static ROUTES: Lazy<RouteTable> =
	Lazy::new(|| verifycert_routes().expect("VerifyCert route table must be well-formed"));

/// Builds the VerifyCert route table.
///
/// Order matters: the first matching route wins.
pub fn verifycert_routes() -> RouterResult<RouteTable> {
	RouteTable::builder()
		.routes([
			RouteDef::fixed("/", "Home").name("home"),
			RouteDef::fixed("/verify", "Verify Certificate").name("verify"),
			RouteDef::generated("/verify/:tokenId", |p| {
				format!("Verify Certificate #{}", p.get_or_empty("tokenId"))
			})
			.parent("/verify")
			.name("verify-detail"),
			RouteDef::generated("/certificate/:tokenId", |p| {
				format!("Certificate #{}", p.get_or_empty("tokenId"))
			})
			.name("certificate-detail"),
			RouteDef::fixed("/issuer", "Issuer Dashboard").name("issuer"),
			RouteDef::fixed("/demo", "Demo").name("demo"),
			RouteDef::fixed("/demo/navigation", "Navigation Demo")
				.parent("/demo")
				.name("demo-navigation"),
			RouteDef::fixed("/demo/feedback", "Feedback Animations Demo")
				.parent("/demo")
				.name("demo-feedback"),
			RouteDef::fixed("/demo/theme", "Theme Demo")
				.parent("/demo")
				.name("demo-theme"),
			RouteDef::fixed("/pwa-test", "PWA Test").name("pwa-test"),
		])
		.build()
}

/// Returns the shared VerifyCert route table.
pub fn route_table() -> &'static RouteTable {
	&ROUTES
}

/// Returns the route for `path` without extracting parameters.
pub fn get_route_config(path: &str) -> Option<&'static RouteDescriptor> {
	ROUTES.get_route_config(path)
}

/// Resolves `path` to its route and parameters.
pub fn match_route(path: &str) -> Option<RouteMatch<'static>> {
	ROUTES.match_route(path)
}

/// Builds the breadcrumb trail for `path`.
pub fn breadcrumbs_for(path: &str) -> Vec<BreadcrumbItem> {
	BreadcrumbBuilder::new(&ROUTES).build(path)
}

/// Binds a breadcrumb trail to the current location.
pub fn use_breadcrumbs(location: &Location) -> Breadcrumbs<'static> {
	verifycert_urls::use_breadcrumbs(location, &ROUTES)
}

/// Generates the path of a named route, e.g. `reverse("verify-detail", &[("tokenId", "7")])`.
pub fn reverse(name: &str, params: &[(&str, &str)]) -> RouterResult<String> {
	ROUTES.reverse(name, params)
}

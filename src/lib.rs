//! # VerifyCert
//!
//! Navigation routing for the VerifyCert certificate issuing and
//! verification application.
//!
//! The matching engine lives in [`urls`] (`verifycert-urls`); this crate
//! owns the application's route table and exposes it through
//! [`get_route_config`], [`match_route`] and [`use_breadcrumbs`].
//!
//! ```
//! use verifycert::{Location, match_route, use_breadcrumbs};
//!
//! let m = match_route("/certificate/456").unwrap();
//! assert_eq!(m.params.get("tokenId"), Some("456"));
//!
//! let location = Location::new("/verify/123");
//! let trail = use_breadcrumbs(&location).get();
//! assert_eq!(trail.last().map(|item| item.label()), Some("Verify Certificate #123"));
//! ```

pub mod routes;

pub use verifycert_urls as urls;

pub use routes::{
	breadcrumbs_for, get_route_config, match_route, reverse, route_table, use_breadcrumbs,
	verifycert_routes,
};
pub use verifycert_urls::{
	BreadcrumbItem, BreadcrumbSettings, Location, PathParams, RouteDescriptor, RouteMatch,
	RouterError,
};

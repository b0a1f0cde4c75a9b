//! Route matching and breadcrumb derivation for VerifyCert.
//!
//! This crate resolves navigation paths against a declarative route table
//! and turns the result into a breadcrumb trail:
//!
//! - [`pattern`]: `:name` path patterns and parameter extraction
//! - [`route`] / [`table`]: route descriptors and the ordered, validated table
//! - [`resolver`]: first-match resolution in declaration order
//! - [`breadcrumbs`]: `Home > parent > current` trails
//! - [`location`]: the `use_breadcrumbs` hook bound to a current location
//!
//! ## Example
//!
//! ```
//! use verifycert_urls::{BreadcrumbBuilder, RouteDef, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(RouteDef::fixed("/", "Home"))
//!     .route(RouteDef::fixed("/verify", "Verify Certificate"))
//!     .route(
//!         RouteDef::generated("/verify/:tokenId", |p| {
//!             format!("Verify Certificate #{}", p.get_or_empty("tokenId"))
//!         })
//!         .parent("/verify"),
//!     )
//!     .build()?;
//!
//! let trail = BreadcrumbBuilder::new(&table).build("/verify/123");
//! let labels: Vec<&str> = trail.iter().map(|item| item.label()).collect();
//! assert_eq!(labels, ["Home", "Verify Certificate", "Verify Certificate #123"]);
//! # Ok::<(), verifycert_urls::RouterError>(())
//! ```

pub mod breadcrumbs;
pub mod error;
pub mod location;
pub mod pattern;
pub mod resolver;
pub mod route;
pub mod settings;
pub mod table;

pub use breadcrumbs::{BreadcrumbBuilder, BreadcrumbItem};
pub use error::{PatternError, RouterError, RouterResult, SettingsError};
pub use location::{Breadcrumbs, Location, use_breadcrumbs, use_breadcrumbs_with_settings};
pub use pattern::{PathParams, PathPattern};
pub use resolver::RouteMatch;
pub use route::{Label, LabelFn, RouteDef, RouteDescriptor};
pub use settings::BreadcrumbSettings;
pub use table::{RouteTable, RouteTableBuilder};

pub mod prelude {
	pub use crate::{
		BreadcrumbBuilder, BreadcrumbItem, Location, PathParams, RouteDef, RouteTable,
		use_breadcrumbs,
	};
}

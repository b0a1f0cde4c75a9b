//! Breadcrumb trail properties
//!
//! Checks the shape every produced trail must have, over generated paths:
//! - exactly one active item, always last, never linked
//! - every other item linked and inactive
//! - Home leads every trail except the root's
//! - building twice yields the same trail

use proptest::prelude::*;
use rstest::*;
use verifycert_urls::{BreadcrumbBuilder, BreadcrumbItem, RouteDef, RouteTable};

// ============================================================================
// Fixtures
// ============================================================================

fn verifycert_table() -> RouteTable {
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
		.route(RouteDef::fixed("/issuer", "Issuer Dashboard"))
		.route(RouteDef::generated("/user/:userId/post/:postId", |p| {
			format!("Post {} by {}", p.get_or_empty("postId"), p.get_or_empty("userId"))
		}))
		.route(RouteDef::fixed("/demo", "Demo"))
		.route(RouteDef::fixed("/demo/theme", "Theme Demo").parent("/demo"))
		.route(RouteDef::fixed("/orphan", "Orphan").parent("/gone"))
		.build()
		.unwrap()
}

#[fixture]
fn table() -> RouteTable {
	verifycert_table()
}

fn assert_trail_shape(path: &str, trail: &[BreadcrumbItem]) {
	assert!(!trail.is_empty(), "empty trail for {path}");

	let active: Vec<usize> = trail
		.iter()
		.enumerate()
		.filter(|(_, item)| item.is_active())
		.map(|(index, _)| index)
		.collect();
	assert_eq!(active, vec![trail.len() - 1], "active items for {path}");

	let (last, rest) = trail.split_last().unwrap();
	assert_eq!(last.href(), None, "active item links for {path}");
	for item in rest {
		assert!(!item.is_active());
		assert!(
			item.href().is_some_and(|href| !href.is_empty()),
			"unlinked item {:?} for {path}",
			item
		);
	}

	if path == "/" {
		assert!(trail.iter().all(|item| item.href() != Some("/")));
	} else {
		assert_eq!(trail[0], BreadcrumbItem::link("Home", "/"));
	}
}

// ============================================================================
// Happy Path
// ============================================================================

#[rstest]
#[case("/", vec![BreadcrumbItem::current("Home")])]
#[case("/verify", vec![BreadcrumbItem::link("Home", "/"), BreadcrumbItem::current("Verify Certificate")])]
#[case(
	"/verify/123",
	vec![
		BreadcrumbItem::link("Home", "/"),
		BreadcrumbItem::link("Verify Certificate", "/verify"),
		BreadcrumbItem::current("Verify Certificate #123"),
	]
)]
#[case("/certificate/456", vec![BreadcrumbItem::link("Home", "/"), BreadcrumbItem::current("Certificate #456")])]
#[case(
	"/demo/theme",
	vec![
		BreadcrumbItem::link("Home", "/"),
		BreadcrumbItem::link("Demo", "/demo"),
		BreadcrumbItem::current("Theme Demo"),
	]
)]
#[case("/user/456/post/789", vec![BreadcrumbItem::link("Home", "/"), BreadcrumbItem::current("Post 789 by 456")])]
fn test_known_trails(table: RouteTable, #[case] path: &str, #[case] expected: Vec<BreadcrumbItem>) {
	let trail = BreadcrumbBuilder::new(&table).build(path);
	assert_trail_shape(path, &trail);
	assert_eq!(trail, expected);
}

// ============================================================================
// Error Path
// ============================================================================

#[rstest]
#[case("/totally-unknown")]
#[case("/verify/")]
#[case("/certificate")]
#[case("/user/1/post")]
fn test_unknown_trails(table: RouteTable, #[case] path: &str) {
	let trail = BreadcrumbBuilder::new(&table).build(path);
	assert_eq!(
		trail,
		vec![
			BreadcrumbItem::link("Home", "/"),
			BreadcrumbItem::current("Unknown Page"),
		]
	);
}

#[rstest]
fn test_dangling_parent_soft_failure(table: RouteTable) {
	let trail = BreadcrumbBuilder::new(&table).build("/orphan");
	assert_eq!(
		trail,
		vec![
			BreadcrumbItem::link("Home", "/"),
			BreadcrumbItem::current("Orphan"),
		]
	);
}

// ============================================================================
// Property-based
// ============================================================================

fn path_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("/".to_string()),
		Just("/verify".to_string()),
		Just("/issuer".to_string()),
		Just("/demo/theme".to_string()),
		"[a-zA-Z0-9]{1,12}".prop_map(|id| format!("/verify/{id}")),
		"[a-zA-Z0-9]{1,12}".prop_map(|id| format!("/certificate/{id}")),
		("[0-9]{1,6}", "[0-9]{1,6}").prop_map(|(u, p)| format!("/user/{u}/post/{p}")),
		"/[a-z/]{0,20}",
	]
}

proptest! {
	#[test]
	fn prop_exactly_one_active_item(path in path_strategy()) {
		let table = verifycert_table();
		let trail = BreadcrumbBuilder::new(&table).build(&path);
		assert_trail_shape(&path, &trail);
	}

	#[test]
	fn prop_building_is_idempotent(path in path_strategy()) {
		let table = verifycert_table();
		let builder = BreadcrumbBuilder::new(&table);
		prop_assert_eq!(builder.build(&path), builder.build(&path));
		prop_assert_eq!(table.match_route(&path), table.match_route(&path));
	}

	#[test]
	fn prop_verify_label_carries_token(token in "[a-zA-Z0-9]{1,16}") {
		let table = verifycert_table();
		let trail = BreadcrumbBuilder::new(&table).build(&format!("/verify/{token}"));
		prop_assert_eq!(trail.len(), 3);
		let expected = format!("Verify Certificate #{token}");
		prop_assert_eq!(trail[2].label(), expected.as_str());
	}
}

//! Integration tests for the hash router.
//!
//! These tests drive the router through the native hash stand-in:
//! 1. Hash normalization into the path cell
//! 2. Route table construction at init
//! 3. Rendering primitives (RouterLink, RouterView)
//! 4. Re-render on navigation via the reactive substrate
//! 5. End-to-end navigation scenarios, including the unknown-path fallback

#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use hashroute::component::{Component, View};
use hashroute::reactive::Effect;
use hashroute::router::hash;
use hashroute::{Router, RouterLink, RouterOptions, RouterView};
use rstest::rstest;
use serial_test::serial;

fn home_view() -> View {
	View::text("Home")
}

fn about_view() -> View {
	View::text("About")
}

fn not_found_view() -> View {
	View::text("404 Not Found")
}

fn two_route_options() -> RouterOptions {
	RouterOptions::new()
		.route("/", home_view)
		.route("/about", about_view)
}

#[rstest]
#[case("", "/")]
#[case("#", "/")]
#[case("#/", "/")]
#[case("#/about", "/about")]
#[case("#/users/42", "/users/42")]
#[serial(hash)]
fn hash_values_normalize_into_the_path_cell(#[case] raw: &str, #[case] expected: &str) {
	hash::set(raw);
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	assert_eq!(router.current_path().get_untracked(), expected);
}

#[test]
#[serial(hash)]
fn current_path_defaults_to_root_before_init() {
	let router = Router::new(two_route_options());
	assert_eq!(router.current_path().get_untracked(), "/");
}

#[test]
#[serial(hash)]
fn init_maps_exactly_the_unique_input_paths() {
	hash::set("");
	let router = Rc::new(Router::new(two_route_options()));

	assert_eq!(router.route_count(), 0);
	router.init().unwrap();

	assert_eq!(router.route_count(), 2);
	assert!(router.has_path("/"));
	assert!(router.has_path("/about"));
	assert!(!router.has_path("/missing"));
}

#[test]
#[serial(hash)]
fn link_renders_marker_prefixed_anchor_with_unchanged_content() {
	let link = RouterLink::new("/about", "About");
	assert_eq!(
		link.render().render_to_string(),
		"<a href=\"#/about\">About</a>"
	);
}

#[test]
#[serial(hash)]
fn view_renders_the_component_registered_for_the_current_path() {
	hash::set("#/about");
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	let view = RouterView::new(Rc::clone(&router));
	assert_eq!(view.render().render_to_string(), "About");
}

#[test]
#[serial(hash)]
fn navigation_reruns_effects_reading_the_path_cell() {
	hash::set("");
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	let rendered = Rc::new(RefCell::new(Vec::new()));

	let rendered_in_effect = rendered.clone();
	let router_in_effect = Rc::clone(&router);
	let _effect = Effect::new(move || {
		rendered_in_effect
			.borrow_mut()
			.push(router_in_effect.render_current().render_to_string());
	});

	router.push("/about").unwrap();

	assert_eq!(*rendered.borrow(), vec!["Home", "About"]);
}

/// End-to-end scenario 1: initial hash `""` renders the root component.
#[test]
#[serial(hash)]
fn initial_empty_hash_renders_home() {
	hash::set("");
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	assert_eq!(router.current_path().get_untracked(), "/");
	assert_eq!(
		RouterView::new(Rc::clone(&router)).render().render_to_string(),
		"Home"
	);
}

/// End-to-end scenario 2: a hash change to `#/about` renders About.
#[test]
#[serial(hash)]
fn hash_change_to_about_renders_about() {
	hash::set("");
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	router.push("/about").unwrap();

	assert_eq!(router.current_path().get_untracked(), "/about");
	assert_eq!(
		RouterView::new(Rc::clone(&router)).render().render_to_string(),
		"About"
	);
}

/// End-to-end scenario 3: a hash change to an unregistered path still
/// updates the cell; rendering falls back to nothing, or to the designated
/// not-found component when one is configured.
#[test]
#[serial(hash)]
fn hash_change_to_missing_path_uses_the_fallback() {
	hash::set("");
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	router.push("/missing").unwrap();
	assert_eq!(router.current_path().get_untracked(), "/missing");
	assert_eq!(router.render_current().render_to_string(), "");

	hash::set("");
	let router = Rc::new(Router::new(two_route_options().not_found(not_found_view)));
	router.init().unwrap();

	router.push("/missing").unwrap();
	assert_eq!(
		router.render_current().render_to_string(),
		"404 Not Found"
	);
}

#[test]
#[serial(hash)]
fn duplicate_paths_keep_the_later_component() {
	hash::set("#/about");
	let router = Rc::new(Router::new(
		two_route_options().route("/about", || View::text("About, revised")),
	));
	router.init().unwrap();

	assert_eq!(router.route_count(), 2);
	assert_eq!(router.render_current().render_to_string(), "About, revised");
}

#[test]
#[serial(hash)]
fn prebuilt_route_tables_are_stored_unprocessed() {
	use hashroute::RouteEntry;

	let options = RouterOptions::with_routes(vec![
		RouteEntry::new("/", home_view),
		RouteEntry::new("/about", about_view),
	]);
	assert_eq!(options.routes().len(), 2);
	assert_eq!(options.routes()[0].path(), "/");

	let router = Router::new(options);
	assert_eq!(router.route_count(), 0);
}

//! Browser-side navigation tests.
//!
//! These run under `wasm-pack test --headless --chrome` (or firefox) and
//! exercise the real `location.hash`, the event wiring, and DOM remounting.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use hashroute::component::{Component, View};
use hashroute::{Router, RouterLink, RouterOptions, RouterView};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn two_route_options() -> RouterOptions {
	RouterOptions::new()
		.route("/", || View::text("Home"))
		.route("/about", || View::text("About"))
}

fn fresh_container() -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let container = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn reset_hash() {
	web_sys::window().unwrap().location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
fn push_writes_the_location_hash() {
	reset_hash();
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	router.push("/about").unwrap();

	let hash = web_sys::window().unwrap().location().hash().unwrap();
	assert_eq!(hash, "#/about");
	assert_eq!(router.current_path().get_untracked(), "/about");
}

#[wasm_bindgen_test]
fn mounted_view_tracks_navigation() {
	reset_hash();
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	let container = fresh_container();
	let view = RouterView::new(Rc::clone(&router));
	view.mount(&container).unwrap();

	assert_eq!(container.text_content().unwrap(), "Home");

	router.push("/about").unwrap();
	assert_eq!(container.text_content().unwrap(), "About");

	router.push("/").unwrap();
	assert_eq!(container.text_content().unwrap(), "Home");
}

#[wasm_bindgen_test]
fn link_mounts_as_an_anchor() {
	let container = fresh_container();
	let link = RouterLink::new("/about", "About");
	link.render().mount(&container).unwrap();

	let anchor = container.query_selector("a").unwrap().unwrap();
	assert_eq!(anchor.get_attribute("href").unwrap(), "#/about");
	assert_eq!(anchor.text_content().unwrap(), "About");
}

#[wasm_bindgen_test]
fn unknown_path_clears_the_view() {
	reset_hash();
	let router = Rc::new(Router::new(two_route_options()));
	router.init().unwrap();

	let container = fresh_container();
	RouterView::new(Rc::clone(&router)).mount(&container).unwrap();
	assert_eq!(container.text_content().unwrap(), "Home");

	router.push("/missing").unwrap();
	assert_eq!(router.current_path().get_untracked(), "/missing");
	assert_eq!(container.text_content().unwrap(), "");
}

//! Hashroute - Hash-Fragment Router for Reactive WASM UIs
//!
//! A minimal client-side router: URL hash fragments map to components, and a
//! designated placeholder re-renders when the hash changes. Navigation rides
//! the browser's native anchor behavior, so a route change is just a
//! `location.hash` write away.
//!
//! ## Architecture
//!
//! - [`reactive`]: the Signal/Effect substrate. The router's whole state is
//!   one `Signal<String>` holding the current path; everything downstream is
//!   an effect reading it.
//! - [`component`](mod@component): the `View` tree and `Component` trait used
//!   to describe what each route renders.
//! - [`router`]: the route table, the navigation handler, and the two
//!   rendering primitives (`RouterLink`, `RouterView`).
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use hashroute::{Router, RouterLink, RouterOptions, RouterView, View};
//!
//! let router = Rc::new(Router::new(
//!     RouterOptions::new()
//!         .route("/", || View::text("Home"))
//!         .route("/about", || View::text("About"))
//!         .not_found(|| View::text("404")),
//! ));
//! router.init().unwrap();
//!
//! // Declarative navigation and a placeholder for the active route.
//! let nav = RouterLink::new("/about", "About");
//! let outlet = RouterView::new(Rc::clone(&router));
//! ```
//!
//! On wasm32, `RouterView::mount` installs the effect that keeps the
//! placeholder in sync with the hash; on native targets the same router is
//! driven through [`Router::push`] and rendered with `render_to_string`,
//! which is how the test suite exercises it.

#![warn(missing_docs)]

pub mod component;
pub mod logging;
pub mod reactive;
pub mod router;

pub use component::{Component, ElementView, IntoView, MountError, View};
pub use reactive::{Effect, Signal};
pub use router::{RouteEntry, Router, RouterError, RouterLink, RouterOptions, RouterView, ViewFn};

/// Installs a panic hook that forwards panic messages to the browser
/// console. Call once at application startup.
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
	console_error_panic_hook::set_once();
}

//! Hash-based client-side routing.
//!
//! The router maps URL hash fragments to components. It listens for the
//! browser `hashchange` and `load` events, normalizes the fragment into a
//! path, and writes that path into an observable [`Signal`](crate::Signal).
//! The [`RouterView`] placeholder reads the signal while rendering, so every
//! navigation re-renders exactly the dependents of the path cell.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use hashroute::{Router, RouterOptions, View};
//!
//! let options = RouterOptions::new()
//!     .route("/", || View::text("Home"))
//!     .route("/about", || View::text("About"));
//!
//! let router = Rc::new(Router::new(options));
//! router.init().unwrap();
//!
//! assert_eq!(router.render_current().render_to_string(), "Home");
//! ```

pub mod hash;

mod components;
mod core;

pub use components::{RouterLink, RouterView};
pub use core::{RouteEntry, Router, RouterError, RouterOptions, ViewFn};

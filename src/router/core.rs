//! Core router implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::hash;
use crate::component::View;
use crate::reactive::Signal;

/// Type alias for route component factories.
pub type ViewFn = Arc<dyn Fn() -> View + Send + Sync>;

/// Error type for router operations.
#[derive(Debug, Clone, Error)]
pub enum RouterError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Reading `location.hash` failed.
	#[error("failed to read location hash: {0}")]
	HashRead(String),
	/// Registering a DOM event listener failed.
	#[error("failed to register {0} listener: {1}")]
	Listener(&'static str, String),
	/// Writing `location.hash` failed.
	#[error("navigation to {0:?} failed: {1}")]
	Navigation(String, String),
}

/// A path-to-component association supplied at configuration time.
#[derive(Clone)]
pub struct RouteEntry {
	/// The exact path this entry matches, e.g. `"/about"`.
	path: String,
	/// Factory for the component rendered at this path.
	component: ViewFn,
}

impl RouteEntry {
	/// Creates a new route entry.
	pub fn new<F>(path: impl Into<String>, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		Self {
			path: path.into(),
			component: Arc::new(component),
		}
	}

	/// Returns the path.
	pub fn path(&self) -> &str {
		&self.path
	}
}

impl fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteEntry").field("path", &self.path).finish()
	}
}

/// Router configuration: the route table, and nothing else.
///
/// Paths are not validated and duplicates are not rejected; the table is
/// handed over as-is and processed by [`Router::init`].
#[derive(Default)]
pub struct RouterOptions {
	/// Route entries in registration order.
	routes: Vec<RouteEntry>,
	/// Component rendered when no route matches the current path.
	not_found: Option<ViewFn>,
}

impl RouterOptions {
	/// Creates an empty configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a configuration from a prebuilt route table.
	pub fn with_routes(routes: Vec<RouteEntry>) -> Self {
		Self {
			routes,
			not_found: None,
		}
	}

	/// Adds a route.
	pub fn route<F>(mut self, path: impl Into<String>, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.routes.push(RouteEntry::new(path, component));
		self
	}

	/// Designates the component rendered for unregistered paths.
	///
	/// Without one, unregistered paths render nothing.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// Returns the configured routes.
	pub fn routes(&self) -> &[RouteEntry] {
		&self.routes
	}
}

impl fmt::Debug for RouterOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterOptions")
			.field("routes", &self.routes)
			.field("not_found", &ViewFnDebug(&self.not_found))
			.finish()
	}
}

struct ViewFnDebug<'a>(&'a Option<ViewFn>);

impl fmt::Debug for ViewFnDebug<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", if self.0.is_some() { "Some(..)" } else { "None" })
	}
}

/// The router.
///
/// Holds the configuration supplied at construction, the path→component
/// mapping built by [`init`](Router::init), and the observable current path.
/// Wrap it in an [`Rc`] so the event closures and the rendering primitives
/// can share it:
///
/// ```
/// use std::rc::Rc;
/// use hashroute::{Router, RouterOptions, RouterView, View};
///
/// let router = Rc::new(Router::new(
///     RouterOptions::new().route("/", || View::text("Home")),
/// ));
/// router.init().unwrap();
///
/// let view = RouterView::new(Rc::clone(&router));
/// ```
pub struct Router {
	/// Configuration, stored unprocessed at construction.
	options: RouterOptions,
	/// Path→component mapping, populated by `init`.
	route_map: RefCell<HashMap<String, ViewFn>>,
	/// The observable current path. Defaults to `"/"`; written only by the
	/// navigation handler.
	current_path: Signal<String>,
}

impl Router {
	/// Creates a router from its configuration.
	///
	/// The route table is stored unprocessed; nothing is validated here.
	pub fn new(options: RouterOptions) -> Self {
		Self {
			options,
			route_map: RefCell::new(HashMap::new()),
			current_path: Signal::new("/".to_string()),
		}
	}

	/// Wires the router up: attaches the `hashchange` and `load` listeners,
	/// populates the path→component mapping, and performs the initial state
	/// sync so a router initialized after page load still observes the
	/// current hash.
	///
	/// Call this exactly once from application setup. A second call
	/// double-registers the listeners; the resulting duplicate state writes
	/// are idempotent but wasteful.
	pub fn init(&self) -> Result<(), RouterError> {
		self.bind_events()?;
		self.build_route_map();
		self.on_hash_change();
		crate::info_log!(
			"router initialized with {} route(s)",
			self.route_map.borrow().len()
		);
		Ok(())
	}

	/// Returns the observable current path.
	///
	/// Reading it inside an effect subscribes that effect to navigation.
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// Renders the component registered for the current path.
	///
	/// Unregistered paths render the designated not-found component, or
	/// nothing when none is configured.
	pub fn render_current(&self) -> View {
		let path = self.current_path.get();
		let component = self.route_map.borrow().get(&path).cloned();

		match component {
			Some(component) => component(),
			None => {
				crate::warn_log!("no route registered for {path:?}");
				match &self.options.not_found {
					Some(not_found) => not_found(),
					None => View::Empty,
				}
			}
		}
	}

	/// Navigates to `path` by writing the hash fragment.
	///
	/// The handler runs synchronously before this returns; on wasm32 the
	/// browser then delivers `hashchange` as well, and the repeated state
	/// write is idempotent.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		hash::write(&format!("#{path}"))?;
		self.on_hash_change();
		Ok(())
	}

	/// Number of entries in the mapping (zero before `init`).
	pub fn route_count(&self) -> usize {
		self.route_map.borrow().len()
	}

	/// Whether the mapping has an entry for `path` (always false before
	/// `init`).
	pub fn has_path(&self, path: &str) -> bool {
		self.route_map.borrow().contains_key(path)
	}

	/// The navigation handler: reads the hash, normalizes it, and performs
	/// the system's only state write.
	fn on_hash_change(&self) {
		Self::handle_navigation(&self.current_path);
	}

	/// Shared body of the navigation handler. The event closures capture a
	/// clone of the path cell rather than the router itself; the cell is all
	/// the handler writes.
	fn handle_navigation(current_path: &Signal<String>) {
		let raw = match hash::read() {
			Ok(raw) => raw,
			Err(err) => {
				crate::warn_log!("failed to read location hash: {err}");
				return;
			}
		};
		let path = hash::normalize(&raw);
		crate::debug_log!("navigating to {path:?}");
		current_path.set(path);
	}

	/// Populates the path→component mapping from the configured routes.
	/// Duplicate paths resolve to the later registration.
	fn build_route_map(&self) {
		let mut map = self.route_map.borrow_mut();
		for entry in &self.options.routes {
			if map
				.insert(entry.path.clone(), entry.component.clone())
				.is_some()
			{
				crate::warn_log!(
					"duplicate route for {:?}; the later registration wins",
					entry.path
				);
			}
		}
	}

	/// Attaches the navigation handler to `hashchange` and `load`.
	///
	/// Each closure holds a clone of the path cell and is leaked via
	/// `forget`; listeners live for the page lifetime and are never removed.
	#[cfg(target_arch = "wasm32")]
	fn bind_events(&self) -> Result<(), RouterError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let window = web_sys::window().ok_or(RouterError::NoWindow)?;

		for event in ["hashchange", "load"] {
			let current_path = self.current_path.clone();
			let closure = Closure::wrap(Box::new(move || {
				Self::handle_navigation(&current_path);
			}) as Box<dyn FnMut()>);

			window
				.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
				.map_err(|err| RouterError::Listener(event, format!("{err:?}")))?;
			closure.forget();
		}

		Ok(())
	}

	/// Native targets have no event loop; state syncs happen through `init`
	/// and `push` directly.
	#[cfg(not(target_arch = "wasm32"))]
	fn bind_events(&self) -> Result<(), RouterError> {
		Ok(())
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.options.routes)
			.field("mapped", &self.route_map.borrow().len())
			.field("current_path", &self.current_path.get_untracked())
			.field("not_found", &ViewFnDebug(&self.options.not_found))
			.finish()
	}
}

//! Rendering primitives: `RouterLink` and `RouterView`.

use std::rc::Rc;

use super::core::Router;
use crate::component::{Component, IntoView, View};

/// A navigation link.
///
/// Renders an anchor whose destination is the target prefixed with the hash
/// marker; the browser's native anchor behavior performs the navigation, so
/// no click handling is needed. The content passes through unchanged.
///
/// # Example
///
/// ```
/// use hashroute::{Component, RouterLink};
///
/// let link = RouterLink::new("/about", "About");
/// assert_eq!(
///     link.render().render_to_string(),
///     "<a href=\"#/about\">About</a>",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RouterLink {
	/// The target path.
	to: String,
	/// The link content.
	content: String,
	/// Optional CSS class.
	class: Option<String>,
}

impl RouterLink {
	/// Creates a link to `to` with the given content.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Returns the target path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the content.
	pub fn content(&self) -> &str {
		&self.content
	}
}

impl Component for RouterLink {
	fn render(&self) -> View {
		let mut el = View::element("a").attr("href", format!("#{}", self.to));

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"RouterLink"
	}
}

/// The view placeholder.
///
/// Each render pass reads the router's current path (registering the
/// reactive dependency) and renders the component registered for it. Place
/// one where route content should appear; on wasm32, [`RouterView::mount`]
/// installs the effect that re-renders it on navigation.
pub struct RouterView {
	/// The router this placeholder renders from.
	router: Rc<Router>,
}

impl RouterView {
	/// Creates a placeholder bound to `router`.
	pub fn new(router: Rc<Router>) -> Self {
		Self { router }
	}

	/// Mounts the placeholder under `parent` and keeps it re-rendering.
	///
	/// A comment node marks the insertion point; an [`Effect`] renders the
	/// active component before it and swaps the produced DOM nodes on every
	/// path change. The effect and marker are retained for the page
	/// lifetime, mirroring the router's own listeners.
	///
	/// [`Effect`]: crate::reactive::Effect
	#[cfg(target_arch = "wasm32")]
	pub fn mount(&self, parent: &web_sys::Element) -> Result<(), crate::component::MountError> {
		use std::cell::RefCell;

		use crate::component::{MountError, mount_before};
		use crate::reactive::Effect;

		let document = web_sys::window()
			.ok_or(MountError::NoWindow)?
			.document()
			.ok_or(MountError::NoDocument)?;

		let marker = document.create_comment("router-view");
		parent
			.append_child(&marker)
			.map_err(|_| MountError::InsertNode)?;

		let current_nodes: Rc<RefCell<Vec<web_sys::Node>>> = Rc::new(RefCell::new(Vec::new()));

		let router = Rc::clone(&self.router);
		let marker_in_effect = marker.clone();
		let nodes_in_effect = Rc::clone(&current_nodes);

		let effect = Effect::new(move || {
			// render_current reads the path cell, subscribing this effect.
			let view = router.render_current();

			let mut nodes = nodes_in_effect.borrow_mut();
			for node in nodes.drain(..) {
				if let Some(parent_node) = node.parent_node() {
					let _ = parent_node.remove_child(&node);
				}
			}

			match mount_before(&marker_in_effect, view) {
				Ok(new_nodes) => *nodes = new_nodes,
				Err(err) => crate::error_log!("router view remount failed: {err}"),
			}
		});

		keep_alive(MountedView {
			_marker: marker,
			_effect: effect,
		});

		Ok(())
	}
}

impl Component for RouterView {
	fn render(&self) -> View {
		self.router.render_current()
	}

	fn name() -> &'static str {
		"RouterView"
	}
}

impl std::fmt::Debug for RouterView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterView")
			.field("router", &self.router)
			.finish()
	}
}

/// A mounted placeholder, retained so its effect and marker outlive the
/// mounting call.
#[cfg(target_arch = "wasm32")]
struct MountedView {
	_marker: web_sys::Comment,
	_effect: crate::reactive::Effect,
}

#[cfg(target_arch = "wasm32")]
thread_local! {
	static MOUNTED_VIEWS: std::cell::RefCell<Vec<MountedView>> =
		const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(target_arch = "wasm32")]
fn keep_alive(view: MountedView) {
	MOUNTED_VIEWS.with(|views| {
		views.borrow_mut().push(view);
	});
}

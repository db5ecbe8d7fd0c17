//! Component trait definition.

use super::view::View;

/// Trait for reusable UI components.
///
/// A component encapsulates rendering logic behind a single `render` call
/// that produces a [`View`] tree.
///
/// # Example
///
/// ```
/// use hashroute::component::{Component, IntoView, View};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> View {
///         View::element("p")
///             .child(format!("Hello, {}!", self.name))
///             .into_view()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
///
/// let greeting = Greeting { name: "World".into() };
/// assert_eq!(greeting.render().render_to_string(), "<p>Hello, World!</p>");
/// ```
pub trait Component: 'static {
	/// Renders the component to a view tree.
	fn render(&self) -> View;

	/// Returns the component's name for diagnostics.
	fn name() -> &'static str
	where
		Self: Sized;
}

//! `View` enum and `IntoView` conversions.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for mounting views into the DOM.
#[derive(Debug, Clone, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("failed to create element <{0}>")]
	CreateElement(String),
	/// Failed to set an attribute.
	#[error("failed to set attribute {0}")]
	SetAttribute(String),
	/// Failed to insert a node into the document.
	#[error("failed to insert node")]
	InsertNode,
}

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Multiple views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// A DOM element in the view tree.
#[derive(Debug)]
pub struct ElementView {
	/// Tag name, e.g. `"a"` or `"div"`.
	tag: Cow<'static, str>,
	/// HTML attributes in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Void elements render without a closing tag.
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl View {
	/// Creates an element view builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view tree to an HTML string, escaping text and attribute
	/// values.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Mounts the view as the last child of `parent` (client-side only).
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		let document = document()?;

		match self {
			View::Element(el) => {
				let element = document
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElement(el.tag.to_string()))?;

				for (name, value) in &el.attrs {
					element
						.set_attribute(name, value)
						.map_err(|_| MountError::SetAttribute(name.to_string()))?;
				}

				for child in el.children {
					child.mount(&element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::InsertNode)?;
			}
			View::Text(text) => {
				let text_node = document.create_text_node(&text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::InsertNode)?;
			}
			View::Fragment(children) => {
				for child in children {
					child.mount(parent)?;
				}
			}
			View::Empty => {}
		}

		Ok(())
	}
}

/// Mounts a view immediately before `marker` and returns the created
/// top-level DOM nodes so a later pass can remove them.
#[cfg(target_arch = "wasm32")]
pub(crate) fn mount_before(
	marker: &web_sys::Comment,
	view: View,
) -> Result<Vec<web_sys::Node>, MountError> {
	use wasm_bindgen::JsCast;

	let document = document()?;
	let parent = marker.parent_node().ok_or(MountError::InsertNode)?;
	let anchor: &web_sys::Node = marker.as_ref();

	let mut nodes = Vec::new();

	match view {
		View::Element(el) => {
			let element = document
				.create_element(&el.tag)
				.map_err(|_| MountError::CreateElement(el.tag.to_string()))?;

			for (name, value) in &el.attrs {
				element
					.set_attribute(name, value)
					.map_err(|_| MountError::SetAttribute(name.to_string()))?;
			}

			for child in el.children {
				child.mount(&element)?;
			}

			parent
				.insert_before(&element, Some(anchor))
				.map_err(|_| MountError::InsertNode)?;
			nodes.push(element.unchecked_into());
		}
		View::Text(text) => {
			let text_node = document.create_text_node(&text);
			parent
				.insert_before(&text_node, Some(anchor))
				.map_err(|_| MountError::InsertNode)?;
			nodes.push(text_node.unchecked_into());
		}
		View::Fragment(children) => {
			for child in children {
				nodes.extend(mount_before(marker, child)?);
			}
		}
		View::Empty => {}
	}

	Ok(nodes)
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, MountError> {
	web_sys::window()
		.ok_or(MountError::NoWindow)?
		.document()
		.ok_or(MountError::NoDocument)
}

/// Trait for types that can be converted into a [`View`].
pub trait IntoView {
	/// Converts self into a `View`.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

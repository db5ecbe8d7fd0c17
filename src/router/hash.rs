//! Hash fragment access.
//!
//! On wasm32 this reads and writes `window.location.hash`. On native targets
//! a thread-local stand-in takes its place so the router can be driven from
//! ordinary tests.

use super::core::RouterError;

/// Normalizes a raw hash fragment into a route path.
///
/// The leading `#` marker is stripped and an empty remainder is coerced to
/// `"/"`, so `""`, `"#"`, and `"#/"` all normalize to `"/"` while `"#/about"`
/// normalizes to `"/about"`. A marker-less non-empty string passes through
/// unchanged; `location.hash` never produces one.
///
/// # Example
///
/// ```
/// use hashroute::router::hash;
///
/// assert_eq!(hash::normalize(""), "/");
/// assert_eq!(hash::normalize("#"), "/");
/// assert_eq!(hash::normalize("#/about"), "/about");
/// ```
pub fn normalize(raw: &str) -> String {
	let path = raw.strip_prefix('#').unwrap_or(raw);
	if path.is_empty() {
		"/".to_string()
	} else {
		path.to_string()
	}
}

/// Reads the current hash fragment, marker included.
#[cfg(target_arch = "wasm32")]
pub(crate) fn read() -> Result<String, RouterError> {
	let window = web_sys::window().ok_or(RouterError::NoWindow)?;
	window
		.location()
		.hash()
		.map_err(|err| RouterError::HashRead(format!("{err:?}")))
}

/// Writes the hash fragment, marker included.
#[cfg(target_arch = "wasm32")]
pub(crate) fn write(raw: &str) -> Result<(), RouterError> {
	let window = web_sys::window().ok_or(RouterError::NoWindow)?;
	window
		.location()
		.set_hash(raw)
		.map_err(|err| RouterError::Navigation(raw.to_string(), format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
	static CURRENT_HASH: std::cell::RefCell<String> = const { std::cell::RefCell::new(String::new()) };
}

/// Sets the hash stand-in on native targets (test support).
///
/// Pass the value `location.hash` would hold, marker included: `""`, `"#"`,
/// or `"#/some/path"`.
#[cfg(not(target_arch = "wasm32"))]
pub fn set(raw: &str) {
	CURRENT_HASH.with(|hash| {
		*hash.borrow_mut() = raw.to_string();
	});
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn read() -> Result<String, RouterError> {
	Ok(CURRENT_HASH.with(|hash| hash.borrow().clone()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn write(raw: &str) -> Result<(), RouterError> {
	set(raw);
	Ok(())
}

//! Component system: the `View` tree and the `Component` trait.
//!
//! Views are plain data (element, text, fragment, empty). They render to an
//! HTML string on any target and mount into the live DOM on wasm32. There is
//! no event-handler plumbing here: hash navigation rides the browser's
//! native anchor behavior, so no element in this crate ever carries a
//! handler.

mod component;
mod view;

pub use component::Component;
pub use view::{ElementView, IntoView, MountError, View};

#[cfg(target_arch = "wasm32")]
pub(crate) use view::mount_before;

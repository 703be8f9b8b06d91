//! Environment seam between the router and the browser.
//!
//! The router never talks to `window`/`document` directly. It subscribes to
//! a click source and a pop source supplied by a [`NavigationEnvironment`],
//! and drives history through the same trait. This keeps the core routing
//! logic target-independent: the WASM build plugs in the real browser
//! adapter, tests plug in [`crate::testing::MockEnvironment`].

use std::rc::Rc;

use url::Url;

use crate::error::RouterError;

/// The primary mouse button, as reported by `MouseEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

/// The anchor element a click resolved to, reduced to what routing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTarget {
	/// The anchor's href, resolved to an absolute URL.
	pub href: String,
	/// Whether the anchor opted out of interception (`data-external`,
	/// `download`, or a non-`_self` target).
	pub external: bool,
}

impl AnchorTarget {
	/// Creates a target for an ordinary in-app anchor.
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			external: false,
		}
	}

	/// Sets the external opt-out marker.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}
}

/// Snapshot of a document-level click, independent of the event source.
///
/// The browser adapter builds one of these from a `web_sys::MouseEvent`;
/// tests build them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
	/// The mouse button (`0` is primary).
	pub button: i16,
	/// Whether the meta key was held.
	pub meta_key: bool,
	/// Whether the control key was held.
	pub ctrl_key: bool,
	/// Whether the shift key was held.
	pub shift_key: bool,
	/// Whether the alt key was held.
	pub alt_key: bool,
	/// The nearest anchor on the click path, if any.
	pub anchor: Option<AnchorTarget>,
}

impl ClickEvent {
	/// Creates a plain primary-button click on the given anchor.
	pub fn primary(anchor: AnchorTarget) -> Self {
		Self {
			button: PRIMARY_BUTTON,
			meta_key: false,
			ctrl_key: false,
			shift_key: false,
			alt_key: false,
			anchor: Some(anchor),
		}
	}

	/// Creates a primary-button click that did not hit an anchor.
	pub fn non_anchor() -> Self {
		Self {
			button: PRIMARY_BUTTON,
			meta_key: false,
			ctrl_key: false,
			shift_key: false,
			alt_key: false,
			anchor: None,
		}
	}

	/// Sets the mouse button.
	pub fn button(mut self, button: i16) -> Self {
		self.button = button;
		self
	}

	/// Sets the meta key flag.
	pub fn meta(mut self, held: bool) -> Self {
		self.meta_key = held;
		self
	}

	/// Sets the control key flag.
	pub fn ctrl(mut self, held: bool) -> Self {
		self.ctrl_key = held;
		self
	}

	/// Sets the shift key flag.
	pub fn shift(mut self, held: bool) -> Self {
		self.shift_key = held;
		self
	}

	/// Sets the alt key flag.
	pub fn alt(mut self, held: bool) -> Self {
		self.alt_key = held;
		self
	}

	/// Returns true if any modifier key was held.
	pub fn has_modifier(&self) -> bool {
		self.meta_key || self.ctrl_key || self.shift_key || self.alt_key
	}
}

/// The router's verdict on a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
	/// The router handled the navigation; the adapter must prevent the
	/// browser's default action.
	Intercepted,
	/// Native browser behavior proceeds untouched.
	PassThrough,
}

/// Handler invoked for every document-level click while listening.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent) -> ClickDisposition>;

/// Handler invoked for every history-pop event while listening.
pub type PopHandler = Rc<dyn Fn()>;

/// The pair of handlers a router installs into its environment.
#[derive(Clone)]
pub struct NavigationHandlers {
	/// Click source subscriber.
	pub on_click: ClickHandler,
	/// Pop source subscriber.
	pub on_pop: PopHandler,
}

impl std::fmt::Debug for NavigationHandlers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationHandlers").finish_non_exhaustive()
	}
}

/// Browser facade injected into the router.
///
/// Implementations supply the current location, a history-push primitive
/// that does not trigger a page load, and attach/detach of the global
/// click and pop listeners.
pub trait NavigationEnvironment {
	/// Returns the absolute URL of the active history entry.
	fn current_url(&self) -> Result<Url, RouterError>;

	/// Pushes a new history entry for `url` without loading a page.
	fn push_history(&self, url: &Url) -> Result<(), RouterError>;

	/// Attaches the click and pop listeners.
	fn attach(&self, handlers: NavigationHandlers) -> Result<(), RouterError>;

	/// Detaches any listeners installed by [`attach`](Self::attach).
	/// Must be a no-op when nothing is attached.
	fn detach(&self);
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_anchor_target_new() {
		let anchor = AnchorTarget::new("https://app.example/about");
		assert_eq!(anchor.href, "https://app.example/about");
		assert!(!anchor.external);
	}

	#[test]
	fn test_anchor_target_external() {
		let anchor = AnchorTarget::new("https://elsewhere.example/").external(true);
		assert!(anchor.external);
	}

	#[test]
	fn test_click_event_primary() {
		let event = ClickEvent::primary(AnchorTarget::new("https://app.example/"));
		assert_eq!(event.button, PRIMARY_BUTTON);
		assert!(!event.has_modifier());
		assert!(event.anchor.is_some());
	}

	#[test]
	fn test_click_event_non_anchor() {
		let event = ClickEvent::non_anchor();
		assert!(event.anchor.is_none());
	}

	#[rstest]
	#[case::meta(ClickEvent::non_anchor().meta(true))]
	#[case::ctrl(ClickEvent::non_anchor().ctrl(true))]
	#[case::shift(ClickEvent::non_anchor().shift(true))]
	#[case::alt(ClickEvent::non_anchor().alt(true))]
	fn test_click_event_modifiers(#[case] event: ClickEvent) {
		assert!(event.has_modifier());
	}
}

//! Browser-backed [`NavigationEnvironment`] (WASM only).
//!
//! Binds the router to the real page: a `click` listener on `document`, a
//! `popstate` listener on `window`, history via
//! `History::push_state_with_url`, and the location from
//! `Window::location`. Listener closures are retained in the environment
//! so `detach` can fully remove them; nothing is leaked with
//! `Closure::forget`.

use std::cell::RefCell;

use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlAnchorElement, MouseEvent, PopStateEvent, Window};

use crate::environment::{
	AnchorTarget, ClickDisposition, ClickEvent, NavigationEnvironment, NavigationHandlers,
};
use crate::error::RouterError;

/// Retained listener closures, removable on detach.
struct ListenerGuards {
	click: Closure<dyn FnMut(MouseEvent)>,
	pop: Closure<dyn FnMut(PopStateEvent)>,
}

/// [`NavigationEnvironment`] over the global `window` and `document`.
pub struct BrowserEnvironment {
	window: Window,
	document: Document,
	listeners: RefCell<Option<ListenerGuards>>,
}

impl std::fmt::Debug for BrowserEnvironment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BrowserEnvironment")
			.field("attached", &self.listeners.borrow().is_some())
			.finish()
	}
}

impl BrowserEnvironment {
	/// Creates an environment over the global window.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Environment`] outside a browsing context
	/// (no global `window` or no `document`).
	pub fn new() -> Result<Self, RouterError> {
		let window = web_sys::window()
			.ok_or_else(|| RouterError::Environment("no global window".to_string()))?;
		let document = window
			.document()
			.ok_or_else(|| RouterError::Environment("window has no document".to_string()))?;
		Ok(Self {
			window,
			document,
			listeners: RefCell::new(None),
		})
	}
}

/// Reduces a DOM mouse event to a routing [`ClickEvent`].
fn snapshot_click(event: &MouseEvent, origin: &str) -> ClickEvent {
	ClickEvent {
		button: event.button(),
		meta_key: event.meta_key(),
		ctrl_key: event.ctrl_key(),
		shift_key: event.shift_key(),
		alt_key: event.alt_key(),
		anchor: anchor_from_event(event).and_then(|anchor| anchor_target(&anchor, origin)),
	}
}

/// Walks the event's composed path to the nearest anchor element.
///
/// Considering ancestors keeps nested markup working: a click on an icon
/// inside a link still resolves to the link.
fn anchor_from_event(event: &MouseEvent) -> Option<HtmlAnchorElement> {
	let composed_path = event.composed_path();
	for index in 0..composed_path.length() {
		if let Ok(anchor) = composed_path.get(index).dyn_into::<HtmlAnchorElement>() {
			return Some(anchor);
		}
	}
	None
}

/// Maps an anchor element to a routing target.
///
/// Returns `None` for anchors that cannot navigate in-page at all (no
/// href, fragment-only href). Anchors that must stay with the browser
/// (`data-external`, `download`, a non-`_self` target, cross-origin href)
/// are marked external instead.
fn anchor_target(anchor: &HtmlAnchorElement, origin: &str) -> Option<AnchorTarget> {
	let href_attribute = anchor.get_attribute("href").unwrap_or_default();
	if href_attribute.trim().is_empty() || href_attribute.starts_with('#') {
		return None;
	}

	// Prefix comparison against the origin string would treat
	// "https://app.example.evil.com" as same-origin; parse instead.
	let cross_origin = match Url::parse(&anchor.href()) {
		Ok(url) => url.origin().ascii_serialization() != origin,
		Err(_) => true,
	};
	let target = anchor.target();
	let external = anchor.has_attribute("data-external")
		|| anchor.has_attribute("download")
		|| (!target.is_empty() && target != "_self")
		|| cross_origin;

	Some(AnchorTarget::new(anchor.href()).external(external))
}

fn js_error(context: &str, value: JsValue) -> RouterError {
	let message = value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value));
	RouterError::Environment(format!("{}: {}", context, message))
}

impl NavigationEnvironment for BrowserEnvironment {
	fn current_url(&self) -> Result<Url, RouterError> {
		let href = self
			.window
			.location()
			.href()
			.map_err(|e| js_error("location.href", e))?;
		Ok(Url::parse(&href)?)
	}

	fn push_history(&self, url: &Url) -> Result<(), RouterError> {
		let history = self
			.window
			.history()
			.map_err(|e| js_error("window.history", e))?;
		history
			.push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
			.map_err(|e| js_error("history.pushState", e))
	}

	fn attach(&self, handlers: NavigationHandlers) -> Result<(), RouterError> {
		// Replacing a live pair would orphan its listeners.
		self.detach();

		let origin = self
			.window
			.location()
			.origin()
			.map_err(|e| js_error("location.origin", e))?;

		let on_click = handlers.on_click;
		let click = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
			if event.default_prevented() {
				return;
			}
			let snapshot = snapshot_click(&event, &origin);
			if on_click(&snapshot) == ClickDisposition::Intercepted {
				event.prevent_default();
			}
		}));
		self.document
			.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
			.map_err(|e| js_error("addEventListener(click)", e))?;

		let on_pop = handlers.on_pop;
		let pop = Closure::<dyn FnMut(PopStateEvent)>::wrap(Box::new(
			move |_event: PopStateEvent| {
				on_pop();
			},
		));
		if let Err(e) = self
			.window
			.add_event_listener_with_callback("popstate", pop.as_ref().unchecked_ref())
		{
			let _ = self
				.document
				.remove_event_listener_with_callback("click", click.as_ref().unchecked_ref());
			return Err(js_error("addEventListener(popstate)", e));
		}

		*self.listeners.borrow_mut() = Some(ListenerGuards { click, pop });
		Ok(())
	}

	fn detach(&self) {
		if let Some(guards) = self.listeners.borrow_mut().take() {
			let _ = self
				.document
				.remove_event_listener_with_callback("click", guards.click.as_ref().unchecked_ref());
			let _ = self
				.window
				.remove_event_listener_with_callback("popstate", guards.pop.as_ref().unchecked_ref());
		}
	}
}

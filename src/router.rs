//! Core router implementation.
//!
//! The router owns the route registry, the listener lifecycle, and the
//! navigation dispatcher. All dispatch is synchronous: interception,
//! lookup, and callback invocation run to completion inside the event
//! (or `start`/`redirect` call) that triggered them.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use url::Url;

use crate::context::{NavigationContext, RedirectFn};
use crate::environment::{
	ClickDisposition, ClickEvent, NavigationEnvironment, NavigationHandlers, PRIMARY_BUTTON,
};
use crate::error::RouterError;
use crate::{debug_log, warn_log};

/// Reserved registry key for the fallback callback.
pub const DEFAULT_ROUTE: &str = "default";

/// Type alias for route callbacks.
///
/// Callbacks run on the browser main thread and are invoked synchronously
/// with a fresh [`NavigationContext`] per navigation.
pub type RouteCallback = Rc<dyn Fn(&NavigationContext)>;

/// How a navigation interacts with browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationType {
	/// User-initiated navigation: push exactly one history entry.
	Push,
	/// Browser-initiated navigation: history already reflects the entry.
	Pop,
}

struct RouterInner<E> {
	environment: E,
	routes: RefCell<HashMap<String, RouteCallback>>,
	listening: Cell<bool>,
}

/// A client-side router for single-page applications.
///
/// Maps URL pathnames to registered callbacks, intercepts qualifying link
/// clicks, and keeps browser history and dispatched content in sync. The
/// browser is injected through a [`NavigationEnvironment`], so routers are
/// instance-scoped and testable without a real DOM.
///
/// # Example
///
/// ```ignore
/// use musette::browser::BrowserEnvironment;
/// use musette::Router;
///
/// let router = Router::new(BrowserEnvironment::new()?);
/// router.register("/", |_ctx| render_home());
/// router.register("/contact", |_ctx| render_contact());
/// router.register(musette::DEFAULT_ROUTE, |_ctx| render_not_found());
/// router.start()?;
/// ```
pub struct Router<E: NavigationEnvironment + 'static> {
	inner: Rc<RouterInner<E>>,
}

impl<E: NavigationEnvironment + 'static> Clone for Router<E> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<E: NavigationEnvironment + 'static> std::fmt::Debug for Router<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.inner.routes.borrow().len())
			.field("listening", &self.inner.listening.get())
			.finish()
	}
}

impl<E: NavigationEnvironment + 'static> Router<E> {
	/// Creates a router over the given environment, with an empty registry.
	pub fn new(environment: E) -> Self {
		Self {
			inner: Rc::new(RouterInner {
				environment,
				routes: RefCell::new(HashMap::new()),
				listening: Cell::new(false),
			}),
		}
	}

	/// Registers a callback for a pathname.
	///
	/// Registering twice for the same path silently overwrites the earlier
	/// callback. The reserved path [`DEFAULT_ROUTE`] installs the fallback
	/// invoked when no exact pathname match exists.
	pub fn register<F>(&self, path: impl Into<String>, callback: F)
	where
		F: Fn(&NavigationContext) + 'static,
	{
		self.inner
			.routes
			.borrow_mut()
			.insert(path.into(), Rc::new(callback));
	}

	/// Attaches the global click and pop listeners and dispatches once
	/// against the current location, without pushing a history entry.
	///
	/// Calling `start` while already listening is a no-op. The listening
	/// flag is set before the initial dispatch, so a callback that calls
	/// `start` again cannot double-attach.
	///
	/// # Errors
	///
	/// Returns an error if the environment cannot report the current
	/// location or attach its listeners. No listeners are left attached on
	/// failure.
	pub fn start(&self) -> Result<(), RouterError> {
		let inner = &self.inner;
		if inner.listening.get() {
			return Ok(());
		}

		let current = inner.environment.current_url()?;

		let click_router = Rc::downgrade(inner);
		let on_click: Rc<dyn Fn(&ClickEvent) -> ClickDisposition> =
			Rc::new(move |event| match click_router.upgrade() {
				Some(inner) => RouterInner::handle_click(&inner, event),
				None => ClickDisposition::PassThrough,
			});

		let pop_router = Rc::downgrade(inner);
		let on_pop: Rc<dyn Fn()> = Rc::new(move || {
			if let Some(inner) = pop_router.upgrade() {
				RouterInner::handle_pop(&inner);
			}
		});

		inner.environment.attach(NavigationHandlers { on_click, on_pop })?;
		inner.listening.set(true);
		debug_log!("router listening at {}", current);
		RouterInner::dispatch(inner, &current);
		Ok(())
	}

	/// Detaches both listeners. Safe to call when not listening.
	///
	/// After `stop`, clicks and pop events are no longer intercepted and
	/// native browser navigation resumes for links.
	pub fn stop(&self) {
		if !self.inner.listening.get() {
			return;
		}
		self.inner.listening.set(false);
		self.inner.environment.detach();
		debug_log!("router stopped");
	}

	/// Navigates to a root-relative path, pushing one history entry.
	///
	/// Resolves `path` against the current document origin and runs the
	/// same internal navigation as an intercepted click.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidUrl`] if `path` cannot be resolved to
	/// an absolute URL.
	pub fn redirect(&self, path: &str) -> Result<(), RouterError> {
		RouterInner::redirect_to(&self.inner, path)
	}

	/// Returns true while the global listeners are attached.
	pub fn is_listening(&self) -> bool {
		self.inner.listening.get()
	}

	/// Returns the number of registered routes, including the fallback.
	pub fn route_count(&self) -> usize {
		self.inner.routes.borrow().len()
	}

	/// Checks if a callback is registered for a path.
	pub fn has_route(&self, path: &str) -> bool {
		self.inner.routes.borrow().contains_key(path)
	}
}

impl<E: NavigationEnvironment + 'static> RouterInner<E> {
	/// Decides whether a click becomes an internal navigation.
	fn handle_click(inner: &Rc<Self>, event: &ClickEvent) -> ClickDisposition {
		if !inner.listening.get() {
			return ClickDisposition::PassThrough;
		}
		let Some(anchor) = &event.anchor else {
			return ClickDisposition::PassThrough;
		};
		// Opt-out marker wins over everything else.
		if anchor.external {
			return ClickDisposition::PassThrough;
		}
		// Preserve open-in-new-tab / open-in-new-window gestures.
		if event.button != PRIMARY_BUTTON || event.has_modifier() {
			return ClickDisposition::PassThrough;
		}

		match Self::navigate_to(inner, &anchor.href) {
			Ok(()) => ClickDisposition::Intercepted,
			Err(err) => {
				warn_log!("click on {:?} not intercepted: {}", anchor.href, err);
				ClickDisposition::PassThrough
			}
		}
	}

	/// Re-syncs to the current location after a back/forward navigation.
	///
	/// The browser has already updated the active history entry, so the
	/// push step is skipped.
	fn handle_pop(inner: &Rc<Self>) {
		if !inner.listening.get() {
			return;
		}
		match inner.environment.current_url() {
			Ok(url) => {
				// Pop never touches history; Url is already parsed, so the
				// only fallible step is behind us.
				let _ = Self::navigate(inner, url, NavigationType::Pop);
			}
			Err(err) => warn_log!("pop ignored, current location unavailable: {}", err),
		}
	}

	fn navigate_to(inner: &Rc<Self>, target: &str) -> Result<(), RouterError> {
		let url = Url::parse(target)?;
		Self::navigate(inner, url, NavigationType::Push)
	}

	/// Internal navigation: one optional history push, then one dispatch.
	fn navigate(inner: &Rc<Self>, url: Url, navigation: NavigationType) -> Result<(), RouterError> {
		if navigation == NavigationType::Push {
			inner.environment.push_history(&url)?;
		}
		Self::dispatch(inner, &url);
		Ok(())
	}

	/// Resolves and invokes the callback for a parsed URL.
	///
	/// The registry borrow is released before the callback runs, so a
	/// reentrant `redirect` or `register` from inside the callback never
	/// observes a held borrow.
	fn dispatch(inner: &Rc<Self>, url: &Url) {
		let callback = {
			let routes = inner.routes.borrow();
			routes
				.get(url.path())
				.or_else(|| routes.get(DEFAULT_ROUTE))
				.cloned()
		};
		let Some(callback) = callback else {
			debug_log!("no route or fallback for {}", url.path());
			return;
		};

		let redirect_router = Rc::downgrade(inner);
		let redirect: RedirectFn = Rc::new(move |path| match redirect_router.upgrade() {
			Some(inner) => Self::redirect_to(&inner, path),
			None => Ok(()),
		});
		let ctx = NavigationContext::new(url.clone(), redirect);
		callback(&ctx);
	}

	fn redirect_to(inner: &Rc<Self>, path: &str) -> Result<(), RouterError> {
		let base = inner.environment.current_url()?;
		let url = base.join(path)?;
		Self::navigate(inner, url, NavigationType::Push)
	}
}

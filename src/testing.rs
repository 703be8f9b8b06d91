//! Mock infrastructure for headless router testing.
//!
//! [`MockEnvironment`] stands in for the browser: it holds a current
//! location and a history log, and lets tests drive the router with
//! simulated clicks and pop events, no DOM required.
//!
//! # Example
//!
//! ```ignore
//! use musette::testing::MockEnvironment;
//! use musette::{AnchorTarget, ClickEvent, Router};
//!
//! let env = MockEnvironment::new("https://app.example/");
//! let router = Router::new(env.clone());
//! router.register("/contact", |_ctx| { /* render */ });
//! router.start()?;
//!
//! env.simulate_click(&ClickEvent::primary(AnchorTarget::new(
//!     "https://app.example/contact",
//! )));
//! assert_eq!(env.history_len(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::environment::{
	ClickDisposition, ClickEvent, NavigationEnvironment, NavigationHandlers,
};
use crate::error::RouterError;

#[derive(Default)]
struct MockState {
	current: Option<Url>,
	history: Vec<Url>,
	handlers: Option<NavigationHandlers>,
	attach_count: usize,
	detach_count: usize,
}

/// In-memory [`NavigationEnvironment`] with simulated event sources.
///
/// Cloning shares the underlying state, so tests keep one handle for
/// assertions while the router owns another.
#[derive(Clone, Default)]
pub struct MockEnvironment {
	state: Rc<RefCell<MockState>>,
}

impl std::fmt::Debug for MockEnvironment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("MockEnvironment")
			.field("current", &state.current)
			.field("history_len", &state.history.len())
			.field("attached", &state.handlers.is_some())
			.finish()
	}
}

impl MockEnvironment {
	/// Creates a mock environment whose location starts at `initial`.
	///
	/// # Panics
	///
	/// Panics if `initial` is not an absolute URL. Use a literal.
	pub fn new(initial: &str) -> Self {
		let url = Url::parse(initial)
			.unwrap_or_else(|e| panic!("Invalid initial URL '{}': {}", initial, e));
		let env = Self::default();
		env.state.borrow_mut().current = Some(url);
		env
	}

	/// Returns the current location.
	///
	/// # Panics
	///
	/// Panics if the environment was built with `Default` and never given
	/// a location.
	pub fn current_location(&self) -> Url {
		self.state
			.borrow()
			.current
			.clone()
			.expect("mock environment has no location")
	}

	/// Returns the pushed history entries, oldest first.
	pub fn history(&self) -> Vec<Url> {
		self.state.borrow().history.clone()
	}

	/// Returns the number of pushed history entries.
	pub fn history_len(&self) -> usize {
		self.state.borrow().history.len()
	}

	/// Returns true while router listeners are attached.
	pub fn is_attached(&self) -> bool {
		self.state.borrow().handlers.is_some()
	}

	/// Returns how many times listeners have been attached.
	pub fn attach_count(&self) -> usize {
		self.state.borrow().attach_count
	}

	/// Returns how many times listeners have been detached.
	pub fn detach_count(&self) -> usize {
		self.state.borrow().detach_count
	}

	/// Delivers a click to the attached click handler.
	///
	/// Returns the router's disposition; [`ClickDisposition::PassThrough`]
	/// when nothing is attached, mirroring a browser where default
	/// behavior simply proceeds.
	pub fn simulate_click(&self, event: &ClickEvent) -> ClickDisposition {
		let handler = self
			.state
			.borrow()
			.handlers
			.as_ref()
			.map(|handlers| Rc::clone(&handlers.on_click));
		match handler {
			Some(on_click) => on_click(event),
			None => ClickDisposition::PassThrough,
		}
	}

	/// Simulates a back/forward navigation to `url`.
	///
	/// Sets the current location first (the browser updates the active
	/// entry before firing popstate), then fires the pop handler. Returns
	/// true if a handler was attached.
	///
	/// # Panics
	///
	/// Panics if `url` is not an absolute URL.
	pub fn simulate_pop(&self, url: &str) -> bool {
		let parsed =
			Url::parse(url).unwrap_or_else(|e| panic!("Invalid pop URL '{}': {}", url, e));
		let handler = {
			let mut state = self.state.borrow_mut();
			state.current = Some(parsed);
			state
				.handlers
				.as_ref()
				.map(|handlers| Rc::clone(&handlers.on_pop))
		};
		match handler {
			Some(on_pop) => {
				on_pop();
				true
			}
			None => false,
		}
	}
}

impl NavigationEnvironment for MockEnvironment {
	fn current_url(&self) -> Result<Url, RouterError> {
		self.state
			.borrow()
			.current
			.clone()
			.ok_or_else(|| RouterError::Environment("mock has no location".to_string()))
	}

	fn push_history(&self, url: &Url) -> Result<(), RouterError> {
		let mut state = self.state.borrow_mut();
		state.current = Some(url.clone());
		state.history.push(url.clone());
		Ok(())
	}

	fn attach(&self, handlers: NavigationHandlers) -> Result<(), RouterError> {
		let mut state = self.state.borrow_mut();
		state.handlers = Some(handlers);
		state.attach_count += 1;
		Ok(())
	}

	fn detach(&self) {
		let mut state = self.state.borrow_mut();
		if state.handlers.take().is_some() {
			state.detach_count += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::environment::AnchorTarget;

	#[test]
	fn test_new_sets_location() {
		let env = MockEnvironment::new("https://app.example/start");
		assert_eq!(env.current_location().path(), "/start");
		assert_eq!(env.history_len(), 0);
	}

	#[test]
	fn test_push_history_moves_location() {
		let env = MockEnvironment::new("https://app.example/");
		let target = Url::parse("https://app.example/next").unwrap();
		env.push_history(&target).unwrap();

		assert_eq!(env.current_location(), target);
		assert_eq!(env.history(), vec![target]);
	}

	#[test]
	fn test_simulate_click_without_handlers_passes_through() {
		let env = MockEnvironment::new("https://app.example/");
		let click = ClickEvent::primary(AnchorTarget::new("https://app.example/x"));
		assert_eq!(env.simulate_click(&click), ClickDisposition::PassThrough);
	}

	#[test]
	fn test_simulate_pop_updates_location_before_firing() {
		let env = MockEnvironment::new("https://app.example/");
		let observed = Rc::new(RefCell::new(None));
		let observer = Rc::clone(&observed);
		let env_for_handler = env.clone();
		env.attach(NavigationHandlers {
			on_click: Rc::new(|_| ClickDisposition::PassThrough),
			on_pop: Rc::new(move || {
				*observer.borrow_mut() = Some(env_for_handler.current_location());
			}),
		})
		.unwrap();

		assert!(env.simulate_pop("https://app.example/popped"));
		assert_eq!(
			observed.borrow().as_ref().map(|url| url.path().to_string()),
			Some("/popped".to_string())
		);
	}

	#[test]
	fn test_detach_is_idempotent() {
		let env = MockEnvironment::new("https://app.example/");
		env.detach();
		env.detach();
		assert_eq!(env.detach_count(), 0);
	}
}

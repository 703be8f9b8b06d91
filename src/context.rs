//! Per-navigation context handed to route callbacks.

use std::rc::Rc;

use url::Url;

use crate::error::RouterError;

/// Redirect capability bound to the router that dispatched the navigation.
pub(crate) type RedirectFn = Rc<dyn Fn(&str) -> Result<(), RouterError>>;

/// The value passed to a route callback at dispatch time.
///
/// Bundles the parsed URL of the navigation and a redirect function bound
/// to the dispatching router. A fresh context is built per navigation and
/// is not retained across navigations.
pub struct NavigationContext {
	url: Url,
	redirect: RedirectFn,
}

impl std::fmt::Debug for NavigationContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationContext")
			.field("url", &self.url)
			.finish_non_exhaustive()
	}
}

impl NavigationContext {
	pub(crate) fn new(url: Url, redirect: RedirectFn) -> Self {
		Self { url, redirect }
	}

	/// Returns the parsed URL of this navigation.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// Returns the pathname, excluding query string and fragment.
	pub fn pathname(&self) -> &str {
		self.url.path()
	}

	/// Looks up a query parameter by key.
	///
	/// The first occurrence wins when a key repeats.
	pub fn query(&self, key: &str) -> Option<String> {
		self.url
			.query_pairs()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.into_owned())
	}

	/// Navigates to a root-relative path through the dispatching router.
	///
	/// Resolves `path` against the current document origin and performs a
	/// full internal navigation, including the history push.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidUrl`] if `path` cannot be resolved to
	/// an absolute URL.
	pub fn redirect(&self, path: &str) -> Result<(), RouterError> {
		(self.redirect)(path)
	}
}

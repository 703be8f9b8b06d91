//! # Musette
//!
//! A minimal client-side router for WASM single-page applications.
//!
//! Musette intercepts in-page link clicks, maps URL pathnames to
//! registered callbacks, and keeps browser history and displayed content
//! synchronized without full-page reloads.
//!
//! ## Core Principles
//!
//! - **Instance-scoped**: routers are plain values, never module-level
//!   globals; independent routers coexist, and every test can build a
//!   fresh one.
//! - **Synchronous dispatch**: registry lookup plus direct invocation on
//!   the thread handling the event; the browser's own event delivery
//!   already serializes calls.
//! - **Injectable environment**: the router subscribes to a click source
//!   and a pop source supplied by a [`NavigationEnvironment`]. The WASM
//!   build uses [`browser::BrowserEnvironment`]; tests use
//!   [`testing::MockEnvironment`].
//!
//! ## Example
//!
//! ```ignore
//! use musette::browser::BrowserEnvironment;
//! use musette::{DEFAULT_ROUTE, Router};
//!
//! let router = Router::new(BrowserEnvironment::new()?);
//! router.register("/", |_ctx| render_home());
//! router.register("/posts", |ctx| render_posts(ctx.query("id")));
//! router.register(DEFAULT_ROUTE, |ctx| render_not_found(ctx.pathname()));
//! router.start()?;
//! ```
//!
//! Navigation rules:
//!
//! - A primary-button click on an in-app anchor, with no modifier keys
//!   held, pushes one history entry and invokes the matching callback
//!   (or the [`DEFAULT_ROUTE`] fallback).
//! - Anchors marked `data-external` (and, in the browser adapter,
//!   `download` attributes, non-`_self` targets, and cross-origin hrefs)
//!   are never intercepted.
//! - Back/forward navigation re-dispatches against the new location
//!   without touching history.
//! - Callbacks change routes with [`NavigationContext::redirect`], which
//!   reuses the click navigation path, push included.

pub mod context;
pub mod environment;
pub mod error;
pub mod link;
pub mod logging;
pub mod router;
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use context::NavigationContext;
pub use environment::{
	AnchorTarget, ClickDisposition, ClickEvent, NavigationEnvironment, NavigationHandlers,
	PRIMARY_BUTTON,
};
pub use error::RouterError;
pub use link::Link;
pub use router::{DEFAULT_ROUTE, RouteCallback, Router};

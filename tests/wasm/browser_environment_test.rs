//! Browser-backed environment tests.
//!
//! Run with `wasm-pack test --chrome --headless`.

#![cfg(target_arch = "wasm32")]

use musette::browser::BrowserEnvironment;
use musette::{NavigationEnvironment, Router};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_environment_reports_current_url() {
	let env = BrowserEnvironment::new().unwrap();
	let url = env.current_url().unwrap();
	assert!(!url.path().is_empty());
}

#[wasm_bindgen_test]
fn test_push_history_updates_location() {
	let env = BrowserEnvironment::new().unwrap();
	let mut target = env.current_url().unwrap();
	target.set_path("/musette-test");

	env.push_history(&target).unwrap();

	assert_eq!(env.current_url().unwrap().path(), "/musette-test");
}

#[wasm_bindgen_test]
fn test_router_start_and_stop_against_real_window() {
	let router = Router::new(BrowserEnvironment::new().unwrap());
	router.register(musette::DEFAULT_ROUTE, |_| {});

	router.start().unwrap();
	assert!(router.is_listening());

	router.stop();
	assert!(!router.is_listening());
}

#![cfg(target_arch = "wasm32")]

use circuit_site::navbar::navbar_background;
use circuit_site::storage::{BrowserStorage, PreferenceStore};
use circuit_site::theme::{self, LIGHT_MODE_CLASS, THEME_KEY, Theme, ThemeController};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_preference() {
	web_sys::window()
		.unwrap()
		.local_storage()
		.unwrap()
		.unwrap()
		.remove_item(THEME_KEY)
		.unwrap();
}

#[wasm_bindgen_test]
fn fresh_session_loads_dark() {
	clear_preference();
	let theme = ThemeController::new(BrowserStorage).load();
	assert_eq!(theme, Theme::Dark);
	assert_eq!(navbar_background(0.0, theme).to_string(), "rgba(10, 10, 10, 0.8)");
}

#[wasm_bindgen_test]
fn toggle_round_trips_through_local_storage() {
	clear_preference();
	let controller = ThemeController::new(BrowserStorage);

	controller.toggle(true);
	assert_eq!(BrowserStorage.get(THEME_KEY).as_deref(), Some("light"));
	assert_eq!(controller.load(), Theme::Light);

	controller.toggle(false);
	assert_eq!(BrowserStorage.get(THEME_KEY).as_deref(), Some("dark"));
	assert_eq!(controller.load(), Theme::Dark);
	clear_preference();
}

#[wasm_bindgen_test]
fn body_class_tracks_theme() {
	let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

	theme::apply_to_body(Theme::Light).unwrap();
	assert!(body.class_list().contains(LIGHT_MODE_CLASS));
	assert_eq!(theme::read_from_body().unwrap(), Theme::Light);

	theme::apply_to_body(Theme::Dark).unwrap();
	assert!(!body.class_list().contains(LIGHT_MODE_CLASS));
	assert_eq!(theme::read_from_body().unwrap(), Theme::Dark);
}

#[wasm_bindgen_test]
fn missing_anchor_target_is_ignored() {
	circuit_site::scroll::scroll_to_anchor("#does-not-exist").unwrap();
	circuit_site::scroll::scroll_to_anchor("#").unwrap();
}

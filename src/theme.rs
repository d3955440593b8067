//! Light/dark theme: the typed flag, its colors, and its persistence.

use std::fmt;

use leptos::prelude::*;

use crate::error;
use crate::navbar;
use crate::storage::{BrowserStorage, PreferenceStore};

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
/// Class set on `<body>` while the light theme is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Active visual mode. Exactly one is in effect at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light background, grey circuits.
	Light,
	/// Dark background, red circuits. Used when nothing is saved.
	#[default]
	Dark,
}

impl Theme {
	/// Anything but an exact `"light"` restores as dark.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("light") => Self::Light,
			_ => Self::Dark,
		}
	}

	/// The toggle checkbox is checked in light mode.
	pub fn from_checked(checked: bool) -> Self {
		if checked { Self::Light } else { Self::Dark }
	}

	/// Stored form, `"light"` or `"dark"`.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Whether the light theme is active.
	pub fn is_light(self) -> bool {
		self == Self::Light
	}

	/// Base stroke/fill color of the circuit background.
	pub fn circuit_color(self) -> Rgba {
		match self {
			Self::Light => Rgba::new(150, 150, 150, 0.15),
			Self::Dark => Rgba::new(220, 38, 38, 0.15),
		}
	}
}

/// A CSS `rgba(...)` color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, `0.0..=1.0`.
	pub a: f64,
}

impl Rgba {
	/// Fully transparent black.
	pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

	/// Color from channels and alpha.
	pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Restores and persists the theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeController<S> {
	store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
	/// Controller backed by `store`.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Reads the saved preference; dark when absent or unrecognized.
	pub fn load(&self) -> Theme {
		Theme::from_stored(self.store.get(THEME_KEY).as_deref())
	}

	/// Applies a toggle change and persists the resulting theme.
	pub fn toggle(&self, checked: bool) -> Theme {
		let theme = Theme::from_checked(checked);
		self.store.set(THEME_KEY, theme.as_str());
		theme
	}
}

/// Sets or clears the light-mode class on `<body>`.
pub fn apply_to_body(theme: Theme) -> error::Result<()> {
	error::body()?
		.class_list()
		.toggle_with_force(LIGHT_MODE_CLASS, theme.is_light())?;
	Ok(())
}

/// Reads the current theme back from `<body>`.
pub fn read_from_body() -> error::Result<Theme> {
	let light = error::body()?.class_list().contains(LIGHT_MODE_CLASS);
	Ok(Theme::from_checked(light))
}

/// Reactive theme shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext<S = BrowserStorage> {
	/// Current theme; read by the navbar and the toggle.
	pub theme: RwSignal<Theme>,
	controller: ThemeController<S>,
}

impl<S: PreferenceStore> ThemeContext<S> {
	/// Signal seeded from whatever `store` has saved.
	pub fn restore(store: S) -> Self {
		let controller = ThemeController::new(store);
		Self {
			theme: RwSignal::new(controller.load()),
			controller,
		}
	}

	/// Navbar background for the current theme at `scroll`.
	pub fn navbar_background(&self, scroll: f64) -> Rgba {
		navbar::navbar_background(scroll, self.theme.get())
	}

	/// Called from the toggle's change handler.
	pub fn on_toggle(&self, checked: bool) {
		let theme = self.controller.toggle(checked);
		log::debug!("theme toggled to {}", theme.as_str());
		self.theme.set(theme);
	}
}

/// Restores the saved theme, keeps `<body>` in sync with it, and provides
/// the [`ThemeContext`].
pub fn provide_theme() -> ThemeContext {
	let ctx = ThemeContext::restore(BrowserStorage);
	Effect::new(move |_| {
		if let Err(err) = apply_to_body(ctx.theme.get()) {
			log::warn!("could not apply theme: {err}");
		}
	});
	provide_context(ctx);
	ctx
}

/// The provided [`ThemeContext`], creating one if no ancestor did.
pub fn use_theme() -> ThemeContext {
	use_context::<ThemeContext>().unwrap_or_else(provide_theme)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	#[test]
	fn missing_preference_is_dark() {
		let store = MemoryStore::default();
		assert_eq!(ThemeController::new(&store).load(), Theme::Dark);
	}

	#[test]
	fn malformed_preference_is_dark() {
		let store = MemoryStore::default();
		store.set(THEME_KEY, "Light");
		assert_eq!(ThemeController::new(&store).load(), Theme::Dark);
		store.set(THEME_KEY, "");
		assert_eq!(ThemeController::new(&store).load(), Theme::Dark);
	}

	#[test]
	fn toggle_persists_matching_value() {
		let store = MemoryStore::default();
		let controller = ThemeController::new(&store);

		assert_eq!(controller.toggle(true), Theme::Light);
		assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
		assert_eq!(controller.load(), Theme::Light);

		assert_eq!(controller.toggle(false), Theme::Dark);
		assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
		assert_eq!(controller.load(), Theme::Dark);
	}

	#[test]
	fn toggle_updates_signal_store_and_navbar() {
		let store = MemoryStore::default();
		let ctx = ThemeContext::restore(&store);
		assert_eq!(ctx.theme.get(), Theme::Dark);
		assert_eq!(ctx.navbar_background(0.0).to_string(), "rgba(10, 10, 10, 0.8)");

		ctx.on_toggle(true);
		assert_eq!(ctx.theme.get(), Theme::Light);
		assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
		assert_eq!(ctx.navbar_background(50.0).to_string(), "rgba(255, 255, 255, 0.9)");
		assert_eq!(ctx.navbar_background(150.0).to_string(), "rgba(255, 255, 255, 0.95)");

		ctx.on_toggle(false);
		assert_eq!(ctx.theme.get(), Theme::Dark);
		assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
		assert_eq!(ctx.navbar_background(150.0).to_string(), "rgba(10, 10, 10, 0.95)");
	}

	#[test]
	fn restore_picks_up_saved_light() {
		let store = MemoryStore::default();
		store.set(THEME_KEY, "light");
		let ctx = ThemeContext::restore(&store);
		assert!(ctx.theme.get().is_light());
	}

	#[test]
	fn rgba_formats_as_css() {
		assert_eq!(
			Theme::Dark.circuit_color().to_string(),
			"rgba(220, 38, 38, 0.15)"
		);
		assert_eq!(
			Theme::Light.circuit_color().with_alpha(0.6).to_string(),
			"rgba(150, 150, 150, 0.6)"
		);
	}
}

//! Navbar background shading.

use crate::theme::{Rgba, Theme};

/// Scroll offset (px) above which the navbar switches to its opaque tier.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Opacity tier of the navbar background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarTier {
	/// At or near the top of the page.
	Resting,
	/// Scrolled past [`NAVBAR_SCROLL_THRESHOLD`].
	Scrolled,
}

impl NavbarTier {
	/// Tier for a vertical scroll offset in pixels.
	pub fn at(scroll: f64) -> Self {
		if scroll > NAVBAR_SCROLL_THRESHOLD {
			Self::Scrolled
		} else {
			Self::Resting
		}
	}
}

/// Navbar background: near-white in light mode, near-black in dark mode,
/// more opaque once the page has scrolled.
pub fn navbar_background(scroll: f64, theme: Theme) -> Rgba {
	match (theme, NavbarTier::at(scroll)) {
		(Theme::Light, NavbarTier::Resting) => Rgba::new(255, 255, 255, 0.9),
		(Theme::Light, NavbarTier::Scrolled) => Rgba::new(255, 255, 255, 0.95),
		(Theme::Dark, NavbarTier::Resting) => Rgba::new(10, 10, 10, 0.8),
		(Theme::Dark, NavbarTier::Scrolled) => Rgba::new(10, 10, 10, 0.95),
	}
}

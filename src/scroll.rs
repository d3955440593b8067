//! Scroll-driven effects: anchor smooth-scrolling, hero parallax, and the
//! one-way reveal of cards as they enter the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
	HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
	ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::error::{self, SiteError};

/// Hero translation per pixel scrolled.
pub const PARALLAX_FACTOR: f64 = 0.4;

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTOR: &str = ".service-card, .stat";
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so reveals start a little later.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
/// CSS transition applied to revealable elements.
pub const REVEAL_TRANSITION: &str = "all 0.6s ease";

/// Current window scroll offset, `0.0` if unavailable.
pub fn scroll_offset() -> f64 {
	error::window()
		.and_then(|w| Ok(w.scroll_y()?))
		.unwrap_or(0.0)
}

/// Inner viewport size in CSS pixels.
pub fn viewport_size() -> error::Result<(f64, f64)> {
	let window = error::window()?;
	let as_px = |v: JsValue| v.as_f64().unwrap_or(0.0);
	Ok((as_px(window.inner_width()?), as_px(window.inner_height()?)))
}

/// Element id referenced by a same-page anchor, e.g. `"#services"` → `"services"`.
pub fn anchor_target(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element named by `href` to the top of the viewport.
/// Hrefs that are not same-page anchors, or whose target is missing, are
/// ignored.
pub fn scroll_to_anchor(href: &str) -> error::Result<()> {
	let Some(id) = anchor_target(href) else {
		return Ok(());
	};
	let Some(target) = error::document()?.get_element_by_id(id) else {
		log::debug!("anchor target {href} not found");
		return Ok(());
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	target.scroll_into_view_with_scroll_into_view_options(&options);
	Ok(())
}

/// Hero transform at a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
	/// Downward shift in pixels.
	pub translate_y: f64,
	/// `1.0` at the top of the page, fading towards `0.0`.
	pub opacity: f64,
}

impl Default for HeroTransform {
	fn default() -> Self {
		Self {
			translate_y: 0.0,
			opacity: 1.0,
		}
	}
}

impl HeroTransform {
	/// Value for the `transform` style property.
	pub fn css_transform(&self) -> String {
		format!("translateY({}px)", self.translate_y)
	}
}

/// `None` once the hero has scrolled a full viewport away; callers keep the
/// last applied transform in that case.
pub fn parallax(scroll: f64, viewport_height: f64) -> Option<HeroTransform> {
	if scroll >= viewport_height {
		return None;
	}
	Some(HeroTransform {
		translate_y: scroll * PARALLAX_FACTOR,
		opacity: 1.0 - scroll / viewport_height,
	})
}

/// Visibility of a revealable element. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
	/// Faded out and shifted down, waiting to be seen.
	#[default]
	Hidden,
	/// Shown; stays this way.
	Visible,
}

impl Reveal {
	/// Next state after an intersection report.
	pub fn observe(self, intersecting: bool) -> Self {
		if intersecting { Self::Visible } else { self }
	}

	/// Inline style (opacity, transform) for this state.
	pub fn style(self) -> [(&'static str, &'static str); 2] {
		match self {
			Self::Hidden => [("opacity", "0"), ("transform", "translateY(20px)")],
			Self::Visible => [("opacity", "1"), ("transform", "translateY(0)")],
		}
	}
}

fn apply_reveal(el: &HtmlElement, state: Reveal) -> error::Result<()> {
	let style = el.style();
	for (property, value) in state.style() {
		style.set_property(property, value)?;
	}
	Ok(())
}

/// Keeps the observer and its callback alive.
pub struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Hides every element matching [`REVEAL_SELECTOR`] and reveals each one the
/// first time it intersects the viewport.
pub fn install_reveal() -> error::Result<RevealObserver> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let result = entry
					.target()
					.dyn_into::<HtmlElement>()
					.map_err(|_| SiteError::Js("reveal target is not an HTML element".into()))
					.and_then(|el| apply_reveal(&el, Reveal::Hidden.observe(true)));
				if let Err(err) = result {
					log::warn!("reveal failed: {err}");
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	options.set_root_margin(REVEAL_ROOT_MARGIN);
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

	let elements = error::document()?.query_selector_all(REVEAL_SELECTOR)?;
	for i in 0..elements.length() {
		let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
			continue;
		};
		apply_reveal(&el, Reveal::Hidden)?;
		el.style().set_property("transition", REVEAL_TRANSITION)?;
		observer.observe(&el);
	}
	log::debug!("observing {} reveal elements", elements.length());

	Ok(RevealObserver {
		observer,
		_callback: callback,
	})
}

/// Observer handle slot shared with a mount effect.
pub type RevealSlot = Rc<RefCell<Option<RevealObserver>>>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parallax_moves_and_fades() {
		let t = parallax(200.0, 800.0).unwrap();
		assert_eq!(t.translate_y, 80.0);
		assert_eq!(t.opacity, 0.75);
		assert_eq!(t.css_transform(), "translateY(80px)");
	}

	#[test]
	fn parallax_at_top_is_identity() {
		assert_eq!(parallax(0.0, 800.0), Some(HeroTransform::default()));
	}

	#[test]
	fn parallax_stops_past_one_viewport() {
		assert_eq!(parallax(800.0, 800.0), None);
		assert_eq!(parallax(1200.0, 800.0), None);
	}

	#[test]
	fn parallax_is_not_reset_when_skipped() {
		// The caller holds the last transform; a jump past one viewport
		// leaves it as it was.
		let mut applied = HeroTransform::default();
		for scroll in [100.0, 700.0, 2000.0] {
			if let Some(t) = parallax(scroll, 800.0) {
				applied = t;
			}
		}
		assert_eq!(applied, parallax(700.0, 800.0).unwrap());
		assert!(applied.opacity > 0.0);
	}

	#[test]
	fn reveal_is_one_way() {
		let shown = Reveal::default().observe(false).observe(true);
		assert_eq!(shown, Reveal::Visible);
		assert_eq!(shown.observe(false), Reveal::Visible);
	}

	#[test]
	fn reveal_styles() {
		assert_eq!(Reveal::Hidden.style()[1], ("transform", "translateY(20px)"));
		assert_eq!(Reveal::Visible.style()[0], ("opacity", "1"));
	}

	#[test]
	fn anchor_targets() {
		assert_eq!(anchor_target("#services"), Some("services"));
		assert_eq!(anchor_target("#"), None);
		assert_eq!(anchor_target("/about"), None);
	}
}

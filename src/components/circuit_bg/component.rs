use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MutationObserver, MutationObserverInit,
	MutationRecord,
};

use super::config::CircuitConfig;
use super::entropy::MathRandom;
use super::render;
use super::state::CircuitBackgroundState;
use crate::error::{self, SiteError};
use crate::scroll::viewport_size;
use crate::theme::{self, Theme};

type Slot<T> = Rc<RefCell<Option<T>>>;
type ThemeCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Everything the running animation keeps alive between callbacks.
#[derive(Clone, Default)]
struct Handles {
	state: Slot<CircuitBackgroundState>,
	animate: Slot<Closure<dyn FnMut()>>,
	resize: Slot<Closure<dyn FnMut()>>,
	theme: Slot<(MutationObserver, ThemeCallback)>,
}

/// Full-viewport animated circuit board drawn behind the page.
#[component]
pub fn CircuitBackground(
	#[prop(default = CircuitConfig::default())] config: CircuitConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = Handles::default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handles.state.borrow().is_some() {
			return;
		}
		if let Err(err) = start(canvas.into(), config.clone(), &handles) {
			log::warn!("circuit background disabled: {err}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="circuit-bg"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; pointer-events: none;"
		/>
	}
}

fn start(
	canvas: HtmlCanvasElement,
	config: CircuitConfig,
	handles: &Handles,
) -> error::Result<()> {
	let window = error::window()?;
	let (w, h) = viewport_size()?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| SiteError::Js("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|_| SiteError::Js("not a 2d context".into()))?;
	let theme = theme::read_from_body().unwrap_or_default();
	let state = CircuitBackgroundState::new(config, w, h, theme, MathRandom);
	*handles.state.borrow_mut() = Some(state);
	log::info!("circuit background started at {w}x{h}");

	let (state_resize, canvas_resize) = (handles.state.clone(), canvas.clone());
	*handles.resize.borrow_mut() = Some(Closure::new(move || {
		let (nw, nh) = match viewport_size() {
			Ok(size) => size,
			Err(err) => {
				log::warn!("resize skipped: {err}");
				return;
			}
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *state_resize.borrow_mut() {
			s.resize(nw, nh);
		}
		log::info!("circuit background resized to {nw}x{nh}");
	}));
	if let Some(ref cb) = *handles.resize.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (state_anim, animate_inner) = (handles.state.clone(), handles.animate.clone());
	*handles.animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut s) = *state_anim.borrow_mut() {
			s.tick();
			render::render(s, &ctx);
		}
		if let (Some(cb), Ok(win)) = (&*animate_inner.borrow(), error::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *handles.animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}

	// Without the observer the canvas keeps its starting colors.
	if let Err(err) = watch_theme(handles) {
		log::warn!("circuit background will not follow theme changes: {err}");
	}
	Ok(())
}

/// Follows `class` changes on `<body>` so the next frame uses the new colors.
fn watch_theme(handles: &Handles) -> error::Result<()> {
	let state_theme = handles.state.clone();
	let callback: ThemeCallback = Closure::new(move |records: js_sys::Array, _: MutationObserver| {
		let class_changed = records.iter().any(|r| {
			r.dyn_into::<MutationRecord>()
				.ok()
				.and_then(|r| r.attribute_name())
				.is_some_and(|name| name == "class")
		});
		if !class_changed {
			return;
		}
		let theme: Theme = match theme::read_from_body() {
			Ok(theme) => theme,
			Err(err) => {
				log::warn!("theme change ignored: {err}");
				return;
			}
		};
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			if s.theme != theme {
				log::debug!("circuit background now {}", theme.as_str());
				s.theme = theme;
			}
		}
	});

	let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
	let options = MutationObserverInit::new();
	options.set_attributes(true);
	options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
	let body = error::body()?;
	observer.observe_with_options(&body, &options)?;
	*handles.theme.borrow_mut() = Some((observer, callback));
	Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn start_installs_frame_loop_and_theme_watch() {
		let canvas: HtmlCanvasElement = error::document()
			.unwrap()
			.create_element("canvas")
			.unwrap()
			.dyn_into()
			.unwrap();
		let handles = Handles::default();
		start(canvas, CircuitConfig::default(), &handles).unwrap();

		assert!(handles.state.borrow().is_some());
		assert!(handles.resize.borrow().is_some());
		assert!(handles.animate.borrow().is_some());
		assert!(handles.theme.borrow().is_some());
		// The scheduled frame still refers to these closures.
		std::mem::forget(handles);
	}
}

//! Host failures surfaced by the DOM helpers.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while touching the browser.
///
/// None of these are fatal: call sites log and skip the effect.
#[derive(Debug, Error)]
pub enum SiteError {
	/// No global `window` (not running in a browser).
	#[error("no window")]
	NoWindow,
	/// The window has no document.
	#[error("no document")]
	NoDocument,
	/// The document has no `<body>` yet.
	#[error("no body element")]
	NoBody,
	/// A selector matched nothing.
	#[error("element not found: {0}")]
	MissingElement(String),
	/// A JS exception thrown by a web API.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SiteError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

/// Shorthand used by every DOM helper.
pub type Result<T> = std::result::Result<T, SiteError>;

pub(crate) fn window() -> Result<web_sys::Window> {
	web_sys::window().ok_or(SiteError::NoWindow)
}

pub(crate) fn document() -> Result<web_sys::Document> {
	window()?.document().ok_or(SiteError::NoDocument)
}

pub(crate) fn body() -> Result<web_sys::HtmlElement> {
	document()?.body().ok_or(SiteError::NoBody)
}

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::scroll;
use crate::theme::use_theme;

/// Same-page link that smooth-scrolls to its target instead of jumping.
#[component]
pub fn AnchorLink(href: &'static str, children: Children) -> impl IntoView {
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		if let Err(err) = scroll::scroll_to_anchor(href) {
			log::warn!("smooth scroll to {href} failed: {err}");
		}
	};

	view! {
		<a href=href on:click=on_click>
			{children()}
		</a>
	}
}

/// Fixed header with section links and the light/dark switch.
#[component]
pub fn SiteNav(#[prop(into)] scroll_y: Signal<f64>) -> impl IntoView {
	let ctx = use_theme();
	let background = move || ctx.navbar_background(scroll_y.get()).to_string();

	view! {
		<nav style:background=background>
			<AnchorLink href="#home">
				<span class="logo">"Circuit"<strong>"Works"</strong></span>
			</AnchorLink>
			<ul class="nav-links">
				<li><AnchorLink href="#services">"Services"</AnchorLink></li>
				<li><AnchorLink href="#stats">"Results"</AnchorLink></li>
				<li><AnchorLink href="#contact">"Contact"</AnchorLink></li>
			</ul>
			<label class="theme-switch" title="Light mode">
				<input
					type="checkbox"
					class="checkbox"
					prop:checked=move || ctx.theme.get().is_light()
					on:change=move |ev| ctx.on_toggle(event_target_checked(&ev))
				/>
				<span class="slider"></span>
			</label>
		</nav>
	}
}

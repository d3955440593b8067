use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;

use crate::components::circuit_bg::CircuitBackground;
use crate::components::site_nav::{AnchorLink, SiteNav};
use crate::scroll::{self, HeroTransform, RevealSlot, parallax};

struct Service {
	title: &'static str,
	body: &'static str,
}

const SERVICES: &[Service] = &[
	Service {
		title: "Embedded firmware",
		body: "Bare-metal and RTOS firmware for microcontrollers, from bring-up to field updates.",
	},
	Service {
		title: "PCB design",
		body: "Schematic capture, multilayer layout and design-for-manufacture reviews.",
	},
	Service {
		title: "Prototyping",
		body: "Rapid hardware prototypes with test fixtures and bench validation.",
	},
	Service {
		title: "IoT integration",
		body: "Connected devices with secure provisioning, telemetry and dashboards.",
	},
];

const STATS: &[(&str, &str)] = &[
	("120+", "Boards shipped"),
	("40", "Clients served"),
	("99.9%", "Fleet uptime"),
	("12", "Years in the field"),
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let scroll_y = RwSignal::new(scroll::scroll_offset());
	let hero = RwSignal::new(HeroTransform::default());

	let handle = window_event_listener(ev::scroll, move |_| {
		let y = scroll::scroll_offset();
		scroll_y.set(y);
		// Past one viewport the hero keeps whatever was applied last.
		if let Ok((_, viewport_height)) = scroll::viewport_size() {
			if let Some(t) = parallax(y, viewport_height) {
				hero.set(t);
			}
		}
	});
	on_cleanup(move || handle.remove());

	let reveal: RevealSlot = Rc::new(RefCell::new(None));
	Effect::new(move |_| {
		if reveal.borrow().is_some() {
			return;
		}
		match scroll::install_reveal() {
			Ok(observer) => *reveal.borrow_mut() = Some(observer),
			Err(err) => log::warn!("reveal animation disabled: {err}"),
		}
	});

	view! {
		<CircuitBackground />
		<SiteNav scroll_y=scroll_y />
		<main>
			<section
				id="home"
				class="hero"
				style:transform=move || hero.get().css_transform()
				style:opacity=move || hero.get().opacity.to_string()
			>
				<h1>"Hardware that thinks ahead"</h1>
				<p class="subtitle">
					"Electronics design and embedded software, from first sketch to production line."
				</p>
				<AnchorLink href="#contact">
					<span class="cta">"Start a project"</span>
				</AnchorLink>
			</section>

			<section id="services" class="services">
				<h2>"Services"</h2>
				<div class="service-grid">
					{SERVICES
						.iter()
						.map(|s| {
							view! {
								<article class="service-card">
									<h3>{s.title}</h3>
									<p>{s.body}</p>
								</article>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="stats" class="stats">
				{STATS
					.iter()
					.map(|&(value, label)| {
						view! {
							<div class="stat">
								<span class="stat-value">{value}</span>
								<span class="stat-label">{label}</span>
							</div>
						}
					})
					.collect_view()}
			</section>

			<section id="contact" class="contact">
				<h2>"Let's talk"</h2>
				<p>"Tell us about your board, your deadline and your constraints."</p>
				<a class="cta" href="mailto:hello@circuitworks.dev">"hello@circuitworks.dev"</a>
			</section>
		</main>
	}
}

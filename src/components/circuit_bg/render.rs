use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::theme::Rgba;

use super::entropy::Entropy;
use super::state::CircuitBackgroundState;

pub fn render<R: Entropy>(state: &CircuitBackgroundState<R>, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	let color = state.theme.circuit_color();
	draw_circuits(state, ctx, color);
	draw_nodes(state, ctx, color);
	draw_links(state, ctx, color);
}

fn draw_circuits<R: Entropy>(
	state: &CircuitBackgroundState<R>,
	ctx: &CanvasRenderingContext2d,
	color: Rgba,
) {
	let config = &state.config;
	let (stroke, glow) = (color.to_string(), color.with_alpha(config.glow_alpha).to_string());
	let glow_radius = config.glow_radius(state.theme);

	ctx.set_line_width(config.line_width);
	ctx.set_line_cap("round");
	ctx.set_line_join("round");

	for circuit in &state.circuits {
		let head = circuit.head(config.draw_step);

		ctx.set_stroke_style_str(&stroke);
		ctx.begin_path();
		ctx.move_to(circuit.origin.x, circuit.origin.y);
		for p in circuit.completed(config.draw_step) {
			ctx.line_to(p.x, p.y);
		}
		if let Some(p) = head {
			ctx.line_to(p.x, p.y);
		}
		ctx.stroke();

		let Some(p) = head else {
			continue;
		};
		let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, glow_radius) else {
			continue;
		};
		let _ = gradient.add_color_stop(0.0, &glow);
		let _ = gradient.add_color_stop(1.0, &Rgba::TRANSPARENT.to_string());
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_nodes<R: Entropy>(
	state: &CircuitBackgroundState<R>,
	ctx: &CanvasRenderingContext2d,
	color: Rgba,
) {
	ctx.set_fill_style_str(&color.to_string());
	for node in &state.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.pos.x, node.pos.y, state.config.node_size, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_links<R: Entropy>(
	state: &CircuitBackgroundState<R>,
	ctx: &CanvasRenderingContext2d,
	color: Rgba,
) {
	ctx.set_line_width(1.0);
	for link in state.links() {
		ctx.set_stroke_style_str(&color.with_alpha(link.opacity).to_string());
		ctx.begin_path();
		ctx.move_to(link.from.x, link.from.y);
		ctx.line_to(link.to.x, link.to.y);
		ctx.stroke();
	}
}

use crate::theme::Theme;

/// Tunables for the circuit background animation.
///
/// Distances are in CSS pixels, speeds in pixels per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CircuitConfig {
	pub circuit_count: usize,
	pub node_count: usize,
	pub line_width: f64,
	pub node_size: f64,
	/// Nodes closer than this are joined by a line.
	pub link_distance: f64,
	/// Alpha of a link between two coincident nodes.
	pub link_alpha: f64,
	/// Alpha at the center of a circuit's head glow.
	pub glow_alpha: f64,
	pub glow_radius_light: f64,
	pub glow_radius_dark: f64,
	/// Progress past a circuit's length before it regenerates.
	pub reset_overshoot: f64,
	/// Progress spent on each waypoint when drawing.
	pub draw_step: f64,
	pub segment_min: f64,
	pub segment_max: f64,
	pub length_min: f64,
	pub length_max: f64,
	pub speed_min: f64,
	pub speed_max: f64,
	/// Full range of each node velocity component, centered on zero.
	pub node_speed: f64,
}

impl Default for CircuitConfig {
	fn default() -> Self {
		Self {
			circuit_count: 15,
			node_count: 30,
			line_width: 1.5,
			node_size: 3.0,
			link_distance: 150.0,
			link_alpha: 0.15,
			glow_alpha: 0.6,
			glow_radius_light: 4.0,
			glow_radius_dark: 8.0,
			reset_overshoot: 50.0,
			draw_step: 40.0,
			segment_min: 20.0,
			segment_max: 60.0,
			length_min: 100.0,
			length_max: 300.0,
			speed_min: 0.5,
			speed_max: 1.5,
			node_speed: 0.5,
		}
	}
}

impl CircuitConfig {
	/// The head glow is larger on the dark background.
	pub fn glow_radius(&self, theme: Theme) -> f64 {
		match theme {
			Theme::Light => self.glow_radius_light,
			Theme::Dark => self.glow_radius_dark,
		}
	}

	/// Opacity of the line joining two nodes `dist` apart, `None` when they
	/// are too far apart to be linked.
	pub fn link_opacity(&self, dist: f64) -> Option<f64> {
		(dist < self.link_distance).then(|| (1.0 - dist / self.link_distance) * self.link_alpha)
	}
}

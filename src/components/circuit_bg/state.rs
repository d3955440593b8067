use crate::theme::Theme;

use super::config::CircuitConfig;
use super::entropy::{Entropy, MathRandom};
use super::types::{Circuit, Node, Point};

/// A line to draw between two nearby nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: Point,
	pub to: Point,
	pub opacity: f64,
}

pub struct CircuitBackgroundState<R = MathRandom> {
	pub config: CircuitConfig,
	pub circuits: Vec<Circuit>,
	pub nodes: Vec<Node>,
	pub width: f64,
	pub height: f64,
	pub theme: Theme,
	rng: R,
}

impl<R: Entropy> CircuitBackgroundState<R> {
	pub fn new(config: CircuitConfig, width: f64, height: f64, theme: Theme, rng: R) -> Self {
		let mut state = Self {
			config,
			circuits: Vec::new(),
			nodes: Vec::new(),
			width,
			height,
			theme,
			rng,
		};
		state.populate();
		state
	}

	fn populate(&mut self) {
		let (w, h) = (self.width, self.height);
		let config = &self.config;
		let rng = &mut self.rng;
		self.circuits = (0..config.circuit_count)
			.map(|_| Circuit::random(config, w, h, rng))
			.collect();
		self.nodes = (0..config.node_count)
			.map(|_| Node::random(config, w, h, rng))
			.collect();
	}

	/// Discards every circuit and node and seeds new ones for the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
	}

	/// Advances every circuit and node by one frame.
	pub fn tick(&mut self) {
		let (w, h) = (self.width, self.height);
		for circuit in &mut self.circuits {
			circuit.update(&self.config, w, h, &mut self.rng);
		}
		for node in &mut self.nodes {
			node.update(w, h);
		}
	}

	/// Every pair of nodes close enough to be joined, with its opacity.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (i, a) in self.nodes.iter().enumerate() {
			for b in &self.nodes[i + 1..] {
				if let Some(opacity) = self.config.link_opacity(a.pos.distance(b.pos)) {
					links.push(Link {
						from: a.pos,
						to: b.pos,
						opacity,
					});
				}
			}
		}
		links
	}
}

#[cfg(test)]
mod tests {
	use super::super::entropy::Scripted;
	use super::*;

	fn state(w: f64, h: f64) -> CircuitBackgroundState<Scripted> {
		CircuitBackgroundState::new(
			CircuitConfig::default(),
			w,
			h,
			Theme::Dark,
			Scripted::new(&[0.12, 0.93, 0.47, 0.61, 0.08, 0.35, 0.79]),
		)
	}

	fn node(x: f64, y: f64) -> Node {
		Node {
			pos: Point::new(x, y),
			vx: 0.0,
			vy: 0.0,
		}
	}

	#[test]
	fn populates_configured_counts() {
		let s = state(1280.0, 720.0);
		assert_eq!(s.circuits.len(), 15);
		assert_eq!(s.nodes.len(), 30);
	}

	#[test]
	fn everything_stays_in_bounds() {
		let mut s = state(400.0, 300.0);
		for _ in 0..2_000 {
			s.tick();
		}
		for n in &s.nodes {
			assert!((0.0..=400.0).contains(&n.pos.x));
			assert!((0.0..=300.0).contains(&n.pos.y));
		}
		for c in &s.circuits {
			assert!((0.0..=400.0).contains(&c.origin.x));
			assert!((0.0..=300.0).contains(&c.origin.y));
			assert!(c.progress <= c.length + s.config.reset_overshoot);
		}
	}

	#[test]
	fn resize_regenerates_within_new_bounds() {
		let mut s = state(1920.0, 1080.0);
		s.resize(320.0, 240.0);
		assert_eq!((s.width, s.height), (320.0, 240.0));
		assert_eq!(s.nodes.len(), 30);
		assert!(s.nodes.iter().all(|n| n.pos.x <= 320.0 && n.pos.y <= 240.0));
		assert!(s.circuits.iter().all(|c| c.progress == 0.0));
	}

	#[test]
	fn close_nodes_are_linked() {
		let mut s = state(500.0, 500.0);
		s.nodes = vec![node(0.0, 0.0), node(60.0, 80.0)];
		let links = s.links();
		assert_eq!(links.len(), 1);
		assert!(links[0].opacity > 0.0);
		assert!((links[0].opacity - (1.0 - 100.0 / 150.0) * 0.15).abs() < 1e-12);
	}

	#[test]
	fn distant_nodes_are_not_linked() {
		let mut s = state(500.0, 500.0);
		s.nodes = vec![node(0.0, 0.0), node(90.0, 120.0), node(400.0, 400.0)];
		assert!(s.links().is_empty());
	}

	#[test]
	fn link_opacity_cutoff() {
		let config = CircuitConfig::default();
		assert_eq!(config.link_opacity(150.0), None);
		assert_eq!(config.link_opacity(151.0), None);
		assert_eq!(config.link_opacity(0.0), Some(0.15));
		assert!(config.link_opacity(149.0).unwrap() > 0.0);
	}

	#[test]
	fn glow_is_larger_in_dark_mode() {
		let config = CircuitConfig::default();
		assert!(config.glow_radius(Theme::Dark) > config.glow_radius(Theme::Light));
	}
}

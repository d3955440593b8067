use super::config::CircuitConfig;
use super::entropy::Entropy;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	pub fn lerp(self, to: Point, t: f64) -> Point {
		Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
	}
}

/// A drifting point that bounces off the viewport edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub pos: Point,
	pub vx: f64,
	pub vy: f64,
}

impl Node {
	pub fn random(config: &CircuitConfig, width: f64, height: f64, rng: &mut impl Entropy) -> Self {
		Self {
			pos: Point::new(rng.range(0.0, width), rng.range(0.0, height)),
			vx: (rng.next_f64() - 0.5) * config.node_speed,
			vy: (rng.next_f64() - 0.5) * config.node_speed,
		}
	}

	pub fn update(&mut self, width: f64, height: f64) {
		self.pos.x += self.vx;
		self.pos.y += self.vy;

		if self.pos.x < 0.0 || self.pos.x > width {
			self.vx = -self.vx;
		}
		if self.pos.y < 0.0 || self.pos.y > height {
			self.vy = -self.vy;
		}

		self.pos.x = self.pos.x.max(0.0).min(width);
		self.pos.y = self.pos.y.max(0.0).min(height);
	}
}

/// An orthogonal trace that is progressively drawn, then regenerated.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
	pub origin: Point,
	/// `1.0` or `-1.0`; every horizontal run heads this way.
	pub direction: f64,
	/// Corners of the trace after `origin`, in drawing order.
	pub waypoints: Vec<Point>,
	/// Total of all segment lengths.
	pub length: f64,
	pub progress: f64,
	pub speed: f64,
}

impl Circuit {
	pub fn random(config: &CircuitConfig, width: f64, height: f64, rng: &mut impl Entropy) -> Self {
		let mut circuit = Self {
			origin: Point::default(),
			direction: 1.0,
			waypoints: Vec::new(),
			length: 0.0,
			progress: 0.0,
			speed: 0.0,
		};
		circuit.reset(config, width, height, rng);
		circuit
	}

	/// New origin, length, geometry and speed; progress back to zero.
	pub fn reset(
		&mut self,
		config: &CircuitConfig,
		width: f64,
		height: f64,
		rng: &mut impl Entropy,
	) {
		self.origin = Point::new(rng.range(0.0, width), rng.range(0.0, height));
		self.length = rng.range(config.length_min, config.length_max);
		self.progress = 0.0;
		self.direction = rng.sign();
		self.generate(config, rng);
		self.speed = rng.range(config.speed_min, config.speed_max);
	}

	fn generate(&mut self, config: &CircuitConfig, rng: &mut impl Entropy) {
		self.waypoints.clear();
		let mut at = self.origin;
		let mut remaining = self.length;

		while remaining > 0.0 {
			let step = rng.range(config.segment_min, config.segment_max).min(remaining);
			if self.waypoints.len() % 2 == 0 {
				at.x += step * self.direction;
			} else {
				at.y += step * rng.sign();
			}
			self.waypoints.push(at);
			remaining -= step;
		}
	}

	/// Advances one frame. Returns `true` if the circuit regenerated.
	pub fn update(
		&mut self,
		config: &CircuitConfig,
		width: f64,
		height: f64,
		rng: &mut impl Entropy,
	) -> bool {
		self.progress += self.speed;
		if self.progress > self.length + config.reset_overshoot {
			self.reset(config, width, height, rng);
			return true;
		}
		false
	}

	/// Lengths of each segment, origin first.
	#[cfg(test)]
	pub fn segment_lengths(&self) -> impl Iterator<Item = f64> + '_ {
		std::iter::once(self.origin)
			.chain(self.waypoints.iter().copied())
			.zip(self.waypoints.iter().copied())
			.map(|(a, b)| a.distance(b))
	}

	fn cursor(&self, step: f64) -> (usize, f64) {
		let index = (self.progress / step).floor() as usize;
		(index, (self.progress % step) / step)
	}

	/// Waypoints already fully drawn.
	pub fn completed(&self, step: f64) -> &[Point] {
		let (index, _) = self.cursor(step);
		&self.waypoints[..index.min(self.waypoints.len())]
	}

	/// Leading point on the segment being drawn, if any remains.
	pub fn head(&self, step: f64) -> Option<Point> {
		let (index, t) = self.cursor(step);
		let next = *self.waypoints.get(index)?;
		let prev = match index {
			0 => self.origin,
			i => self.waypoints[i - 1],
		};
		Some(prev.lerp(next, t))
	}
}

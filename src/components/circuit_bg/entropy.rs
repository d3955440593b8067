/// Source of uniform samples in `[0, 1)`.
pub trait Entropy {
	fn next_f64(&mut self) -> f64;

	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// `1.0` or `-1.0` with equal odds.
	fn sign(&mut self) -> f64 {
		if self.next_f64() > 0.5 { 1.0 } else { -1.0 }
	}
}

/// The browser's `Math.random`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl Entropy for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Replays a fixed cycle of samples.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct Scripted {
	samples: Vec<f64>,
	at: usize,
}

#[cfg(test)]
impl Scripted {
	pub fn new(samples: &[f64]) -> Self {
		assert!(!samples.is_empty());
		Self {
			samples: samples.to_vec(),
			at: 0,
		}
	}
}

#[cfg(test)]
impl Entropy for Scripted {
	fn next_f64(&mut self) -> f64 {
		let v = self.samples[self.at % self.samples.len()];
		self.at += 1;
		v
	}
}

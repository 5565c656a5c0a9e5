//! Drifting backdrop particles with toroidal wraparound.

use rand::Rng;

use super::theme::{Color, ParticleStyle};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
}

impl Particle {
	fn random<R: Rng>(rng: &mut R, style: &ParticleStyle, width: f64, height: f64) -> Self {
		let color = if style.shades.is_empty() {
			Color::rgb(255, 255, 255)
		} else {
			style.shades[rng.gen_range(0..style.shades.len())]
		};

		Self {
			x: span(rng, 0.0, width),
			y: span(rng, 0.0, height),
			dx: span(rng, -style.speed, style.speed),
			dy: span(rng, -style.speed, style.speed),
			radius: span(rng, style.radius_min, style.radius_max),
			opacity: span(rng, style.opacity_min, style.opacity_max),
			color,
		}
	}
}

/// Uniform sample from `[lo, hi)`, or `lo` for an empty range.
fn span<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Number of particles for a surface of the given width.
///
/// One particle per `width_divisor` pixels, capped at `capacity`.
pub fn population(width: f64, style: &ParticleStyle) -> usize {
	if !(width > 0.0) || !(style.width_divisor > 0.0) {
		return 0;
	}
	((width / style.width_divisor).floor() as usize).min(style.capacity)
}

/// Wrap `value` into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	if (0.0..extent).contains(&value) {
		return value;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

/// The full particle set for one surface size.
///
/// Never resized in place: a new extent means a new field with a bumped
/// `generation`.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	generation: u64,
}

impl ParticleField {
	/// Populate a field for a `width` x `height` surface.
	///
	/// A degenerate surface (either side zero) gets no particles.
	pub fn new<R: Rng>(
		style: &ParticleStyle,
		width: f64,
		height: f64,
		generation: u64,
		rng: &mut R,
	) -> Self {
		let count = if height > 0.0 {
			population(width, style)
		} else {
			0
		};
		let particles = (0..count)
			.map(|_| Particle::random(rng, style, width, height))
			.collect();

		Self {
			particles,
			width,
			height,
			generation,
		}
	}

	/// Build the replacement field for a new surface size.
	pub fn regenerate<R: Rng>(
		&self,
		style: &ParticleStyle,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		Self::new(style, width, height, self.generation + 1, rng)
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle by one frame, visiting each in insertion order.
	pub fn step_each(&mut self, mut visit: impl FnMut(&Particle)) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.x = wrap(p.x + p.dx, width);
			p.y = wrap(p.y + p.dy, height);
			visit(p);
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		self.step_each(|_| {});
	}
}

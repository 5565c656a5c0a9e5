//! Visual theming for the particle backdrop.
//!
//! Provides the color type and the named backdrop presets.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Grid overlay style.
#[derive(Clone, Debug)]
pub struct GridStyle {
	/// Distance between neighbouring lines, in pixels.
	pub spacing: f64,
	/// Stroke color, alpha included.
	pub color: Color,
	pub line_width: f64,
}

/// Particle population and appearance.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// One particle per this many pixels of surface width.
	pub width_divisor: f64,
	/// Upper bound on the particle count.
	pub capacity: usize,
	/// Candidate colors; each particle picks one at creation.
	pub shades: Vec<Color>,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Maximum absolute velocity per axis, in pixels per frame.
	pub speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Debug)]
pub struct BackdropTheme {
	pub name: &'static str,
	/// Opaque fill applied at the start of every frame.
	pub background: Color,
	pub grid: GridStyle,
	pub particles: ParticleStyle,
}

impl BackdropTheme {
	/// Zinc-grey particles over a near-black field (default).
	pub fn hashgo() -> Self {
		Self {
			name: "hashgo",
			background: Color::rgb(5, 5, 5),
			grid: GridStyle {
				spacing: 80.0,
				color: Color::rgba(255, 255, 255, 0.015),
				line_width: 1.0,
			},
			particles: ParticleStyle {
				width_divisor: 10.0,
				capacity: 150,
				shades: vec![
					Color::rgb(255, 255, 255), // White
					Color::rgb(161, 161, 170), // Zinc 400
					Color::rgb(113, 113, 122), // Zinc 500
					Color::rgb(63, 63, 70),    // Zinc 700
				],
				radius_min: 0.1,
				radius_max: 1.6,
				speed: 0.2,
				opacity_min: 0.1,
				opacity_max: 0.5,
			},
		}
	}

	/// Plain white particles only.
	pub fn mono() -> Self {
		let base = Self::hashgo();
		Self {
			name: "mono",
			particles: ParticleStyle {
				shades: vec![Color::rgb(255, 255, 255)],
				..base.particles
			},
			..base
		}
	}

	/// Look up a preset by name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"hashgo" => Self::hashgo(),
			"mono" => Self::mono(),
			other => {
				warn!("hashgo: unknown backdrop theme {:?}, using default", other);
				Self::default()
			}
		}
	}
}

impl Default for BackdropTheme {
	fn default() -> Self {
		Self::hashgo()
	}
}

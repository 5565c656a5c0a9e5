//! Backdrop scene state: the owned surface, its particle field, and theme.

use rand::Rng;

use super::particles::ParticleField;
use super::render;
use super::surface::Surface;
use super::theme::BackdropTheme;

/// Everything one mounted backdrop draws with.
///
/// Created when the renderer starts, mutated once per frame by the
/// animation loop, and rebuilt from scratch on resize.
pub struct Backdrop<S> {
	surface: S,
	field: ParticleField,
	theme: BackdropTheme,
}

impl<S: Surface> Backdrop<S> {
	pub fn new<R: Rng>(
		mut surface: S,
		width: f64,
		height: f64,
		theme: BackdropTheme,
		rng: &mut R,
	) -> Self {
		surface.resize(width, height);
		let field = ParticleField::new(&theme.particles, width, height, 0, rng);

		Self {
			surface,
			field,
			theme,
		}
	}

	/// Resize the surface and replace the whole particle set.
	pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.surface.resize(width, height);
		self.field = self
			.field
			.regenerate(&self.theme.particles, width, height, rng);
	}

	pub fn frame(&mut self) {
		render::render(&mut self.surface, &mut self.field, &self.theme);
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}
}

//! Per-frame drawing for the backdrop.
//!
//! Each frame is painted in three passes:
//! 1. Opaque background fill (no trails from previous frames)
//! 2. Grid overlay
//! 3. Particles, each advanced one step and then drawn

use super::grid::grid_lines;
use super::particles::ParticleField;
use super::surface::Surface;
use super::theme::BackdropTheme;

/// Advances the field by one frame and paints it onto `surface`.
pub fn render<S: Surface>(surface: &mut S, field: &mut ParticleField, theme: &BackdropTheme) {
	let (width, height) = (field.width(), field.height());

	surface.fill_rect(0.0, 0.0, width, height, theme.background);
	draw_grid(surface, width, height, theme);
	draw_particles(surface, field);
}

fn draw_grid<S: Surface>(surface: &mut S, width: f64, height: f64, theme: &BackdropTheme) {
	let grid = &theme.grid;
	for line in grid_lines(width, height, grid.spacing) {
		surface.stroke_line(line.from, line.to, grid.color, grid.line_width);
	}
}

fn draw_particles<S: Surface>(surface: &mut S, field: &mut ParticleField) {
	field.step_each(|p| {
		surface.fill_circle(p.x, p.y, p.radius, p.color.with_alpha(p.opacity));
	});
}

//! Static square grid overlay.

/// Line offsets along one axis: `0, spacing, 2 * spacing, ...` up to and
/// including the first offset at or past `extent`.
///
/// Yields `ceil(extent / spacing) + 1` offsets. A non-positive spacing
/// yields nothing.
pub fn line_offsets(extent: f64, spacing: f64) -> impl Iterator<Item = f64> {
	let count = if spacing > 0.0 && extent.is_finite() {
		(extent.max(0.0) / spacing).ceil() as usize + 1
	} else {
		0
	};
	(0..count).map(move |i| i as f64 * spacing)
}

/// A single grid line segment in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
	pub from: (f64, f64),
	pub to: (f64, f64),
}

/// All grid lines for a `width` x `height` surface: vertical lines first,
/// each spanning the full height, then horizontal lines across the full width.
pub fn grid_lines(width: f64, height: f64, spacing: f64) -> impl Iterator<Item = GridLine> {
	let vertical = line_offsets(width, spacing).map(move |x| GridLine {
		from: (x, 0.0),
		to: (x, height),
	});
	let horizontal = line_offsets(height, spacing).map(move |y| GridLine {
		from: (0.0, y),
		to: (width, y),
	});
	vertical.chain(horizontal)
}

//! Drawing surfaces the backdrop can render onto.

use std::f64::consts::PI;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// The drawing operations one frame needs.
pub trait Surface {
	/// Resize the backing raster to `width` x `height` pixels.
	fn resize(&mut self, width: f64, height: f64);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, line_width: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// An HTML canvas with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context of `canvas`. Returns `None` when the browser
	/// has no 2D context to give.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
			_ => {
				debug!("hashgo: canvas has no 2d context, backdrop disabled");
				return None;
			}
		};
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, width, height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, line_width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(line_width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}
}

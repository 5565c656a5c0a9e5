//! In-memory stand-ins for the browser: a surface that records draw calls
//! and a frame host whose frames and resize events are fired by hand.

use std::cell::RefCell;
use std::rc::Rc;

use super::host::{FrameHost, FrameId};
use super::surface::Surface;
use super::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Resize {
		width: f64,
		height: f64,
	},
	FillRect {
		x: f64,
		y: f64,
		width: f64,
		height: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
}

/// Records every draw call. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingSurface {
	ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
	pub fn len(&self) -> usize {
		self.ops.borrow().len()
	}

	pub fn take(&self) -> Vec<DrawOp> {
		std::mem::take(&mut *self.ops.borrow_mut())
	}

	pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
		self.ops.borrow().iter().filter(|op| pred(op)).count()
	}
}

impl Surface for RecordingSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.ops.borrow_mut().push(DrawOp::Resize { width, height });
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.ops.borrow_mut().push(DrawOp::FillRect {
			x,
			y,
			width,
			height,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, line_width: f64) {
		self.ops.borrow_mut().push(DrawOp::Line {
			from,
			to,
			color,
			width: line_width,
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ops.borrow_mut().push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
		});
	}
}

pub type ManualCallback = Rc<RefCell<Box<dyn FnMut()>>>;

struct HostState {
	viewport: (f64, f64),
	next_id: FrameId,
	frames: Vec<(FrameId, ManualCallback)>,
	resize_listeners: Vec<ManualCallback>,
}

/// Frame host driven by the test. Clones share the same state.
#[derive(Clone)]
pub struct ManualHost {
	state: Rc<RefCell<HostState>>,
}

impl ManualHost {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			state: Rc::new(RefCell::new(HostState {
				viewport: (width, height),
				next_id: 1,
				frames: Vec::new(),
				resize_listeners: Vec::new(),
			})),
		}
	}

	pub fn pending_frames(&self) -> usize {
		self.state.borrow().frames.len()
	}

	pub fn listener_count(&self) -> usize {
		self.state.borrow().resize_listeners.len()
	}

	/// Fire the oldest pending frame. Returns `false` if none was pending.
	pub fn run_frame(&self) -> bool {
		let next = {
			let mut state = self.state.borrow_mut();
			if state.frames.is_empty() {
				None
			} else {
				Some(state.frames.remove(0))
			}
		};
		match next {
			Some((_, cb)) => {
				(&mut *cb.borrow_mut())();
				true
			}
			None => false,
		}
	}

	/// Fire up to `n` frames, returning how many actually ran.
	pub fn run_frames(&self, n: usize) -> usize {
		(0..n).take_while(|_| self.run_frame()).count()
	}

	/// Change the viewport and notify every resize listener.
	pub fn resize(&self, width: f64, height: f64) {
		let listeners = {
			let mut state = self.state.borrow_mut();
			state.viewport = (width, height);
			state.resize_listeners.clone()
		};
		for cb in listeners {
			(&mut *cb.borrow_mut())();
		}
	}
}

impl FrameHost for ManualHost {
	type Callback = ManualCallback;

	fn callback(&self, f: Box<dyn FnMut()>) -> Self::Callback {
		Rc::new(RefCell::new(f))
	}

	fn request_frame(&self, callback: &Self::Callback) -> Option<FrameId> {
		let mut state = self.state.borrow_mut();
		let id = state.next_id;
		state.next_id += 1;
		state.frames.push((id, callback.clone()));
		Some(id)
	}

	fn cancel_frame(&self, id: FrameId) {
		self.state.borrow_mut().frames.retain(|(frame, _)| *frame != id);
	}

	fn add_resize_listener(&self, callback: &Self::Callback) {
		self.state.borrow_mut().resize_listeners.push(callback.clone());
	}

	fn remove_resize_listener(&self, callback: &Self::Callback) {
		self.state
			.borrow_mut()
			.resize_listeners
			.retain(|cb| !Rc::ptr_eq(cb, callback));
	}

	fn viewport_size(&self) -> (f64, f64) {
		self.state.borrow().viewport
	}
}

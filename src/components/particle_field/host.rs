//! The host environment's frame and resize facilities.
//!
//! The renderer only talks to the browser through [`FrameHost`], so the
//! animation lifecycle can be driven by hand in tests.

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Handle of a requested frame callback, used to cancel it.
pub type FrameId = i32;

/// Per-frame scheduling plus viewport resize notifications.
pub trait FrameHost: 'static {
	/// A host-owned callback. Must stay alive while registered.
	type Callback: 'static;

	/// Wrap `f` so the host can invoke it.
	fn callback(&self, f: Box<dyn FnMut()>) -> Self::Callback;

	/// Run `callback` once before the next repaint.
	fn request_frame(&self, callback: &Self::Callback) -> Option<FrameId>;

	/// Cancel a previously requested frame. Unknown ids are ignored.
	fn cancel_frame(&self, id: FrameId);

	fn add_resize_listener(&self, callback: &Self::Callback);

	fn remove_resize_listener(&self, callback: &Self::Callback);

	/// Current viewport size in CSS pixels.
	fn viewport_size(&self) -> (f64, f64);
}

/// [`FrameHost`] backed by the browser window.
pub struct WindowHost {
	window: Window,
}

impl WindowHost {
	pub fn new() -> Option<Self> {
		web_sys::window().map(|window| Self { window })
	}
}

impl FrameHost for WindowHost {
	type Callback = Closure<dyn FnMut()>;

	fn callback(&self, f: Box<dyn FnMut()>) -> Self::Callback {
		Closure::wrap(f)
	}

	fn request_frame(&self, callback: &Self::Callback) -> Option<FrameId> {
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, id: FrameId) {
		let _ = self.window.cancel_animation_frame(id);
	}

	fn add_resize_listener(&self, callback: &Self::Callback) {
		let _ = self
			.window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
	}

	fn remove_resize_listener(&self, callback: &Self::Callback) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
	}

	fn viewport_size(&self) -> (f64, f64) {
		let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		(
			dimension(self.window.inner_width()),
			dimension(self.window.inner_height()),
		)
	}
}

//! Start/stop lifecycle of the backdrop animation.
//!
//! The loop is a self-rescheduling frame callback: each tick draws one frame
//! and requests the next. The callback lives in a shared slot it also reads
//! from, so `stop` must clear the slot to break the `Rc` cycle.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::host::{FrameHost, FrameId};
use super::particles::ParticleField;
use super::state::Backdrop;
use super::surface::Surface;
use super::theme::BackdropTheme;

/// State touched from inside the frame and resize callbacks.
struct LoopState<S> {
	backdrop: Option<Backdrop<S>>,
	rng: StdRng,
	running: bool,
	pending: Option<FrameId>,
}

/// Drives a [`Backdrop`] from the host's frame callbacks.
///
/// Single-threaded and non-overlapping: a frame is drawn synchronously inside
/// one host callback, and the next one is only requested once it is done.
pub struct ParticleFieldRenderer<H: FrameHost, S: Surface + 'static> {
	host: Rc<H>,
	theme: BackdropTheme,
	state: Rc<RefCell<LoopState<S>>>,
	tick: Rc<RefCell<Option<H::Callback>>>,
	on_resize: Option<H::Callback>,
}

impl<H: FrameHost, S: Surface + 'static> ParticleFieldRenderer<H, S> {
	pub fn new(host: H, theme: BackdropTheme) -> Self {
		Self::with_rng(host, theme, StdRng::from_entropy())
	}

	/// Like [`new`](Self::new) with a caller-supplied random source.
	pub fn with_rng(host: H, theme: BackdropTheme, rng: StdRng) -> Self {
		Self {
			host: Rc::new(host),
			theme,
			state: Rc::new(RefCell::new(LoopState {
				backdrop: None,
				rng,
				running: false,
				pending: None,
			})),
			tick: Rc::new(RefCell::new(None)),
			on_resize: None,
		}
	}

	/// Bind to `surface`, size it to the viewport, populate the field and
	/// begin redrawing every frame.
	///
	/// `None` (no surface or no drawing context) is a silent no-op. Starting
	/// a running renderer restarts it on the new surface.
	pub fn start(&mut self, surface: Option<S>) {
		let Some(surface) = surface else {
			debug!("hashgo: no drawing surface, backdrop not started");
			return;
		};
		self.stop();

		let (width, height) = self.host.viewport_size();
		{
			let mut state = self.state.borrow_mut();
			let state = &mut *state;
			state.backdrop = Some(Backdrop::new(
				surface,
				width,
				height,
				self.theme.clone(),
				&mut state.rng,
			));
			state.running = true;
		}

		let (host, state) = (self.host.clone(), self.state.clone());
		let on_resize = self.host.callback(Box::new(move || {
			let (width, height) = host.viewport_size();
			let mut state = state.borrow_mut();
			let state = &mut *state;
			if let Some(backdrop) = state.backdrop.as_mut() {
				backdrop.resize(width, height, &mut state.rng);
				debug!(
					"hashgo: backdrop resized to {}x{}, {} particles",
					width,
					height,
					backdrop.field().len()
				);
			}
		}));
		self.host.add_resize_listener(&on_resize);
		self.on_resize = Some(on_resize);

		let (host, state, tick) = (self.host.clone(), self.state.clone(), self.tick.clone());
		*self.tick.borrow_mut() = Some(self.host.callback(Box::new(move || {
			let mut state = state.borrow_mut();
			state.pending = None;
			if !state.running {
				return;
			}
			if let Some(backdrop) = state.backdrop.as_mut() {
				backdrop.frame();
			}
			if let Some(cb) = tick.borrow().as_ref() {
				state.pending = host.request_frame(cb);
			}
		})));

		let pending = self
			.tick
			.borrow()
			.as_ref()
			.and_then(|cb| self.host.request_frame(cb));
		self.state.borrow_mut().pending = pending;

		debug!(
			"hashgo: backdrop started at {}x{}, {} particles",
			width,
			height,
			self.particle_count()
		);
	}

	/// Halt the redraw cycle and detach the resize listener.
	///
	/// Safe to call at any time, any number of times.
	pub fn stop(&mut self) {
		let (was_running, pending) = {
			let mut state = self.state.borrow_mut();
			let was_running = state.running;
			state.running = false;
			state.backdrop = None;
			(was_running, state.pending.take())
		};

		if let Some(id) = pending {
			self.host.cancel_frame(id);
		}
		if let Some(cb) = self.on_resize.take() {
			self.host.remove_resize_listener(&cb);
		}
		self.tick.borrow_mut().take();

		if was_running {
			debug!("hashgo: backdrop stopped");
		}
	}

	pub fn is_running(&self) -> bool {
		self.state.borrow().running
	}

	/// Particles in the current field, zero when stopped.
	pub fn particle_count(&self) -> usize {
		self.with_field(ParticleField::len).unwrap_or(0)
	}

	/// Inspect the live particle field, if started.
	pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField) -> T) -> Option<T> {
		self.state
			.borrow()
			.backdrop
			.as_ref()
			.map(|backdrop| f(backdrop.field()))
	}
}

impl<H: FrameHost, S: Surface + 'static> Drop for ParticleFieldRenderer<H, S> {
	fn drop(&mut self) {
		self.stop();
	}
}

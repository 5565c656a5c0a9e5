//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component renders a fixed, full-viewport canvas behind the page. Once
//! mounted it hands the canvas to a [`ParticleFieldRenderer`] driven by
//! `requestAnimationFrame`; the renderer is stopped when the component is
//! cleaned up.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::host::WindowHost;
use super::renderer::ParticleFieldRenderer;
use super::surface::CanvasSurface;
use super::theme::BackdropTheme;

/// Decorative animated backdrop: a faint grid with drifting particles.
///
/// Purely cosmetic. If the browser has no 2D canvas context the canvas stays
/// blank and the page background shows through.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] theme: Option<BackdropTheme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let renderer = StoredValue::new_local(None::<ParticleFieldRenderer<WindowHost, CanvasSurface>>);
	let theme = theme.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(host) = WindowHost::new() else {
			return;
		};

		let mut backdrop = ParticleFieldRenderer::new(host, theme.clone());
		backdrop.start(CanvasSurface::from_canvas(canvas));
		// Replacing a previous renderer drops it, which stops it.
		renderer.set_value(Some(backdrop));
	});

	on_cleanup(move || {
		let _ = renderer.try_update_value(|r| {
			if let Some(r) = r.as_mut() {
				r.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: 0; display: block; pointer-events: none;"
		/>
	}
}

//! Animated particle-field backdrop.
//!
//! Renders a decorative background on an HTML canvas with:
//! - An opaque dark fill every frame (no motion trails)
//! - A faint square grid overlay
//! - Drifting translucent particles that wrap around the edges
//!
//! The particle count follows the viewport width and the whole field is
//! regenerated on every window resize.
//!
//! # Example
//!
//! ```ignore
//! use hashgo_site::ParticleFieldCanvas;
//!
//! view! { <ParticleFieldCanvas /> }
//! ```
//!
//! The lifecycle can also be driven without Leptos:
//!
//! ```ignore
//! let mut renderer = ParticleFieldRenderer::new(WindowHost::new()?, BackdropTheme::default());
//! renderer.start(CanvasSurface::from_canvas(canvas));
//! // ...
//! renderer.stop();
//! ```

mod component;
pub mod grid;
mod host;
pub mod particles;
mod render;
mod renderer;
mod state;
mod surface;
pub mod theme;

#[cfg(test)]
mod testing;

pub use component::ParticleFieldCanvas;
pub use host::{FrameHost, FrameId, WindowHost};
pub use particles::{Particle, ParticleField};
pub use renderer::ParticleFieldRenderer;
pub use surface::{CanvasSurface, Surface};
pub use theme::{BackdropTheme, Color};

//! hashgo-site: landing page for the HASHGO mobile miner.
//!
//! This crate provides a WASM-based single-page site with an animated
//! particle-field backdrop and hero/feature copy that is optionally generated
//! by a remote language model.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulled in for its `js` feature so `rand` can seed from the browser.
use getrandom as _;

pub mod components;
pub mod config;
pub mod content;

pub use components::particle_field::{BackdropTheme, ParticleFieldCanvas, ParticleFieldRenderer};
pub use config::{SiteConfig, load_site_config};
pub use content::{AppDescription, Feature, fetch_app_description};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hashgo: logging initialized");
}

/// Main application component.
///
/// Renders the built-in copy immediately and swaps in generated copy once
/// the content request settles.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config();
	let backdrop_theme = config.backdrop_theme();
	let content_config = config.content();
	let description = RwSignal::new(AppDescription::fallback());

	leptos::task::spawn_local(async move {
		let fetched = fetch_app_description(&content_config).await;
		description.set(fetched.with_fallbacks());
	});

	let headline = move || description.with(|d| d.headline.clone());
	let subheadline = move || description.with(|d| d.subheadline.clone());
	let features = move || {
		description.with(|d| {
			d.features
				.iter()
				.map(|f| {
					let (title, body) = (f.title.clone(), f.description.clone());
					view! {
						<article class="feature-card">
							<h3 class="feature-title">{title}</h3>
							<p class="feature-description">{body}</p>
						</article>
					}
				})
				.collect_view()
		})
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="HASHGO | Mining Infrastructure" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<ParticleFieldCanvas theme=backdrop_theme />
			<main class="page-content">
				<header class="site-header">
					<h2 class="brand">"HASHGO"</h2>
					<p class="brand-tagline">"Mining Infrastructure"</p>
				</header>

				<section class="hero">
					<span class="hero-badge">"System Verified Build"</span>
					<h1 class="hero-headline">{headline}</h1>
					<p class="hero-subheadline">{subheadline}</p>
				</section>

				<section class="features">{features}</section>

				<footer class="site-footer">
					<p>"© 2024 HASHGO GLOBAL INFRASTRUCTURE"</p>
				</footer>
			</main>
		</div>
	}
}

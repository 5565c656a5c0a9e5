//! Site configuration embedded in the host page.
//!
//! Read once at startup from a script element:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "api_key": "...", "model": "gemini-3-flash-preview", "theme": "hashgo" }
//! </script>
//! ```
//!
//! Every field is optional. A missing or unparsable element yields the
//! defaults, which leave content generation disabled.

use std::fmt;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::particle_field::BackdropTheme;
use crate::content::ContentConfig;

/// DOM id of the configuration script element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credential for the content-generation API. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
	/// `None` for a blank key.
	pub fn new(key: impl Into<String>) -> Option<Self> {
		let key = key.into().trim().to_string();
		(!key.is_empty()).then_some(Self(key))
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ApiKey(<redacted>)")
	}
}

/// Raw configuration as embedded in the page.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	pub api_key: Option<String>,
	pub model: String,
	pub endpoint: String,
	/// Backdrop preset name, see [`BackdropTheme::by_name`].
	pub theme: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			api_key: None,
			model: DEFAULT_MODEL.to_string(),
			endpoint: DEFAULT_ENDPOINT.to_string(),
			theme: "hashgo".to_string(),
		}
	}
}

impl SiteConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	pub fn content(&self) -> ContentConfig {
		ContentConfig {
			api_key: self.api_key.clone().and_then(ApiKey::new),
			model: self.model.clone(),
			endpoint: self.endpoint.clone(),
		}
	}

	pub fn backdrop_theme(&self) -> BackdropTheme {
		BackdropTheme::by_name(&self.theme)
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load the configuration from the page, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
	let Some(text) = config_text() else {
		info!("hashgo: no #{} element, using default config", CONFIG_ELEMENT_ID);
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"hashgo: loaded config (model {}, theme {}, api key {})",
				config.model,
				config.theme,
				if config.content().api_key.is_some() {
					"set"
				} else {
					"unset"
				}
			);
			config
		}
		Err(e) => {
			warn!("hashgo: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}

//! Landing-page copy, optionally generated by a remote language model.
//!
//! [`fetch_app_description`] never fails: without an API key it returns the
//! built-in copy straight away, and any remote failure is logged and replaced
//! by the same copy.

mod error;
mod gemini;
mod transport;
mod types;

use log::{error, info, warn};

pub use error::ContentError;
pub use transport::{FetchTransport, Transport};
pub use types::{AppDescription, FEATURE_COUNT, Feature};

use crate::config::ApiKey;

/// Where and how to request generated copy.
#[derive(Clone, Debug)]
pub struct ContentConfig {
	/// `None` disables the remote call.
	pub api_key: Option<ApiKey>,
	pub model: String,
	/// API base URL, e.g. `https://generativelanguage.googleapis.com/v1beta`.
	pub endpoint: String,
}

/// Fetch page copy through the browser Fetch API.
pub async fn fetch_app_description(config: &ContentConfig) -> AppDescription {
	fetch_app_description_with(&FetchTransport, config).await
}

/// Fetch page copy through `transport`, falling back to
/// [`AppDescription::fallback`] on any error.
///
/// The result always passes [`AppDescription::is_complete`].
pub async fn fetch_app_description_with<T: Transport>(
	transport: &T,
	config: &ContentConfig,
) -> AppDescription {
	match generate(transport, config).await {
		Ok(description) => {
			info!("hashgo: loaded generated content from {}", config.model);
			description.with_fallbacks()
		}
		Err(ContentError::MissingCredential) => {
			warn!("hashgo: API key not found, using local content");
			AppDescription::fallback()
		}
		Err(e) => {
			error!("hashgo: content generation failed: {}", e);
			AppDescription::fallback()
		}
	}
}

async fn generate<T: Transport>(
	transport: &T,
	config: &ContentConfig,
) -> Result<AppDescription, ContentError> {
	let api_key = config
		.api_key
		.as_ref()
		.ok_or(ContentError::MissingCredential)?;

	let url = gemini::generate_url(&config.endpoint, &config.model);
	let body = gemini::request_body().to_string();
	let response = transport
		.post_json(&url, &[(gemini::API_KEY_HEADER, api_key.expose())], &body)
		.await?;

	gemini::parse_response(&response)
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;
	use serde_json::json;

	use super::*;

	/// Returns a canned result and records what was sent.
	struct StubTransport {
		reply: RefCell<Option<Result<String, ContentError>>>,
		calls: RefCell<Vec<(String, Vec<(String, String)>, String)>>,
	}

	impl StubTransport {
		fn replying(reply: Result<String, ContentError>) -> Self {
			Self {
				reply: RefCell::new(Some(reply)),
				calls: RefCell::new(Vec::new()),
			}
		}
	}

	impl Transport for StubTransport {
		async fn post_json(
			&self,
			url: &str,
			headers: &[(&str, &str)],
			body: &str,
		) -> Result<String, ContentError> {
			self.calls.borrow_mut().push((
				url.to_string(),
				headers
					.iter()
					.map(|(k, v)| (k.to_string(), v.to_string()))
					.collect(),
				body.to_string(),
			));
			self.reply
				.borrow_mut()
				.take()
				.unwrap_or_else(|| Err(ContentError::Transport("called twice".to_string())))
		}
	}

	fn config(api_key: Option<&str>) -> ContentConfig {
		ContentConfig {
			api_key: api_key.and_then(ApiKey::new),
			model: "gemini-3-flash-preview".to_string(),
			endpoint: "https://example.test/v1beta".to_string(),
		}
	}

	fn envelope(generated: serde_json::Value) -> String {
		json!({
			"candidates": [{ "content": { "parts": [{ "text": generated.to_string() }] } }]
		})
		.to_string()
	}

	#[test]
	fn without_credential_returns_fallback_without_calling_out() {
		let transport = StubTransport::replying(Ok(String::new()));

		let description = block_on(fetch_app_description_with(&transport, &config(None)));

		assert_eq!(description, AppDescription::fallback());
		assert!(description.is_complete());
		assert_eq!(description.features.len(), 3);
		assert!(transport.calls.borrow().is_empty());
	}

	#[test]
	fn default_transport_without_credential_never_touches_the_network() {
		let description = block_on(fetch_app_description(&config(None)));

		assert!(!description.headline.is_empty());
		assert!(!description.subheadline.is_empty());
		assert_eq!(description.features.len(), FEATURE_COUNT);
		assert!(
			description
				.features
				.iter()
				.all(|f| !f.title.is_empty() && !f.description.is_empty())
		);
	}

	#[test]
	fn generated_content_is_used_when_available() {
		let generated = json!({
			"headline": "HASH THE FUTURE",
			"subheadline": "Next-gen mobile mining.",
			"features": [
				{"title": "Turbo Core", "description": "Faster hashing."},
				{"title": "Vault Link", "description": "Encrypted pools."},
				{"title": "Live Stats", "description": "Watch every share."}
			]
		});
		let transport = StubTransport::replying(Ok(envelope(generated)));

		let description = block_on(fetch_app_description_with(&transport, &config(Some("k-123"))));

		assert_eq!(description.headline, "HASH THE FUTURE");
		assert_eq!(description.features[1].title, "Vault Link");

		let calls = transport.calls.borrow();
		assert_eq!(calls.len(), 1);
		let (url, headers, body) = &calls[0];
		assert_eq!(
			url,
			"https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
		);
		assert!(headers.contains(&("x-goog-api-key".to_string(), "k-123".to_string())));
		let body: serde_json::Value = serde_json::from_str(body).unwrap();
		assert_eq!(
			body["generationConfig"]["responseMimeType"],
			"application/json"
		);
	}

	#[test]
	fn partial_generated_content_is_completed() {
		let generated = json!({
			"headline": "HASH THE FUTURE",
			"features": [{"title": "Turbo Core", "description": "Faster hashing."}]
		});
		let transport = StubTransport::replying(Ok(envelope(generated)));

		let description = block_on(fetch_app_description_with(&transport, &config(Some("k"))));

		assert!(description.is_complete());
		assert_eq!(description.headline, "HASH THE FUTURE");
		assert_eq!(
			description.subheadline,
			AppDescription::fallback().subheadline
		);
		assert_eq!(description.features[0].title, "Turbo Core");
	}

	#[test]
	fn every_remote_failure_yields_fallback() {
		let failures = vec![
			Err(ContentError::Transport("offline".to_string())),
			Err(ContentError::Status(403)),
			Ok(r#"{"candidates": []}"#.to_string()),
			Ok("not json".to_string()),
			Ok(envelope(json!("just a string"))),
		];

		for reply in failures {
			let transport = StubTransport::replying(reply);
			let description = block_on(fetch_app_description_with(&transport, &config(Some("k"))));
			assert_eq!(description, AppDescription::fallback());
		}
	}
}

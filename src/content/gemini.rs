//! Request and response shapes for the Gemini `generateContent` REST call.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::ContentError;
use super::types::AppDescription;

const PROMPT: &str = "Generate a futuristic description for HASHGO mining software. \
	Keep it professional and tech-focused. Return JSON.";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// `{endpoint}/models/{model}:generateContent`
pub fn generate_url(endpoint: &str, model: &str) -> String {
	format!(
		"{}/models/{}:generateContent",
		endpoint.trim_end_matches('/'),
		model
	)
}

/// Fixed prompt plus a JSON response schema matching [`AppDescription`].
pub fn request_body() -> Value {
	let string = json!({ "type": "STRING" });
	json!({
		"contents": [{
			"role": "user",
			"parts": [{ "text": PROMPT }]
		}],
		"generationConfig": {
			"responseMimeType": "application/json",
			"responseSchema": {
				"type": "OBJECT",
				"properties": {
					"headline": string,
					"subheadline": string,
					"features": {
						"type": "ARRAY",
						"items": {
							"type": "OBJECT",
							"properties": {
								"title": string,
								"description": string
							},
							"required": ["title", "description"]
						}
					}
				},
				"required": ["headline", "subheadline", "features"]
			}
		}
	})
}

#[derive(Deserialize)]
struct GenerateResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
	content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
	text: Option<String>,
}

/// Extract the generated JSON from the first candidate and decode it.
pub fn parse_response(body: &str) -> Result<AppDescription, ContentError> {
	let response: GenerateResponse = serde_json::from_str(body)?;
	let text = response
		.candidates
		.into_iter()
		.next()
		.and_then(|c| c.content)
		.and_then(|c| c.parts.into_iter().find_map(|p| p.text))
		.filter(|text| !text.trim().is_empty())
		.ok_or(ContentError::EmptyResponse)?;

	Ok(serde_json::from_str(&text)?)
}

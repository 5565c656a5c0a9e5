//! HTTP transport for the content service.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::error::ContentError;

/// Sends one JSON POST and returns the response body.
#[allow(async_fn_in_trait)]
pub trait Transport {
	/// Non-2xx statuses are errors.
	async fn post_json(
		&self,
		url: &str,
		headers: &[(&str, &str)],
		body: &str,
	) -> Result<String, ContentError>;
}

/// [`Transport`] over the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	async fn post_json(
		&self,
		url: &str,
		headers: &[(&str, &str)],
		body: &str,
	) -> Result<String, ContentError> {
		let window =
			web_sys::window().ok_or_else(|| ContentError::Transport("no window".to_string()))?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(&JsValue::from_str(body));
		let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;

		let request_headers = request.headers();
		request_headers
			.set("content-type", "application/json")
			.map_err(js_error)?;
		for (name, value) in headers {
			request_headers.set(name, value).map_err(js_error)?;
		}

		let response: Response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(js_error)?
			.dyn_into()
			.map_err(js_error)?;
		if !response.ok() {
			return Err(ContentError::Status(response.status()));
		}

		JsFuture::from(response.text().map_err(js_error)?)
			.await
			.map_err(js_error)?
			.as_string()
			.ok_or(ContentError::EmptyResponse)
	}
}

fn js_error(value: JsValue) -> ContentError {
	let message = value
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"));
	ContentError::Transport(message)
}

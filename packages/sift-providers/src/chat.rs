use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::{Client, header::HeaderMap};
use serde_json::Value;

use sift_config::LlmProviderConfig;

/// One-time-constructed chat-completion client. The deployment mode (standard
/// vs Azure) is decided once from the config; the resolved URL and headers are
/// read-only afterwards.
#[derive(Debug)]
pub struct ChatClient {
	http: Client,
	url: String,
	headers: HeaderMap,
}
impl ChatClient {
	pub fn new(cfg: &LlmProviderConfig) -> Result<Self> {
		let http = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
		let (url, headers) = match &cfg.azure {
			Some(azure) => {
				let url = format!(
					"{}/openai/deployments/{}/chat/completions?api-version={}",
					azure.endpoint.trim_end_matches('/'),
					azure.deployment,
					azure.api_version,
				);

				(url, crate::azure_headers(&cfg.api_key)?)
			},
			None => {
				let url = format!("{}{}", cfg.api_base, cfg.path);

				(url, crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
			},
		};

		Ok(Self { http, url, headers })
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Issues exactly one chat-completion request; no retry. A non-success
	/// status surfaces as an error carrying the status line and response body,
	/// so callers can inspect the provider's own wording.
	pub async fn complete(
		&self,
		cfg: &LlmProviderConfig,
		system_message: &str,
		user_message: &str,
	) -> Result<String> {
		let body = serde_json::json!({
			"model": cfg.model,
			"temperature": cfg.temperature,
			"top_p": cfg.top_p,
			"max_tokens": cfg.max_tokens,
			"messages": [
				{ "role": "system", "content": system_message },
				{ "role": "user", "content": user_message },
			],
		});
		let res =
			self.http.post(&self.url).headers(self.headers.clone()).json(&body).send().await?;
		let status = res.status();

		if !status.is_success() {
			let detail = res.text().await.unwrap_or_default();

			return Err(eyre::eyre!("Chat completion failed with status {status}: {detail}"));
		}

		let json: Value = res.json().await?;

		parse_completion_text(json)
	}
}

fn parse_completion_text(json: Value) -> Result<String> {
	json.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|content| content.as_str())
		.map(str::to_string)
		.ok_or_else(|| eyre::eyre!("Chat completion response is missing message content."))
}

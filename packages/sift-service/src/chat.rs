use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{ChatProvider, Error, HttpChatProvider, Result};
use sift_config::Config;
use sift_domain::{
	ChatContext, EvidenceSource, Intent, IntentClassification, classify_intent, prompt,
	search_resume,
};

pub const EMPTY_COMPLETION_MESSAGE: &str =
	"I'm sorry, I couldn't generate an answer for that question. Please try rephrasing it.";
pub const CREDENTIALS_MESSAGE: &str = "I could not reach the language model because the \
	configured API credentials were rejected. Please verify the API key and try again.";
pub const RATE_LIMIT_MESSAGE: &str = "The language model is currently rate limiting requests. \
	Please wait a moment and try again.";
pub const QUOTA_MESSAGE: &str = "The language model quota for this account has been exhausted. \
	Please review the plan and billing details.";
pub const MODEL_ACCESS_MESSAGE: &str = "The configured language model is not available to this \
	account. Please verify the model or deployment name.";
pub const GENERIC_FAILURE_MESSAGE: &str =
	"I'm sorry, something went wrong while generating a response. Please try again.";

/// Substring → message table, checked top to bottom. The order is part of the
/// contract: an error mentioning both "401" and "model" reports credentials.
const ERROR_RULES: &[(&[&str], &str)] = &[
	(&["401", "Incorrect API key"], CREDENTIALS_MESSAGE),
	(&["429"], RATE_LIMIT_MESSAGE),
	(&["insufficient_quota", "exceeded your current quota"], QUOTA_MESSAGE),
	(&["model"], MODEL_ACCESS_MESSAGE),
];

/// Maps raw provider error text to a fixed user-safe message.
pub fn map_provider_error(error_text: &str) -> &'static str {
	for (needles, message) in ERROR_RULES {
		if needles.iter().any(|needle| error_text.contains(needle)) {
			return message;
		}
	}

	GENERIC_FAILURE_MESSAGE
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatRequest {
	pub query: String,
	#[serde(default)]
	pub context: ChatContext,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
	pub answer: String,
	pub intent: Intent,
	pub confidence: f32,
	pub entities: BTreeMap<String, String>,
	pub evidence: Vec<EvidenceSource>,
}

pub struct ChatService {
	config: Config,
	provider: Arc<dyn ChatProvider>,
}
impl ChatService {
	pub fn new(config: Config) -> Self {
		Self::with_provider(config, Arc::new(HttpChatProvider::new()))
	}

	pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
		Self { config, provider }
	}

	/// Runs the full pipeline for one query: classify, retrieve, generate.
	pub async fn answer(&self, request: ChatRequest) -> Result<ChatResponse> {
		let query = request.query.trim();

		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let classification = classify_intent(query);
		let resume_text = request.context.resume_text.as_deref().unwrap_or("");
		let evidence = search_resume(resume_text, query);

		tracing::debug!(
			intent = %classification.intent,
			confidence = classification.confidence,
			evidence = evidence.len(),
			"Classified chat query.",
		);

		let answer =
			self.generate_response(query, &request.context, &classification, &evidence).await;

		Ok(ChatResponse {
			answer,
			intent: classification.intent,
			confidence: classification.confidence,
			entities: classification.entities,
			evidence,
		})
	}

	/// Issues the single generation call and always resolves to displayable
	/// text; provider failures are translated, never propagated.
	pub async fn generate_response(
		&self,
		query: &str,
		context: &ChatContext,
		classification: &IntentClassification,
		evidence: &[EvidenceSource],
	) -> String {
		let user_message = prompt::build_user_message(context, query, classification, evidence);
		let completion = self
			.provider
			.complete(&self.config.provider.llm, prompt::SYSTEM_INSTRUCTION, &user_message)
			.await;

		match completion {
			Ok(text) if text.trim().is_empty() => EMPTY_COMPLETION_MESSAGE.to_string(),
			Ok(text) => text,
			Err(err) => {
				let error_text = format!("{err:#}");

				tracing::warn!(error = %error_text, "Chat completion failed.");

				map_provider_error(&error_text).to_string()
			},
		}
	}
}

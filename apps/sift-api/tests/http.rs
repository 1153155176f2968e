use std::sync::Arc;

use axum::{
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::{Map, Value};
use tower::util::ServiceExt;

use sift_api::{routes, state::AppState};
use sift_config::{Config, LlmProviderConfig, Provider, Service};
use sift_service::{BoxFuture, ChatProvider, ChatService};

struct StubProvider {
	reply: Result<String, String>,
}
impl ChatProvider for StubProvider {
	fn complete<'a>(
		&'a self,
		_cfg: &'a LlmProviderConfig,
		_system_message: &'a str,
		_user_message: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		let reply = self.reply.clone();

		Box::pin(async move { reply.map_err(|message| color_eyre::eyre::eyre!(message)) })
	}
}

fn test_config() -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		provider: Provider {
			llm: LlmProviderConfig {
				api_base: "http://localhost".to_string(),
				api_key: "key".to_string(),
				path: "/v1/chat/completions".to_string(),
				model: "m".to_string(),
				temperature: 0.2,
				top_p: 0.9,
				max_tokens: 4_096,
				timeout_ms: 1_000,
				default_headers: Map::new(),
				azure: None,
			},
		},
	}
}

fn app_with(reply: Result<&str, &str>) -> axum::Router {
	let reply = reply.map(str::to_string).map_err(str::to_string);
	let service = ChatService::with_provider(test_config(), Arc::new(StubProvider { reply }));

	routes::router(AppState::with_service(service))
}

async fn post_chat(app: axum::Router, payload: Value) -> (StatusCode, Value) {
	let request = Request::builder()
		.method("POST")
		.uri("/v1/chat")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(payload.to_string()))
		.expect("request");
	let response = app.oneshot(request).await.expect("response");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
	let json = serde_json::from_slice(&bytes).expect("json body");

	(status, json)
}

#[tokio::test]
async fn health_returns_ok() {
	let app = app_with(Ok("unused"));
	let response = app
		.oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
		.await
		.expect("response");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_returns_answer_with_intent_and_evidence() {
	let app = app_with(Ok("The resume shows direct Python work."));
	let payload = serde_json::json!({
		"query": "Does the candidate know Python",
		"context": {
			"candidateName": "Dana",
			"resumeText": "I wrote Python code. I led a team."
		}
	});
	let (status, json) = post_chat(app, payload).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["answer"], "The resume shows direct Python work.");
	assert_eq!(json["intent"], "resume_detail_inquiry");
	assert!(
		json["confidence"].as_f64().is_some_and(|confidence| (confidence - 0.8).abs() < 1e-6)
	);
	assert_eq!(json["evidence"][0]["type"], "resume");
	assert!(json["evidence"][0]["content"].as_str().is_some_and(|c| c.contains("Python")));
}

#[tokio::test]
async fn provider_failure_still_returns_ok_with_mapped_message() {
	let app = app_with(Err("Chat completion failed with status 429: slow down"));
	let payload = serde_json::json!({ "query": "Why was the candidate qualified" });
	let (status, json) = post_chat(app, payload).await;

	assert_eq!(status, StatusCode::OK);
	assert!(
		json["answer"].as_str().is_some_and(|answer| answer.contains("rate limiting")),
		"mapped message expected, got: {json}"
	);
}

#[tokio::test]
async fn blank_query_is_a_bad_request() {
	let app = app_with(Ok("unused"));
	let payload = serde_json::json!({ "query": "   " });
	let (status, json) = post_chat(app, payload).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "invalid_request");
}

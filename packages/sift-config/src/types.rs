use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub provider: Provider,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Provider {
	pub llm: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	#[serde(default = "default_temperature")]
	pub temperature: f32,
	#[serde(default = "default_top_p")]
	pub top_p: f32,
	#[serde(default = "default_max_tokens")]
	pub max_tokens: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
	/// Presence of this table selects the Azure deployment mode.
	pub azure: Option<AzureDeployment>,
}

#[derive(Debug, Deserialize)]
pub struct AzureDeployment {
	pub endpoint: String,
	pub deployment: String,
	pub api_version: String,
}

fn default_temperature() -> f32 {
	0.2
}

fn default_top_p() -> f32 {
	0.9
}

fn default_max_tokens() -> u32 {
	4_096
}

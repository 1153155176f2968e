pub mod chat;
mod error;

use std::{future::Future, pin::Pin, sync::OnceLock};

pub use chat::{ChatRequest, ChatResponse, ChatService, map_provider_error};
pub use error::{Error, Result};

use sift_config::LlmProviderConfig;
use sift_providers::ChatClient;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam over the chat-completion call so tests can substitute the HTTP client.
pub trait ChatProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		system_message: &'a str,
		user_message: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

/// Default provider backed by [`ChatClient`], built lazily at most once and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct HttpChatProvider {
	client: OnceLock<ChatClient>,
}
impl HttpChatProvider {
	pub fn new() -> Self {
		Self { client: OnceLock::new() }
	}

	fn client(&self, cfg: &LlmProviderConfig) -> color_eyre::Result<&ChatClient> {
		match self.client.get() {
			Some(client) => Ok(client),
			None => {
				let built = ChatClient::new(cfg)?;

				Ok(self.client.get_or_init(|| built))
			},
		}
	}
}
impl ChatProvider for HttpChatProvider {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		system_message: &'a str,
		user_message: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(async move {
			self.client(cfg)?.complete(cfg, system_message, user_message).await
		})
	}
}

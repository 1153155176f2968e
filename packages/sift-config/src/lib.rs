mod error;
mod types;

pub use error::{Error, Result};
pub use types::{AzureDeployment, Config, LlmProviderConfig, Provider, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.provider.llm.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.llm.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.provider.llm.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.llm.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.provider.llm.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.llm.model must be non-empty.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&cfg.provider.llm.temperature)
		|| !cfg.provider.llm.temperature.is_finite()
	{
		return Err(Error::Validation {
			message: "provider.llm.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}
	if !(cfg.provider.llm.top_p > 0.0 && cfg.provider.llm.top_p <= 1.0) {
		return Err(Error::Validation {
			message: "provider.llm.top_p must be greater than zero and at most 1.0.".to_string(),
		});
	}
	if cfg.provider.llm.max_tokens == 0 {
		return Err(Error::Validation {
			message: "provider.llm.max_tokens must be greater than zero.".to_string(),
		});
	}
	if cfg.provider.llm.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "provider.llm.timeout_ms must be greater than zero.".to_string(),
		});
	}

	if let Some(azure) = &cfg.provider.llm.azure {
		if azure.endpoint.trim().is_empty() {
			return Err(Error::Validation {
				message: "provider.llm.azure.endpoint must be non-empty.".to_string(),
			});
		}
		if azure.deployment.trim().is_empty() {
			return Err(Error::Validation {
				message: "provider.llm.azure.deployment must be non-empty.".to_string(),
			});
		}
		if azure.api_version.trim().is_empty() {
			return Err(Error::Validation {
				message: "provider.llm.azure.api_version must be non-empty.".to_string(),
			});
		}
	}

	Ok(())
}

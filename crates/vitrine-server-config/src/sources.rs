// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};
use vitrine_common_i18n::Locale;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/vitrine/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			trace!(path = %self.path.display(), "config file absent, skipping");
			return Ok(ServerConfigLayer::default());
		}

		let contents = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
			path: self.path.clone(),
			source,
		})?;
		toml::from_str(&contents).map_err(|source| ConfigError::Parse {
			path: self.path.clone(),
			source,
		})
	}
}

/// Environment variable configuration source (`VITRINE_SERVER_*`).
pub struct EnvSource;

impl EnvSource {
	fn var(name: &str) -> Option<String> {
		std::env::var(name).ok().filter(|value| !value.is_empty())
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		let mut layer = ServerConfigLayer::default();

		let host = Self::var("VITRINE_SERVER_HOST");
		let port = Self::var("VITRINE_SERVER_PORT")
			.map(|value| {
				value
					.parse::<u16>()
					.map_err(|e| ConfigError::InvalidValue {
						key: "VITRINE_SERVER_PORT",
						value,
						reason: e.to_string(),
					})
			})
			.transpose()?;
		if host.is_some() || port.is_some() {
			layer.http = Some(HttpConfigLayer { host, port });
		}

		if let Some(level) = Self::var("VITRINE_SERVER_LOG") {
			layer.logging = Some(LoggingConfigLayer { level: Some(level) });
		}

		let default_locale = Self::var("VITRINE_SERVER_DEFAULT_LOCALE")
			.map(|value| {
				Locale::parse(&value).map_err(|e| ConfigError::InvalidValue {
					key: "VITRINE_SERVER_DEFAULT_LOCALE",
					value,
					reason: e.to_string(),
				})
			})
			.transpose()?;
		if default_locale.is_some() {
			layer.i18n = Some(I18nConfigLayer { default_locale });
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_toml_source_parses_sections() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(
			&path,
			r#"
[http]
host = "0.0.0.0"
port = 8080

[logging]
level = "debug"

[i18n]
default_locale = "gr"
"#,
		)
		.unwrap();

		let layer = TomlSource::new(&path).load().unwrap();
		assert_eq!(layer.http.unwrap().port, Some(8080));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
		assert_eq!(layer.i18n.unwrap().default_locale, Some(Locale::Gr));
	}

	#[test]
	fn test_toml_source_missing_file_is_empty_layer() {
		let dir = tempfile::tempdir().unwrap();
		let layer = TomlSource::new(dir.path().join("absent.toml")).load().unwrap();
		assert_eq!(layer, ServerConfigLayer::default());
	}

	#[test]
	fn test_toml_source_rejects_malformed_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(&path, "[http\nport = {").unwrap();
		assert!(matches!(
			TomlSource::new(&path).load(),
			Err(ConfigError::Parse { .. })
		));
	}
}

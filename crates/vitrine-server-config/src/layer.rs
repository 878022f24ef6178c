// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The mergeable configuration layer produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// One source's partial view of the configuration.
///
/// Later (higher-precedence) layers override earlier ones key by key, not
/// section by section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	pub http: Option<HttpConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
	pub i18n: Option<I18nConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge a higher-precedence layer into this one.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, overlay: Option<T>, merge: fn(&mut T, T)) {
	if let Some(overlay) = overlay {
		match base {
			Some(base) => merge(base, overlay),
			None => *base = Some(overlay),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overrides_key_by_key() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("0.0.0.0".to_string()),
				port: Some(8080),
			}),
			..ServerConfigLayer::default()
		};
		let overlay = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9000),
			}),
			..ServerConfigLayer::default()
		};

		base.merge(overlay);
		let http = base.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("0.0.0.0"));
		assert_eq!(http.port, Some(9000));
	}

	#[test]
	fn test_merge_fills_absent_sections() {
		let mut base = ServerConfigLayer::default();
		let overlay = ServerConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..ServerConfigLayer::default()
		};

		base.merge(overlay);
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("debug"));
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::Locale;
use vitrine_content::AboutSection;

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

/// About-section content for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AboutSectionResponse {
	/// The locale the content was resolved for, so the client knows what
	/// it received.
	pub lang: Locale,
	pub title: String,
	pub highlight: String,
	pub paragraphs: Vec<String>,
}

impl AboutSectionResponse {
	/// Build the response payload from a locale's section copy.
	pub fn new(lang: Locale, section: &AboutSection) -> Self {
		Self {
			lang,
			title: section.title.to_string(),
			highlight: section.highlight.to_string(),
			paragraphs: section.paragraphs.iter().map(|p| p.to_string()).collect(),
		}
	}
}

/// Query parameters for the explicit-language section endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct LangQuery {
	/// Requested locale tag, matched case-insensitively against the
	/// supported set. Invalid or absent values fall back to the ambient
	/// locale.
	pub lang: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_content::about_section;

	#[test]
	fn test_response_shape() {
		let response =
			AboutSectionResponse::new(Locale::Gr, about_section(Locale::Gr));
		let value = serde_json::to_value(&response).unwrap();

		assert_eq!(value["lang"], "gr");
		assert_eq!(value["title"], "Σχετικά με εμένα");
		assert_eq!(value["paragraphs"].as_array().unwrap().len(), 4);
	}

	#[test]
	fn test_lang_query_deserializes() {
		let query: LangQuery = serde_json::from_str(r#"{"lang":"GR"}"#).unwrap();
		assert_eq!(query.lang.as_deref(), Some("GR"));

		let query: LangQuery = serde_json::from_str("{}").unwrap();
		assert!(query.lang.is_none());
	}
}

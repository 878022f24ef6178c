// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and locale metadata.
//!
//! The locale set is closed at compile time: adding a language means adding
//! an enum variant here and a message table in [`crate::messages`]. Every
//! consumer that accepts untrusted locale strings goes through
//! [`Locale::parse`] or [`Locale::parse_or_default`], so an unrecognized
//! value can never escape into the rest of the system.

use serde::{Deserialize, Serialize};

/// The locale used when no signal selects anything else.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Locale {
	/// English (default).
	En,
	/// Greek.
	Gr,
}

/// Error returned when a locale tag is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocaleError(pub String);

impl Locale {
	/// All supported locales, default first.
	pub const ALL: [Locale; 2] = [Locale::En, Locale::Gr];

	/// The lowercase tag used in URLs, storage, and wire payloads.
	pub const fn as_str(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Gr => "gr",
		}
	}

	/// Parse a locale tag, case-insensitively.
	///
	/// # Errors
	///
	/// Returns [`UnknownLocaleError`] for any value outside the supported
	/// set, including the empty string.
	pub fn parse(tag: &str) -> Result<Self, UnknownLocaleError> {
		let lowered = tag.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|locale| locale.as_str() == lowered)
			.ok_or_else(|| UnknownLocaleError(tag.to_string()))
	}

	/// Parse a locale tag, resolving anything unrecognized to the default.
	///
	/// This is the total-function entry point for inputs that must never
	/// fail (stored preferences, query parameters).
	pub fn parse_or_default(tag: &str) -> Self {
		Self::parse(tag).unwrap_or(DEFAULT_LOCALE)
	}

	/// Supported locales other than the default, in declaration order.
	///
	/// These are the locales that carry a URL path prefix.
	pub fn alternates() -> impl Iterator<Item = Locale> {
		Self::ALL.into_iter().filter(|l| *l != DEFAULT_LOCALE)
	}

	/// The URL path prefix for this locale: `""` for the default locale,
	/// `"/<tag>"` otherwise.
	pub fn prefix(self) -> String {
		if self == DEFAULT_LOCALE {
			String::new()
		} else {
			format!("/{}", self.as_str())
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl std::fmt::Display for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Locale {
	type Err = UnknownLocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// Display metadata for a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	/// Name in English, for admin surfaces.
	pub english_name: &'static str,
	/// Name in the language itself, for the language switcher.
	pub native_name: &'static str,
}

/// Metadata for a single locale.
pub fn locale_info(locale: Locale) -> LocaleInfo {
	match locale {
		Locale::En => LocaleInfo {
			locale,
			english_name: "English",
			native_name: "English",
		},
		Locale::Gr => LocaleInfo {
			locale,
			english_name: "Greek",
			native_name: "Ελληνικά",
		},
	}
}

/// Metadata for every supported locale, default first.
pub fn available_locales() -> Vec<LocaleInfo> {
	Locale::ALL.into_iter().map(locale_info).collect()
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized path building and parsing.
//!
//! The default locale carries no URL prefix; every other locale prefixes
//! paths with its tag (`/gr/about`). Prefix matching is segment-exact:
//! `/gr` and `/gr/about` carry the Greek prefix, `/green` does not.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Normalize a path for building and comparison.
///
/// Ensures a leading `/` and strips trailing slash runs, except for the
/// root path itself, so `/about/` and `/about` compare equal.
pub fn normalize_path(path: &str) -> String {
	let absolute = if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{path}")
	};
	let trimmed = absolute.trim_end_matches('/');
	if trimmed.is_empty() {
		"/".to_string()
	} else {
		trimmed.to_string()
	}
}

/// The locale whose prefix segment leads `path`, if any.
///
/// The default locale never carries a prefix, so it is never returned.
pub fn leading_locale(path: &str) -> Option<Locale> {
	let normalized = normalize_path(path);
	Locale::alternates().find(|locale| {
		let prefix = locale.prefix();
		normalized == prefix || normalized.starts_with(&format!("{prefix}/"))
	})
}

/// Build the locale-prefixed form of an absolute base path.
///
/// The base path is normalized first; a missing leading `/` is prepended.
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{to_localized_path, Locale};
///
/// assert_eq!(to_localized_path("/", Locale::Gr), "/gr");
/// assert_eq!(to_localized_path("/about", Locale::Gr), "/gr/about");
/// assert_eq!(to_localized_path("/about", Locale::En), "/about");
/// ```
pub fn to_localized_path(base_path: &str, locale: Locale) -> String {
	let normalized = normalize_path(base_path);
	if locale == DEFAULT_LOCALE {
		return normalized;
	}
	if normalized == "/" {
		return locale.prefix();
	}
	format!("{}{normalized}", locale.prefix())
}

/// Remove a supported locale's leading prefix segment, recovering the base
/// path.
///
/// Paths with no recognized prefix are returned unchanged apart from
/// normalization. Inverse of [`to_localized_path`] for normalized base
/// paths.
pub fn strip_locale_prefix(path: &str) -> String {
	let normalized = normalize_path(path);
	match leading_locale(&normalized) {
		Some(locale) => {
			let rest = &normalized[locale.prefix().len()..];
			if rest.is_empty() {
				"/".to_string()
			} else {
				rest.to_string()
			}
		}
		None => normalized,
	}
}

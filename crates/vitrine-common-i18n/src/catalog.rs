// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalog lookup.
//!
//! Lookups are total: a key missing from the requested locale falls back to
//! the default locale's table, and a key missing everywhere resolves to the
//! key itself. The catalog is built once and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::messages;

static CATALOG: Lazy<HashMap<Locale, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
	let mut catalog = HashMap::new();
	catalog.insert(Locale::En, messages::EN.iter().copied().collect());
	catalog.insert(Locale::Gr, messages::GR.iter().copied().collect());
	catalog
});

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
	CATALOG
		.get(&locale)
		.and_then(|table| table.get(key))
		.copied()
		.or_else(|| {
			CATALOG
				.get(&DEFAULT_LOCALE)
				.and_then(|table| table.get(key))
				.copied()
		})
}

/// Translate a message key for the given locale.
///
/// Falls back per key to the default locale. A key absent from every table
/// is returned verbatim so a missed translation shows up in the UI instead
/// of failing.
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{t, Locale};
///
/// assert_eq!(t(Locale::Gr, "nav.home"), "Αρχική");
/// assert_eq!(t(Locale::En, "nav.home"), "Home");
/// ```
pub fn t(locale: Locale, key: &str) -> String {
	match lookup(locale, key) {
		Some(message) => message.to_string(),
		None => {
			tracing::debug!(locale = %locale, key, "message key missing from catalog");
			key.to_string()
		}
	}
}

/// Translate a message key and substitute `{name}` tokens.
///
/// Substitution is a single pass: replacement values are never re-scanned
/// for tokens, and tokens without a matching argument are left as-is.
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{t_fmt, Locale};
///
/// let line = t_fmt(Locale::En, "footer.copyright", &[("year", "2025")]);
/// assert_eq!(line, "© 2025 My Portfolio");
/// ```
pub fn t_fmt(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
	let template = t(locale, key);
	let mut out = String::with_capacity(template.len());
	let mut rest = template.as_str();

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after_open = &rest[open + 1..];
		match after_open.find('}') {
			Some(close) => {
				let name = &after_open[..close];
				match args.iter().find(|(arg, _)| *arg == name) {
					Some((_, value)) => out.push_str(value),
					None => {
						out.push('{');
						out.push_str(name);
						out.push('}');
					}
				}
				rest = &after_open[close + 1..];
			}
			None => {
				// Unbalanced brace, keep the remainder untouched.
				out.push_str(&rest[open..]);
				rest = "";
			}
		}
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_in_requested_locale() {
		assert_eq!(t(Locale::Gr, "nav.about"), "Σχετικά");
	}

	#[test]
	fn test_missing_key_falls_back_to_default_locale() {
		// footer.copyright only exists in the English table.
		assert_eq!(t(Locale::Gr, "footer.copyright"), "© {year} My Portfolio");
	}

	#[test]
	fn test_missing_key_everywhere_returns_key() {
		assert_eq!(t(Locale::En, "nav.does_not_exist"), "nav.does_not_exist");
	}

	#[test]
	fn test_fmt_substitutes_named_args() {
		let line = t_fmt(Locale::Gr, "footer.copyright", &[("year", "2026")]);
		assert_eq!(line, "© 2026 My Portfolio");
	}

	#[test]
	fn test_fmt_leaves_unknown_tokens() {
		let line = t_fmt(Locale::En, "footer.copyright", &[("month", "May")]);
		assert_eq!(line, "© {year} My Portfolio");
	}

	#[test]
	fn test_fmt_without_tokens_is_identity() {
		assert_eq!(
			t_fmt(Locale::En, "footer.rights", &[("year", "2026")]),
			"All rights reserved."
		);
	}

	#[test]
	fn test_english_table_is_total_for_greek_keys() {
		// Every Greek key must exist in the reference table; partial
		// coverage is only allowed in the other direction.
		let en: std::collections::HashSet<&str> =
			crate::messages::EN.iter().map(|(k, _)| *k).collect();
		for (key, _) in crate::messages::GR {
			assert!(en.contains(key), "key {key} missing from English table");
		}
	}
}

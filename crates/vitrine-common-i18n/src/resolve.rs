// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::env::Environment;
use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::path::leading_locale;

/// Resolve the initial locale from the environment's signals.
///
/// Resolution order (highest to lowest priority):
/// 1. The persisted locale preference (if valid)
/// 2. The current path's locale prefix segment
/// 3. The default locale
///
/// A persisted value outside the supported set is ignored, not propagated;
/// the skip is logged at `debug` level. An environment with no signals at
/// all (headless rendering) deterministically resolves to the default
/// locale. Never fails.
///
/// # Example
///
/// ```
/// use vitrine_common_i18n::{resolve_initial_locale, HeadlessEnvironment, Locale};
///
/// assert_eq!(resolve_initial_locale(&HeadlessEnvironment), Locale::En);
/// ```
pub fn resolve_initial_locale(env: &dyn Environment) -> Locale {
	if let Some(stored) = env.stored_locale() {
		match Locale::parse(&stored) {
			Ok(locale) => return locale,
			Err(_) => {
				tracing::debug!(value = %stored, "ignoring unsupported stored locale preference");
			}
		}
	}

	if let Some(path) = env.current_path() {
		if let Some(locale) = leading_locale(&path) {
			return locale;
		}
	}

	DEFAULT_LOCALE
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::env::{HeadlessEnvironment, MemoryEnvironment};

	#[test]
	fn test_stored_preference_takes_priority_over_path() {
		let env = MemoryEnvironment::with_stored("gr").with_current_path("/about");
		assert_eq!(resolve_initial_locale(&env), Locale::Gr);

		let env = MemoryEnvironment::with_stored("en").with_current_path("/gr/about");
		assert_eq!(resolve_initial_locale(&env), Locale::En);
	}

	#[test]
	fn test_path_prefix_when_no_stored_preference() {
		let env = MemoryEnvironment::new().with_current_path("/gr/about");
		assert_eq!(resolve_initial_locale(&env), Locale::Gr);

		let env = MemoryEnvironment::new().with_current_path("/gr");
		assert_eq!(resolve_initial_locale(&env), Locale::Gr);
	}

	#[test]
	fn test_default_when_path_has_no_prefix() {
		let env = MemoryEnvironment::new().with_current_path("/about");
		assert_eq!(resolve_initial_locale(&env), DEFAULT_LOCALE);
	}

	#[test]
	fn test_invalid_stored_value_is_ignored() {
		let env = MemoryEnvironment::with_stored("klingon").with_current_path("/gr/about");
		assert_eq!(resolve_initial_locale(&env), Locale::Gr);

		let env = MemoryEnvironment::with_stored("");
		assert_eq!(resolve_initial_locale(&env), DEFAULT_LOCALE);
	}

	#[test]
	fn test_prefix_lookalike_segment_is_not_a_prefix() {
		let env = MemoryEnvironment::new().with_current_path("/green/about");
		assert_eq!(resolve_initial_locale(&env), DEFAULT_LOCALE);
	}

	#[test]
	fn test_headless_environment_resolves_default() {
		assert_eq!(resolve_initial_locale(&HeadlessEnvironment), DEFAULT_LOCALE);
	}
}

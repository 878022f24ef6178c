// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The mutable current-locale cell.
//!
//! One store exists per rendering context. It is the single writer path
//! for the active locale: `initialize` (once, via resolution) and
//! `set_locale` (the language switcher). Readers are unbounded; the cell
//! is a `watch` channel, so every read observes a complete snapshot and
//! subscribers learn about switches without polling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::env::Environment;
use crate::locale::{Locale, UnknownLocaleError, DEFAULT_LOCALE};
use crate::resolve::resolve_initial_locale;

/// Shared, single-writer store for the active locale.
pub struct LanguageStore {
	env: Arc<dyn Environment>,
	cell: watch::Sender<Locale>,
	initialized: AtomicBool,
}

impl LanguageStore {
	/// Create a store over the given environment.
	///
	/// The cell starts at the default locale; call [`initialize`] to run
	/// resolution.
	///
	/// [`initialize`]: LanguageStore::initialize
	pub fn new(env: Arc<dyn Environment>) -> Self {
		let (cell, _) = watch::channel(DEFAULT_LOCALE);
		Self {
			env,
			cell,
			initialized: AtomicBool::new(false),
		}
	}

	/// Resolve and apply the initial locale, once.
	///
	/// Only the first call per store performs resolution; later calls,
	/// or calls after an explicit [`set_locale`], return the
	/// already-active locale untouched.
	///
	/// [`set_locale`]: LanguageStore::set_locale
	pub fn initialize(&self) -> Locale {
		if self.initialized.swap(true, Ordering::SeqCst) {
			return self.current();
		}
		let resolved = resolve_initial_locale(self.env.as_ref());
		self.apply(resolved);
		resolved
	}

	/// The active locale.
	pub fn current(&self) -> Locale {
		*self.cell.borrow()
	}

	/// The active locale's URL prefix (`""` or `"/<tag>"`).
	pub fn prefix(&self) -> String {
		self.current().prefix()
	}

	/// Switch the active locale.
	///
	/// Updates the cell, persists the preference (exactly one write), and
	/// notifies subscribers. A persistence failure keeps the in-memory
	/// switch and is logged at `warn`.
	pub fn set_locale(&self, locale: Locale) {
		self.initialized.store(true, Ordering::SeqCst);
		self.apply(locale);
	}

	/// Switch the active locale from an untrusted tag.
	///
	/// # Errors
	///
	/// Returns [`UnknownLocaleError`] for tags outside the supported set;
	/// the cell and the persisted preference are left untouched (zero
	/// storage writes).
	pub fn set_locale_tag(&self, tag: &str) -> Result<Locale, UnknownLocaleError> {
		let locale = Locale::parse(tag)?;
		self.set_locale(locale);
		Ok(locale)
	}

	/// Watch the active locale for changes.
	///
	/// The receiver immediately holds the current value; each successful
	/// switch marks it changed.
	pub fn subscribe(&self) -> watch::Receiver<Locale> {
		self.cell.subscribe()
	}

	/// Build a localized path using the store's active locale.
	pub fn localized_path(&self, base_path: &str) -> String {
		crate::path::to_localized_path(base_path, self.current())
	}

	fn apply(&self, locale: Locale) {
		self.cell.send_replace(locale);
		if let Err(e) = self.env.store_locale(locale.as_str()) {
			tracing::warn!(locale = %locale, error = %e, "failed to persist locale preference");
		}
	}
}

impl std::fmt::Debug for LanguageStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LanguageStore")
			.field("current", &self.current())
			.field("initialized", &self.initialized.load(Ordering::SeqCst))
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::env::{HeadlessEnvironment, MemoryEnvironment};

	fn store_with(env: MemoryEnvironment) -> (LanguageStore, Arc<MemoryEnvironment>) {
		let env = Arc::new(env);
		(LanguageStore::new(env.clone()), env)
	}

	#[test]
	fn test_initialize_uses_resolution_chain() {
		let (store, _env) = store_with(MemoryEnvironment::with_stored("gr").with_current_path("/about"));
		assert_eq!(store.initialize(), Locale::Gr);
		assert_eq!(store.current(), Locale::Gr);
		assert_eq!(store.prefix(), "/gr");
	}

	#[test]
	fn test_initialize_is_idempotent() {
		let (store, env) = store_with(MemoryEnvironment::new().with_current_path("/gr/about"));
		assert_eq!(store.initialize(), Locale::Gr);

		// A changed signal after the first call must not re-resolve.
		env.store_locale("en").unwrap();
		assert_eq!(store.initialize(), Locale::Gr);
		assert_eq!(store.current(), Locale::Gr);
	}

	#[test]
	fn test_headless_store_defaults() {
		let store = LanguageStore::new(Arc::new(HeadlessEnvironment));
		assert_eq!(store.initialize(), DEFAULT_LOCALE);
		assert_eq!(store.prefix(), "");
	}

	#[test]
	fn test_set_locale_persists_exactly_once() {
		let (store, env) = store_with(MemoryEnvironment::new());
		let before = env.write_count();
		store.set_locale(Locale::Gr);
		assert_eq!(env.write_count(), before + 1);
		assert_eq!(env.stored_locale(), Some("gr".to_string()));
		assert_eq!(store.current(), Locale::Gr);
	}

	#[test]
	fn test_set_locale_tag_rejects_unknown_without_writes() {
		let (store, env) = store_with(MemoryEnvironment::new());
		store.set_locale(Locale::Gr);
		let writes = env.write_count();

		let err = store.set_locale_tag("fr").unwrap_err();
		assert_eq!(err, UnknownLocaleError("fr".to_string()));
		assert_eq!(store.current(), Locale::Gr);
		assert_eq!(env.write_count(), writes);
	}

	#[test]
	fn test_set_locale_tag_accepts_mixed_case() {
		let (store, _env) = store_with(MemoryEnvironment::new());
		assert_eq!(store.set_locale_tag("GR"), Ok(Locale::Gr));
	}

	#[tokio::test]
	async fn test_subscribers_observe_switches() {
		let (store, _env) = store_with(MemoryEnvironment::new());
		let mut rx = store.subscribe();
		assert_eq!(*rx.borrow(), DEFAULT_LOCALE);

		store.set_locale(Locale::Gr);
		rx.changed().await.unwrap();
		assert_eq!(*rx.borrow(), Locale::Gr);
	}

	#[test]
	fn test_localized_path_follows_current_locale() {
		let (store, _env) = store_with(MemoryEnvironment::new());
		assert_eq!(store.localized_path("/about"), "/about");
		store.set_locale(Locale::Gr);
		assert_eq!(store.localized_path("/about"), "/gr/about");
		assert_eq!(store.localized_path("/"), "/gr");
	}
}

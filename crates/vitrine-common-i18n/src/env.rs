// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Injected environment capability for locale resolution and persistence.
//!
//! Locale resolution needs two ambient signals: the visitor's persisted
//! preference and the current request path. Instead of reaching for
//! globals guarded by existence checks, resolution depends on this trait;
//! headless contexts (server-side rendering, tests) get an implementation
//! that simply has nothing to report.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Error persisting the locale preference.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("failed to persist locale preference: {0}")]
	Io(#[from] std::io::Error),
}

/// Ambient signals for locale resolution and preference persistence.
pub trait Environment: Send + Sync {
	/// The persisted locale preference, verbatim, if any.
	fn stored_locale(&self) -> Option<String>;

	/// Persist the locale preference (a single key).
	fn store_locale(&self, tag: &str) -> Result<(), StoreError>;

	/// The current request path (e.g. `/gr/about`), if one exists.
	fn current_path(&self) -> Option<String>;
}

/// Environment with no ambient context at all.
///
/// Every read returns `None` and writes succeed as no-ops, so resolution
/// against it is deterministic: always the default locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessEnvironment;

impl Environment for HeadlessEnvironment {
	fn stored_locale(&self) -> Option<String> {
		None
	}

	fn store_locale(&self, _tag: &str) -> Result<(), StoreError> {
		Ok(())
	}

	fn current_path(&self) -> Option<String> {
		None
	}
}

/// Environment backed by a single-key state file.
///
/// The file holds nothing but the locale tag, mirroring the one durable
/// key the original client kept. A missing or unreadable file reads as
/// "no preference", never as an error.
#[derive(Debug, Clone)]
pub struct FileEnvironment {
	state_file: PathBuf,
	current_path: Option<String>,
}

impl FileEnvironment {
	/// Environment persisting to `state_file`, with no current path.
	pub fn new(state_file: impl Into<PathBuf>) -> Self {
		Self {
			state_file: state_file.into(),
			current_path: None,
		}
	}

	/// Attach the current request path.
	#[must_use]
	pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
		self.current_path = Some(path.into());
		self
	}
}

impl Environment for FileEnvironment {
	fn stored_locale(&self) -> Option<String> {
		match std::fs::read_to_string(&self.state_file) {
			Ok(contents) => {
				let tag = contents.trim();
				if tag.is_empty() {
					None
				} else {
					Some(tag.to_string())
				}
			}
			Err(e) => {
				if e.kind() != std::io::ErrorKind::NotFound {
					tracing::debug!(
						path = %self.state_file.display(),
						error = %e,
						"could not read locale state file"
					);
				}
				None
			}
		}
	}

	fn store_locale(&self, tag: &str) -> Result<(), StoreError> {
		if let Some(parent) = self.state_file.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&self.state_file, tag)?;
		Ok(())
	}

	fn current_path(&self) -> Option<String> {
		self.current_path.clone()
	}
}

/// In-memory environment for tests and embedded use.
///
/// Counts writes so tests can assert the "exactly one persist per
/// successful switch" contract.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
	stored: Mutex<Option<String>>,
	current_path: Option<String>,
	writes: AtomicUsize,
}

impl MemoryEnvironment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_stored(tag: impl Into<String>) -> Self {
		Self {
			stored: Mutex::new(Some(tag.into())),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
		self.current_path = Some(path.into());
		self
	}

	/// Number of successful `store_locale` calls so far.
	pub fn write_count(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}
}

impl Environment for MemoryEnvironment {
	fn stored_locale(&self) -> Option<String> {
		self.stored.lock().ok().and_then(|guard| guard.clone())
	}

	fn store_locale(&self, tag: &str) -> Result<(), StoreError> {
		if let Ok(mut guard) = self.stored.lock() {
			*guard = Some(tag.to_string());
		}
		self.writes.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}

	fn current_path(&self) -> Option<String> {
		self.current_path.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_headless_has_no_signals() {
		let env = HeadlessEnvironment;
		assert_eq!(env.stored_locale(), None);
		assert_eq!(env.current_path(), None);
		assert!(env.store_locale("gr").is_ok());
		assert_eq!(env.stored_locale(), None);
	}

	#[test]
	fn test_file_environment_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let env = FileEnvironment::new(dir.path().join("lang"));

		assert_eq!(env.stored_locale(), None);
		env.store_locale("gr").unwrap();
		assert_eq!(env.stored_locale(), Some("gr".to_string()));
	}

	#[test]
	fn test_file_environment_trims_and_ignores_empty() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("lang");
		std::fs::write(&path, " gr\n").unwrap();
		assert_eq!(
			FileEnvironment::new(&path).stored_locale(),
			Some("gr".to_string())
		);

		std::fs::write(&path, "\n").unwrap();
		assert_eq!(FileEnvironment::new(&path).stored_locale(), None);
	}

	#[test]
	fn test_file_environment_creates_parent_dirs() {
		let dir = tempfile::tempdir().unwrap();
		let env = FileEnvironment::new(dir.path().join("state").join("lang"));
		env.store_locale("en").unwrap();
		assert_eq!(env.stored_locale(), Some("en".to_string()));
	}

	#[test]
	fn test_memory_environment_counts_writes() {
		let env = MemoryEnvironment::new();
		assert_eq!(env.write_count(), 0);
		env.store_locale("gr").unwrap();
		env.store_locale("en").unwrap();
		assert_eq!(env.write_count(), 2);
		assert_eq!(env.stored_locale(), Some("en".to_string()));
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Vitrine.
//!
//! This crate is the locale core of the site: the closed set of supported
//! locales, the translated message catalog, locale resolution, the mutable
//! language store, and the localized-path helpers used by navigation and
//! routing.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format,
//! grouped by surface:
//!
//! - `nav.` for the header/menu labels
//! - `pages.` for page-level copy
//! - `footer.` for the footer
//! - `hero.` for the landing hero
//!
//! Example: `nav.open_menu`
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{t, to_localized_path, Locale};
//!
//! // Simple translation, falling back to English for missing Greek keys
//! let label = t(Locale::Gr, "nav.home");
//! assert_eq!(label, "Αρχική");
//!
//! // Localized routing: the default locale carries no prefix
//! assert_eq!(to_localized_path("/about", Locale::Gr), "/gr/about");
//! assert_eq!(to_localized_path("/about", Locale::En), "/about");
//! ```

mod catalog;
mod env;
mod locale;
mod messages;
mod path;
mod resolve;
mod seo;
mod store;

pub use catalog::{t, t_fmt};
pub use env::{Environment, FileEnvironment, HeadlessEnvironment, MemoryEnvironment, StoreError};
pub use locale::{available_locales, locale_info, Locale, LocaleInfo, UnknownLocaleError};
pub use path::{leading_locale, normalize_path, strip_locale_prefix, to_localized_path};
pub use resolve::resolve_initial_locale;
pub use seo::{seo_text, seo_text_for_tag, SeoText};
pub use store::LanguageStore;

pub use locale::DEFAULT_LOCALE;

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static site content for Vitrine.
//!
//! Content is split the same way the translations are: locale-invariant
//! records (ids, tags, links) live next to per-locale text overlays, and
//! the composer joins them into one fully-localized record per item per
//! locale. Copy is data, not code; nothing here fetches anything.

pub mod about;
pub mod nav;
pub mod projects;

pub use about::{about_section, AboutSection};
pub use nav::{NavLink, NAV_LINKS};
pub use projects::{
	compose_by_locale, projects_by_locale, LocalizedText, LocalizedTextTable, Project,
	ProjectRecord,
};

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site navigation links.

use vitrine_common_i18n::{to_localized_path, Locale};

/// A single navigation link.
///
/// `path` is the base (unlocalized) route; `label_key` is the message
/// catalog key for the visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
	pub path: &'static str,
	pub label_key: &'static str,
}

impl NavLink {
	/// The link's href for a locale.
	pub fn href(&self, locale: Locale) -> String {
		to_localized_path(self.path, locale)
	}
}

/// Navigation links shared by the desktop and mobile menus, in display
/// order. Keeping one list keeps both menus in sync.
pub const NAV_LINKS: &[NavLink] = &[
	NavLink {
		path: "/",
		label_key: "nav.home",
	},
	NavLink {
		path: "/about",
		label_key: "nav.about",
	},
	NavLink {
		path: "/projects",
		label_key: "nav.projects",
	},
	NavLink {
		path: "/contact",
		label_key: "nav.contact",
	},
];

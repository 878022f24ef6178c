// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SEO metadata bundles.
//!
//! Unlike general message lookup, SEO text falls back as a whole bundle:
//! a page never mixes titles from one locale with descriptions from
//! another.

use crate::locale::Locale;

/// Per-locale SEO strings for every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoText {
	pub home_title: &'static str,
	pub home_description: &'static str,
	pub about_title: &'static str,
	pub about_description: &'static str,
	pub projects_title: &'static str,
	pub projects_description: &'static str,
	pub contact_title: &'static str,
	pub contact_description: &'static str,
}

static EN: SeoText = SeoText {
	home_title: "My Portfolio",
	home_description:
		"Welcome to my portfolio built with Astro, Svelte, and Tailwind. Fast, responsive, and SEO-friendly.",
	about_title: "About me",
	about_description: "About page (coming soon).",
	projects_title: "My Projects",
	projects_description: "Projects page (coming soon).",
	contact_title: "Contact",
	contact_description: "Contact page (coming soon).",
};

static GR: SeoText = SeoText {
	home_title: "Το Portfolio μου",
	home_description:
		"Καλώς ήλθατε στο Portfolio μου. Σχεδιάστηκε με Astro + Svelte + Tailwind. Γρήγορο, responsive και φιλικό στο SEO.",
	about_title: "Σχετικά με εμένα",
	about_description: "Σελίδα Σχετικά (σύντομα κοντά σας).",
	projects_title: "Τα Projects μου",
	projects_description: "Σελίδα Projects (σύντομα κοντά σας).",
	contact_title: "Επικοινωνία",
	contact_description: "Σελίδα Επικοινωνία (σύντομα κοντά σας).",
};

/// SEO strings for a locale.
pub fn seo_text(locale: Locale) -> &'static SeoText {
	match locale {
		Locale::En => &EN,
		Locale::Gr => &GR,
	}
}

/// SEO strings for an untrusted locale tag, with default-locale fallback.
///
/// Never fails: an unsupported tag resolves to the default locale's whole
/// bundle.
pub fn seo_text_for_tag(tag: &str) -> &'static SeoText {
	seo_text(Locale::parse_or_default(tag))
}

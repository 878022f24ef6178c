// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project records and the per-locale composer.
//!
//! A project is split into a locale-invariant [`ProjectRecord`] (stable id,
//! tech tags, links) and per-locale [`LocalizedText`] (title, summary,
//! details) keyed by the same id. [`compose_by_locale`] joins the two into
//! one fully-localized [`Project`] per record per locale.
//!
//! To add a project: append a record to `BASE_PROJECTS` with a stable,
//! lowercase, hyphenated id, then add its text under every locale in
//! `LOCALIZED`. Text may lag behind for non-default locales; the composer
//! falls back to the default locale's text, and past that synthesizes a
//! placeholder from the id.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;
use vitrine_common_i18n::{Locale, DEFAULT_LOCALE};

/// Locale-invariant project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
	/// Stable join key; unique across records, never reused.
	pub id: &'static str,
	pub tech: &'static [&'static str],
	/// Icon asset path, served from the static asset root.
	pub icon: Option<&'static str>,
	pub demo_url: Option<&'static str>,
	pub repo_url: Option<&'static str>,
}

/// Per-locale project text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
	pub title: &'static str,
	pub summary: &'static str,
	pub details: &'static str,
}

/// Per-locale text tables keyed by project id.
pub type LocalizedTextTable = BTreeMap<Locale, HashMap<&'static str, LocalizedText>>;

/// A fully-localized project: base fields plus resolved text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
	pub id: &'static str,
	pub title: &'static str,
	pub summary: &'static str,
	pub details: &'static str,
	pub tech: &'static [&'static str],
	pub icon: Option<&'static str>,
	pub demo_url: Option<&'static str>,
	pub repo_url: Option<&'static str>,
}

static BASE_PROJECTS: &[ProjectRecord] = &[
	ProjectRecord {
		id: "portfolio",
		tech: &["Astro", "Svelte", "Tailwind", "TypeScript"],
		icon: Some("/assets/projects/portfolio.svg"),
		demo_url: None,
		repo_url: Some("https://github.com/vmanX8/Portfolio-Astro-Svelte-Tailwind"),
	},
	ProjectRecord {
		id: "snakes-ladders",
		tech: &["React", "TypeScript"],
		icon: Some("/assets/projects/snakes-ladders.svg"),
		demo_url: Some("https://snakes-n-ladders-rose.vercel.app/"),
		repo_url: Some("https://github.com/vmanX8/snakesNladders"),
	},
	ProjectRecord {
		id: "weather-app",
		tech: &["React", "TypeScript", "OpenWeather API"],
		icon: Some("/assets/projects/weather-app.svg"),
		demo_url: Some("https://weather-app-six-nu-73.vercel.app/"),
		repo_url: Some("https://github.com/vmanX8/weather-app"),
	},
];

static LOCALIZED: Lazy<LocalizedTextTable> = Lazy::new(|| {
	let mut table = LocalizedTextTable::new();

	let mut en = HashMap::new();
	en.insert(
		"portfolio",
		LocalizedText {
			title: "Portfolio Website",
			summary: "My personal portfolio built with Astro and Svelte.",
			details: "This project focuses on performance, clean structure and responsive UI. Astro is used for page rendering and Svelte for interactive components.",
		},
	);
	en.insert(
		"snakes-ladders",
		LocalizedText {
			title: "Snakes & Ladders Game",
			summary: "Classic board game rebuilt in React with a playful modern UI.",
			details: "A modern take on the classic Snakes & Ladders game, built with React and TypeScript. Focused on clean component structure, smooth interactions, and a fun UI.",
		},
	);
	en.insert(
		"weather-app",
		LocalizedText {
			title: "Weather App",
			summary: "Live weather dashboard built with React and the OpenWeather API.",
			details: "A responsive weather dashboard built with React and TypeScript, using the OpenWeather API to fetch live conditions. Includes search, basic error handling, and a clean data-driven UI.",
		},
	);
	table.insert(Locale::En, en);

	let mut gr = HashMap::new();
	gr.insert(
		"portfolio",
		LocalizedText {
			title: "Portfolio Website",
			summary: "Το προσωπικό μου portfolio με Astro και Svelte.",
			details: "Το project δίνει έμφαση στην απόδοση, στη σωστή δομή και στο responsive UI. Το Astro χρησιμοποιείται για τις σελίδες και το Svelte για διαδραστικά στοιχεία.",
		},
	);
	gr.insert(
		"snakes-ladders",
		LocalizedText {
			title: "Snakes & Ladders Game",
			summary: "Το κλασικό επιτραπέζιο παιχνίδι σε React εφαρμογή με μοντέρνο και playful UI.",
			details: "Μια σύγχρονη εκδοχή του Snakes & Ladders, φτιαγμένη με React και TypeScript. Έμφαση σε καθαρή δομή components, ομαλές αλληλεπιδράσεις και ευχάριστο UI.",
		},
	);
	gr.insert(
		"weather-app",
		LocalizedText {
			title: "Weather App",
			summary: "Live weather dashboard σε React με το OpenWeather API.",
			details: "Responsive weather dashboard με React και TypeScript που χρησιμοποιεί το OpenWeather API για live δεδομένα. Περιλαμβάνει αναζήτηση, βασικό χειρισμό σφαλμάτων και καθαρό data-driven UI.",
		},
	);
	table.insert(Locale::Gr, gr);

	table
});

static COMPOSED: Lazy<BTreeMap<Locale, Vec<Project>>> =
	Lazy::new(|| compose_by_locale(BASE_PROJECTS, &LOCALIZED));

/// Resolve a record's text for a locale: locale-specific entry, then the
/// default locale's entry, then a placeholder synthesized from the id.
fn resolve_text(id: &'static str, locale: Locale, texts: &LocalizedTextTable) -> LocalizedText {
	texts
		.get(&locale)
		.and_then(|table| table.get(id))
		.or_else(|| texts.get(&DEFAULT_LOCALE).and_then(|table| table.get(id)))
		.copied()
		.unwrap_or(LocalizedText {
			title: id,
			summary: "",
			details: "",
		})
}

/// Join base records with per-locale text into one composed list per
/// supported locale.
///
/// Every supported locale gets exactly one entry per record, in record
/// order (the order is user-visible display order). Record ids must be
/// unique; duplicates are a data error caught in debug builds.
pub fn compose_by_locale(
	base: &[ProjectRecord],
	texts: &LocalizedTextTable,
) -> BTreeMap<Locale, Vec<Project>> {
	debug_assert!(
		{
			let mut ids: Vec<_> = base.iter().map(|record| record.id).collect();
			ids.sort_unstable();
			ids.windows(2).all(|pair| pair[0] != pair[1])
		},
		"project record ids must be unique"
	);

	Locale::ALL
		.into_iter()
		.map(|locale| {
			let composed = base
				.iter()
				.map(|record| {
					let text = resolve_text(record.id, locale, texts);
					Project {
						id: record.id,
						title: text.title,
						summary: text.summary,
						details: text.details,
						tech: record.tech,
						icon: record.icon,
						demo_url: record.demo_url,
						repo_url: record.repo_url,
					}
				})
				.collect();
			(locale, composed)
		})
		.collect()
}

/// The site's composed project lists, one per supported locale.
pub fn projects_by_locale() -> &'static BTreeMap<Locale, Vec<Project>> {
	&COMPOSED
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_locale_gets_every_record_in_order() {
		let composed = projects_by_locale();
		for locale in Locale::ALL {
			let list = &composed[&locale];
			let ids: Vec<&str> = list.iter().map(|p| p.id).collect();
			assert_eq!(ids, vec!["portfolio", "snakes-ladders", "weather-app"]);
		}
	}

	#[test]
	fn test_localized_fields_resolve_per_locale() {
		let composed = projects_by_locale();
		let en = &composed[&Locale::En][0];
		let gr = &composed[&Locale::Gr][0];
		assert_eq!(en.id, gr.id);
		assert_ne!(en.summary, gr.summary);
		// Shared fields are identical across locales.
		assert_eq!(en.repo_url, gr.repo_url);
		assert_eq!(en.tech, gr.tech);
	}

	#[test]
	fn test_missing_locale_text_falls_back_to_default() {
		let base = &[ProjectRecord {
			id: "cli-tool",
			tech: &["Rust"],
			icon: None,
			demo_url: None,
			repo_url: None,
		}];
		let mut texts = LocalizedTextTable::new();
		let mut en = HashMap::new();
		en.insert(
			"cli-tool",
			LocalizedText {
				title: "CLI Tool",
				summary: "A tool.",
				details: "Details.",
			},
		);
		texts.insert(Locale::En, en);

		let composed = compose_by_locale(base, &texts);
		assert_eq!(composed[&Locale::Gr][0].title, "CLI Tool");
		assert_eq!(composed[&Locale::Gr][0].summary, "A tool.");
	}

	#[test]
	fn test_text_missing_everywhere_synthesizes_placeholder() {
		let base = &[ProjectRecord {
			id: "mystery",
			tech: &[],
			icon: None,
			demo_url: None,
			repo_url: None,
		}];
		let composed = compose_by_locale(base, &LocalizedTextTable::new());

		for locale in Locale::ALL {
			let project = &composed[&locale][0];
			assert_eq!(project.title, "mystery");
			assert_eq!(project.summary, "");
			assert_eq!(project.details, "");
		}
	}

	#[test]
	fn test_ids_unique_within_each_locale() {
		let composed = projects_by_locale();
		for list in composed.values() {
			let mut ids: Vec<&str> = list.iter().map(|p| p.id).collect();
			ids.sort_unstable();
			ids.dedup();
			assert_eq!(ids.len(), list.len());
		}
	}

	#[test]
	fn test_serializes_with_wire_field_names() {
		let project = &projects_by_locale()[&Locale::En][1];
		let value = serde_json::to_value(project).unwrap();
		assert_eq!(value["id"], "snakes-ladders");
		assert_eq!(value["demo_url"], "https://snakes-n-ladders-rose.vercel.app/");
		assert!(value["tech"].is_array());
	}
}

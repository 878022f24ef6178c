// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static message tables per locale.
//!
//! The English table is the reference: every key a consumer uses must exist
//! here. Other locales may be partial; [`crate::catalog::t`] falls back to
//! English per key.

/// English messages (reference table, must stay total).
pub(crate) const EN: &[(&str, &str)] = &[
	("nav.home", "Home"),
	("nav.about", "About"),
	("nav.projects", "Projects"),
	("nav.contact", "Contact"),
	("nav.language", "Language"),
	("nav.open_menu", "Open menu"),
	("nav.close_menu", "Close menu"),
	("pages.not_ready", "This page is not ready yet."),
	("pages.back_home", "Back to Home"),
	("pages.about.title", "About"),
	("pages.projects.title", "Projects"),
	("pages.contact.title", "Contact"),
	("footer.name", "My Portfolio"),
	("footer.rights", "All rights reserved."),
	("footer.home", "Home"),
	("footer.about", "About"),
	("footer.projects", "Projects"),
	("footer.contact", "Contact"),
	("hero.badge", "Portfolio"),
	("hero.title_hi", "Hi, I'm"),
	("hero.name", "Vangelis"),
	("hero.role", "Frontend Engineer"),
	(
		"hero.tagline",
		"“Design is not decoration, it’s the way your website speaks before a single word is read.”",
	),
	("hero.cta_projects", "See my work"),
	("hero.cta_contact", "Let’s build something"),
	// Not yet translated; Greek lookups fall back to this entry.
	("footer.copyright", "© {year} My Portfolio"),
];

/// Greek messages. May lag behind English; missing keys fall back.
pub(crate) const GR: &[(&str, &str)] = &[
	("nav.home", "Αρχική"),
	("nav.about", "Σχετικά"),
	("nav.projects", "Projects"),
	("nav.contact", "Επικοινωνία"),
	("nav.language", "Γλώσσα"),
	("nav.open_menu", "Άνοιγμα μενού"),
	("nav.close_menu", "Κλείσιμο μενού"),
	("pages.not_ready", "Η σελίδα δεν είναι έτοιμη ακόμα."),
	("pages.back_home", "Πίσω στην Αρχική"),
	("pages.about.title", "Σχετικά"),
	("pages.projects.title", "Projects"),
	("pages.contact.title", "Επικοινωνία"),
	("footer.name", "Το Portfolio μου"),
	("footer.rights", "Με επιφύλαξη παντός δικαιώματος."),
	("footer.home", "Αρχική"),
	("footer.about", "Σχετικά"),
	("footer.projects", "Projects"),
	("footer.contact", "Επικοινωνία"),
	("hero.badge", "Portfolio"),
	("hero.title_hi", "Γειά σας, με λένε"),
	("hero.name", "Βαγγέλη"),
	("hero.role", "Και είμαι Frontend Engineer"),
	(
		"hero.tagline",
		"«Το design χωρίς στρατηγική είναι απλά διακόσμηση, με στρατηγική είναι ο τρόπος που το site μας μιλά πριν διαβαστεί έστω μία λέξη.»",
	),
	("hero.cta_projects", "Projects"),
	("hero.cta_contact", "Επικοινωνήστε μαζί μου"),
];

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! About-section copy.
//!
//! Served both to the page renderer and over the JSON API. Fallback is
//! whole-bundle: a locale without its own copy gets the default locale's
//! complete section, never a field-by-field mix.

use vitrine_common_i18n::Locale;

/// One locale's about-section copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
	pub title: &'static str,
	pub highlight: &'static str,
	pub paragraphs: &'static [&'static str],
}

static EN: AboutSection = AboutSection {
	title: "About me",
	highlight: "Turning ideas and design into meaningful web experiences.",
	paragraphs: &[
		"I’m an Electronics Engineer who found his way into front-end development through design. What excites me about the web is the balance between logic and creativity — transforming visuals and mockups into interactive digital experiences.",
		"My background in photo and video editing shaped my eye for detail, aesthetics, and storytelling. Front-end development became the natural point where design meets code, allowing me to work on websites from concept to implementation with a focus on clarity and usability.",
		"Front-end is my main focus and passion, while full-stack knowledge helps me better understand how applications work as a whole. My goal is to build a strong portfolio of clean, intentional websites that feel intuitive and enjoyable to use, within collaborative and creative teams.",
		"I’m especially drawn to creative studio environments like Web Eleven, where website design and implementation go hand in hand. I thrive in collaborative teams and aim to grow through meaningful, real-world projects.",
	],
};

static GR: AboutSection = AboutSection {
	title: "Σχετικά με εμένα",
	highlight: "Μετατρέποντας ιδέες και design σε ουσιαστικές web εμπειρίες.",
	paragraphs: &[
		"Είμαι Ηλεκτρονικός Μηχανικός που οδηγήθηκε στο front-end development μέσα από το design. Αυτό που με γοητεύει στο web είναι η ισορροπία ανάμεσα στη λογική και τη δημιουργικότητα — η μετατροπή ιδεών και mockups σε διαδραστικές ψηφιακές εμπειρίες.",
		"Η ενασχόλησή μου με το photo και video editing διαμόρφωσε τον τρόπο που προσεγγίζω την αισθητική, τη λεπτομέρεια και το storytelling. Το front-end αποτέλεσε το φυσικό σημείο όπου το design συναντά τον κώδικα, από το πρώτο mockup έως την τελική υλοποίηση.",
		"Το front-end είναι το βασικό μου αντικείμενο και πάθος, ενώ η γνώση του full stack με βοηθά να κατανοώ καλύτερα τη συνολική λειτουργία μιας εφαρμογής. Στόχος μου είναι να δημιουργώ καθαρές, ουσιαστικές ιστοσελίδες με έμφαση στην εμπειρία του χρήστη, μέσα σε δημιουργικά και συνεργατικά περιβάλλοντα.",
		"Με ελκύουν περιβάλλοντα δημιουργικού χαρακτήρα όπως η Web Eleven, όπου το website design και η υλοποίηση συνδυάζονται ουσιαστικά. Απολαμβάνω τη συνεργασία και τη συνεχή εξέλιξη μέσα από πραγματικά projects.",
	],
};

/// About-section copy for a locale.
pub fn about_section(locale: Locale) -> &'static AboutSection {
	match locale {
		Locale::En => &EN,
		Locale::Gr => &GR,
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP API routes and application state.

use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vitrine_common_i18n::Locale;
use vitrine_server_config::ServerConfig;

use crate::api_docs::ApiDoc;
use crate::routes;

/// Application state shared across handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
	/// Ambient locale for requests whose path carries no locale prefix.
	pub default_locale: Locale,
}

/// Creates the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	AppState {
		default_locale: config.i18n.default_locale,
	}
}

/// Creates the router with all routes configured.
///
/// Every content route is registered once per URL form: the bare path for
/// the default locale and one prefixed variant per alternate locale, so
/// adding a locale never means adding route files.
pub fn create_router(state: AppState) -> Router {
	let mut router = Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/section2", get(routes::section::get_about_section))
		.route(
			"/api/section2/lang",
			get(routes::section::get_about_section_lang),
		);

	for locale in Locale::alternates() {
		router = router
			.route(
				&format!("{}/api/section2", locale.prefix()),
				get(routes::section::get_about_section),
			)
			.route(
				&format!("{}/api/section2/lang", locale.prefix()),
				get(routes::section::get_about_section_lang),
			);
	}

	router
		.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
		.with_state(state)
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! About-section content HTTP handlers.
//!
//! These endpoints echo static content for one locale. They are total:
//! every locale signal falls back through the documented chain, so the
//! handlers only ever answer 200.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use vitrine_common_i18n::Locale;
use vitrine_content::about_section;
use vitrine_server_api::{AboutSectionResponse, LangQuery};

use crate::api::AppState;
use crate::extract::AmbientLocale;

/// Explicit charset so Greek text renders correctly in naive clients.
const JSON_UTF8: &str = "application/json; charset=utf-8";

#[utoipa::path(
    get,
    path = "/api/section2",
    responses(
        (status = 200, description = "About-section content for the ambient locale", body = AboutSectionResponse)
    ),
    tag = "section"
)]
/// GET /api/section2 - About-section content for the ambient locale.
///
/// Also served under each alternate locale's prefix (`/gr/api/section2`);
/// the ambient locale comes from the path, falling back to the configured
/// default.
pub async fn get_about_section(
	State(state): State<AppState>,
	AmbientLocale(ambient): AmbientLocale,
) -> impl IntoResponse {
	let lang = ambient.unwrap_or(state.default_locale);
	section_response(lang)
}

#[utoipa::path(
    get,
    path = "/api/section2/lang",
    params(LangQuery),
    responses(
        (status = 200, description = "About-section content for the requested locale", body = AboutSectionResponse)
    ),
    tag = "section"
)]
/// GET /api/section2/lang - About-section content for an explicit locale.
///
/// The `lang` query parameter is matched case-insensitively against the
/// supported set; invalid or absent values fall back to the ambient
/// locale, then the configured default.
pub async fn get_about_section_lang(
	State(state): State<AppState>,
	AmbientLocale(ambient): AmbientLocale,
	Query(query): Query<LangQuery>,
) -> impl IntoResponse {
	let requested = query.lang.as_deref().and_then(|tag| match Locale::parse(tag) {
		Ok(locale) => Some(locale),
		Err(e) => {
			tracing::debug!(error = %e, "ignoring invalid lang query parameter");
			None
		}
	});
	let lang = requested.or(ambient).unwrap_or(state.default_locale);
	section_response(lang)
}

fn section_response(lang: Locale) -> impl IntoResponse {
	let payload = AboutSectionResponse::new(lang, about_section(lang));
	(
		StatusCode::OK,
		[
			(header::CONTENT_TYPE, JSON_UTF8),
			// Language switches must never see stale cached content.
			(header::CACHE_CONTROL, "no-store"),
		],
		Json(payload),
	)
}

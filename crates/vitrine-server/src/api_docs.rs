// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation definition.

use utoipa::OpenApi;

/// OpenAPI document for the content API, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(
	info(
		title = "Vitrine content API",
		description = "Read-only JSON endpoints for the localized portfolio content."
	),
	paths(
		crate::routes::health::health_check,
		crate::routes::section::get_about_section,
		crate::routes::section::get_about_section_lang,
	),
	components(schemas(
		vitrine_common_i18n::Locale,
		vitrine_server_api::AboutSectionResponse,
		vitrine_server_api::HealthResponse,
	)),
	tags(
		(name = "section", description = "Localized site content"),
		(name = "health", description = "Service health")
	)
)]
pub struct ApiDoc;

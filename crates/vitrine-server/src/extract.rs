// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vitrine_common_i18n::{leading_locale, Locale};

/// The locale carried by the request path's leading segment, if any.
///
/// `/gr/api/section2` extracts `Some(Locale::Gr)`; an unprefixed path
/// extracts `None` and the handler applies the configured default. Prefix
/// matching is segment-exact, so `/green/...` carries no locale. Never
/// rejects.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLocale(pub Option<Locale>);

impl<S> FromRequestParts<S> for AmbientLocale
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(Self(leading_locale(parts.uri.path())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::Request;

	async fn extract(uri: &str) -> Option<Locale> {
		let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
		let AmbientLocale(locale) = AmbientLocale::from_request_parts(&mut parts, &())
			.await
			.unwrap();
		locale
	}

	#[tokio::test]
	async fn test_prefixed_path_extracts_locale() {
		assert_eq!(extract("/gr/api/section2").await, Some(Locale::Gr));
	}

	#[tokio::test]
	async fn test_unprefixed_path_extracts_none() {
		assert_eq!(extract("/api/section2").await, None);
	}

	#[tokio::test]
	async fn test_lookalike_segment_extracts_none() {
		assert_eq!(extract("/green/api/section2").await, None);
	}
}

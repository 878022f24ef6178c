// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vitrine content server.
//!
//! This crate provides the HTTP server exposing the localized portfolio
//! content as JSON. Locale handling happens at the edge: the ambient
//! locale comes from the request path prefix, the explicit endpoint
//! accepts a `lang` query parameter, and everything downstream works with
//! the closed [`vitrine_common_i18n::Locale`] type.

pub mod api;
pub mod api_docs;
pub mod extract;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use vitrine_server_config::ServerConfig;

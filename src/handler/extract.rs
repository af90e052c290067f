use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use crate::content::{resolve::validate_locale, Locale, DEFAULT_LOCALE};

/// Locale preference of a request that carries no locale path segment, used
/// by the root redirect and the fallback page. A `lang` query parameter wins
/// over the `accept-language` header; anything unsupported falls back to the
/// default locale.
pub struct PreferredLocale(pub Locale);

#[derive(Deserialize)]
struct LanguageQuery {
    lang: String,
}

impl<S> FromRequestParts<S> for PreferredLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(axum::extract::Query(query)) =
            axum::extract::Query::<LanguageQuery>::from_request_parts(parts, state).await
        {
            if let Ok(locale) = validate_locale(&query.lang) {
                return Ok(Self(locale));
            }
        }
        if let Some(header) = parts.headers.get(http::header::ACCEPT_LANGUAGE) {
            if let Ok(header) = header.to_str() {
                for entry in header.split(',') {
                    let tag = entry.split(';').next().unwrap_or(entry).trim();
                    let primary = tag.split('-').next().unwrap_or(tag);
                    if let Ok(locale) = validate_locale(primary) {
                        return Ok(Self(locale));
                    }
                }
            }
        }
        Ok(Self(DEFAULT_LOCALE))
    }
}

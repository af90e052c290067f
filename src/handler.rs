mod extract;
mod templates;

use axum::{
    extract::Path,
    response::{Redirect, Response},
    routing, Router,
};
use axum_extra::{headers, TypedHeader};
use http::StatusCode;

use crate::{
    config::CONFIG,
    content::{
        crossref, get_dictionary,
        resolve::{resolve_record, validate_locale},
        Dictionary, LegalPage, Locale, DEFAULT_LOCALE,
    },
    sitemap::render_sitemap,
};

use self::{
    extract::PreferredLocale,
    templates::{
        render, HomeTemplate, LegalTemplate, NotFoundTemplate, ServiceTemplate,
        TeamMemberTemplate,
    },
};

pub fn create_router() -> Router {
    Router::new()
        .route("/index.css", routing::get(get_index_css))
        .route("/healthz", routing::get(get_healthz))
        .route("/sitemap.xml", routing::get(get_sitemap))
        .route("/", routing::get(get_root))
        .route("/{lang}", routing::get(get_home))
        .route("/{lang}/services/{id}", routing::get(get_service))
        .route("/{lang}/team/{slug}", routing::get(get_team_member))
        .route("/{lang}/privacy-policy", routing::get(get_privacy_policy))
        .route("/{lang}/cookie-policy", routing::get(get_cookie_policy))
        .route(
            "/{lang}/terms-of-service",
            routing::get(get_terms_of_service),
        )
        .fallback(get_fallback)
}

async fn get_index_css() -> (TypedHeader<headers::ContentType>, &'static [u8]) {
    (
        TypedHeader(headers::ContentType::from(mime::TEXT_CSS)),
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/dist/index.css")),
    )
}

async fn get_healthz() -> &'static str {
    "ok"
}

async fn get_sitemap() -> (TypedHeader<headers::ContentType>, String) {
    (
        TypedHeader(headers::ContentType::xml()),
        render_sitemap(&CONFIG.public_url),
    )
}

async fn get_root(PreferredLocale(locale): PreferredLocale) -> Redirect {
    Redirect::temporary(&format!("/{locale}"))
}

async fn get_fallback(PreferredLocale(locale): PreferredLocale) -> Response {
    not_found(locale)
}

/// Localized 404 page. Both failure kinds of the resolver end up here; an
/// unresolved identifier never falls back to a different record.
fn not_found(locale: Locale) -> Response {
    let dictionary = get_dictionary(locale);
    render(
        NotFoundTemplate {
            locale,
            alternate_href: format!("/{}", locale.other()),
            dictionary,
        },
        StatusCode::NOT_FOUND,
    )
}

async fn get_home(Path(lang): Path<String>) -> Response {
    let Ok(locale) = validate_locale(&lang) else {
        return not_found(DEFAULT_LOCALE);
    };
    let dictionary = get_dictionary(locale);
    render(
        HomeTemplate {
            locale,
            alternate_href: format!("/{}", locale.other()),
            dictionary,
        },
        StatusCode::OK,
    )
}

async fn get_service(Path((lang, id)): Path<(String, String)>) -> Response {
    let Ok(locale) = validate_locale(&lang) else {
        return not_found(DEFAULT_LOCALE);
    };
    let dictionary = get_dictionary(locale);
    match resolve_record(locale, &id, &dictionary.services.list) {
        Ok(service) => {
            let other = locale.other();
            let alternate_slug = crossref::translate_slug(&service.id, other);
            render(
                ServiceTemplate {
                    locale,
                    alternate_href: format!("/{other}/services/{alternate_slug}"),
                    dictionary,
                    service,
                },
                StatusCode::OK,
            )
        }
        Err(error) => {
            tracing::debug!(%error, "service lookup failed");
            not_found(locale)
        }
    }
}

async fn get_team_member(Path((lang, slug)): Path<(String, String)>) -> Response {
    let Ok(locale) = validate_locale(&lang) else {
        return not_found(DEFAULT_LOCALE);
    };
    let dictionary = get_dictionary(locale);
    match resolve_record(locale, &slug, &dictionary.team.members) {
        Ok(member) => {
            let other = locale.other();
            let alternate_slug = crossref::translate_slug(&member.slug, other);
            render(
                TeamMemberTemplate {
                    locale,
                    alternate_href: format!("/{other}/team/{alternate_slug}"),
                    dictionary,
                    member,
                },
                StatusCode::OK,
            )
        }
        Err(error) => {
            tracing::debug!(%error, "team member lookup failed");
            not_found(locale)
        }
    }
}

async fn get_privacy_policy(Path(lang): Path<String>) -> Response {
    legal_page(&lang, "privacy-policy", |d| &d.privacy)
}

async fn get_cookie_policy(Path(lang): Path<String>) -> Response {
    legal_page(&lang, "cookie-policy", |d| &d.cookies)
}

async fn get_terms_of_service(Path(lang): Path<String>) -> Response {
    legal_page(&lang, "terms-of-service", |d| &d.terms)
}

fn legal_page(
    lang: &str,
    path: &str,
    select: fn(&'static Dictionary) -> &'static LegalPage,
) -> Response {
    let Ok(locale) = validate_locale(lang) else {
        return not_found(DEFAULT_LOCALE);
    };
    let dictionary = get_dictionary(locale);
    render(
        LegalTemplate {
            locale,
            alternate_href: format!("/{}/{path}", locale.other()),
            dictionary,
            page: select(dictionary),
        },
        StatusCode::OK,
    )
}

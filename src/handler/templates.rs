use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

use crate::content::{Dictionary, LegalPage, Locale, Service, TeamMember};

pub fn render<T: Template>(template: T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => {
            tracing::error!(?error, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub locale: Locale,
    pub alternate_href: String,
    pub dictionary: &'static Dictionary,
}

#[derive(Template)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub locale: Locale,
    pub alternate_href: String,
    pub dictionary: &'static Dictionary,
    pub service: &'static Service,
}

#[derive(Template)]
#[template(path = "team-member.html")]
pub struct TeamMemberTemplate {
    pub locale: Locale,
    pub alternate_href: String,
    pub dictionary: &'static Dictionary,
    pub member: &'static TeamMember,
}

#[derive(Template)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub locale: Locale,
    pub alternate_href: String,
    pub dictionary: &'static Dictionary,
    pub page: &'static LegalPage,
}

#[derive(Template)]
#[template(path = "not-found.html")]
pub struct NotFoundTemplate {
    pub locale: Locale,
    pub alternate_href: String,
    pub dictionary: &'static Dictionary,
}

use actix_web::http::header::ContentType;
use actix_web::{
    web,
    HttpResponse,
};
use askama::Template;
use chrono::{
    Datelike,
    Utc,
};

use crate::app::PageSettings;
use crate::domain::IncentiveIcon;
use crate::routes::RouteError;

/// The single landing page, parameterized entirely by `PageSettings`.
#[derive(Template)]
#[template(path = "home.html")]
struct Home<'a> {
    page: &'a PageSettings,
    year: i32,
}

impl Home<'_> {
    fn badge_glyph(&self) -> &'static str {
        IncentiveIcon::Sparkles.glyph()
    }
}

#[tracing::instrument(name = "rendering the landing page", skip(page))]
pub async fn home(page: web::Data<PageSettings>) -> Result<HttpResponse, RouteError> {
    let html = Home {
        page: page.get_ref(),
        year: Utc::now().year(),
    }
    .render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

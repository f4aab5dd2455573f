use askama::Template;
use axum::response::IntoResponse;

use crate::web::templates::{nav_items, HtmlTemplate, NavItem};

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub nav: Vec<NavItem>,
}

pub async fn about_page() -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        nav: nav_items("/about-us"),
    })
}

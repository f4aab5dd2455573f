use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// One entry of the site navigation, with the current page marked.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub fn nav_items(active_path: &str) -> Vec<NavItem> {
    let entries: [(&'static str, &'static str); 5] = [
        ("Home", "/"),
        ("What It Means Riding Like A Pro", "/about-us"),
        ("News", "/news"),
        ("Gallery", "/gallery"),
        ("Be The Next Stage", "/contact-us"),
    ];

    entries
        .into_iter()
        .map(|(title, href)| NavItem {
            title,
            href,
            active: href == active_path,
        })
        .collect()
}

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_the_active_page() {
        let items = nav_items("/news");
        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.href)
            .collect();
        assert_eq!(active, vec!["/news"]);
    }
}

use askama::Template;

use crate::content::Link;
use crate::routes;

pub const NOT_FOUND_TITLE: &str = "Page not found";
pub const METHOD_NOT_ALLOWED_TITLE: &str = "Method not allowed";

/// Fallback view for paths the route table does not know
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub title: &'static str,
    pub path: &'a str,
    pub back: Link,
}

#[derive(Template)]
#[template(path = "method_not_allowed.html")]
pub struct MethodNotAllowedTemplate<'a> {
    pub title: &'static str,
    pub method: &'a str,
}

pub fn not_found(path: &str) -> askama::Result<String> {
    NotFoundTemplate {
        title: NOT_FOUND_TITLE,
        path,
        back: Link::internal("Back home", routes::HOME),
    }
    .render()
}

pub fn method_not_allowed(method: &str) -> askama::Result<String> {
    MethodNotAllowedTemplate {
        title: METHOD_NOT_ALLOWED_TITLE,
        method,
    }
    .render()
}

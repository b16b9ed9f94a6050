//! Render functions for every page the shell can show.
//!
//! Each view renders its own askama template to a fragment; the shell
//! template wraps that fragment into the full document.

pub mod home;
pub mod shell;
pub mod status;

use crate::routes::View;
use shell::ShellTemplate;

/// Full page for a routed view
pub fn render_page(view: View) -> askama::Result<ShellTemplate> {
    Ok(ShellTemplate::new(view.title(), view.render()?))
}

/// Full page for a path with no route
pub fn render_not_found(path: &str) -> askama::Result<ShellTemplate> {
    Ok(ShellTemplate::new(
        status::NOT_FOUND_TITLE,
        status::not_found(path)?,
    ))
}

/// Full page for a request method pages do not accept
pub fn render_method_not_allowed(method: &str) -> askama::Result<ShellTemplate> {
    Ok(ShellTemplate::new(
        status::METHOD_NOT_ALLOWED_TITLE,
        status::method_not_allowed(method)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    #[test]
    fn test_page_is_a_full_document() {
        let html = render_page(View::Home).unwrap().render().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<title>Rana Banankhah</title>"));
    }

    #[test]
    fn test_not_found_page_escapes_path() {
        let html = render_not_found("/<script>").unwrap().render().unwrap();
        assert!(html.contains("script"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_method_not_allowed_page() {
        let html = render_method_not_allowed("DELETE").unwrap().render().unwrap();
        assert!(html.contains("<title>Method not allowed</title>"));
        assert!(html.contains("not DELETE."));
    }
}

//! The biography page.

use askama::Template;

use crate::content::{Profile, PROFILE};

pub const TITLE: &str = PROFILE.name;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub profile: Profile,
}

/// Render the home view. Takes no input; the content is fixed.
pub fn render() -> askama::Result<String> {
    HomeTemplate { profile: PROFILE }.render()
}

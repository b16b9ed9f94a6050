use askama::Template;
use askama_web::WebTemplate;

/// Page layout: document head plus the `container > body` frame every
/// routed view sits in. `content` is an already-rendered view fragment.
#[derive(Template, WebTemplate)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub title: &'static str,
    pub content: String,
}

impl ShellTemplate {
    pub fn new(title: &'static str, content: String) -> Self {
        Self { title, content }
    }
}

// Route path constants - single source of truth for all paths

use std::collections::HashMap;

use crate::views;

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const ASSETS: &str = "/assets";
pub const OPENAPI: &str = "/api-docs/openapi.json";

/// A page the shell knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
}

impl View {
    /// Render the view's body fragment
    pub fn render(self) -> askama::Result<String> {
        match self {
            View::Home => views::home::render(),
        }
    }

    /// Document title shown by the browser
    pub fn title(self) -> &'static str {
        match self {
            View::Home => views::home::TITLE,
        }
    }
}

/// Mapping from page path to the view rendered for it.
///
/// Built once at startup and shared read-only; there is no way to add or
/// remove entries afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<&'static str, View>,
}

impl RouteTable {
    pub fn standard() -> Self {
        let mut entries = HashMap::with_capacity(1);
        entries.insert(HOME, View::Home);
        Self { entries }
    }

    /// Exact-match lookup. Trailing slashes and query strings are not
    /// normalised here; callers pass the bare path.
    pub fn resolve(&self, path: &str) -> Option<View> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_single_home_entry() {
        let table = RouteTable::standard();

        assert_eq!(table.len(), 1);
        assert_eq!(table.paths().collect::<Vec<_>>(), vec![HOME]);
        assert_eq!(table.resolve("/"), Some(View::Home));
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        let table = RouteTable::standard();

        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("/about"), None);
        assert_eq!(table.resolve("//"), None);
        assert_eq!(table.resolve("/?q=1"), None);
    }

    #[test]
    fn test_home_view_title() {
        assert_eq!(View::Home.title(), "Rana Banankhah");
    }
}

//! The three named dashboard views

use serde::{Deserialize, Serialize};

/// A top-level view reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Dashboard,
    Creations,
    Settings,
}

impl Page {
    /// All pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Creations, Page::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Creations => "Creations",
            Page::Settings => "Settings",
        }
    }

    /// Route path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Creations => "/creations",
            Page::Settings => "/settings",
        }
    }

    /// Resolve a location path to a page. Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.path().trim_end_matches('/') == trimmed)
            .unwrap_or_default()
    }
}

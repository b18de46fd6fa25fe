//! Leptos UI components

mod creation_tile;
mod error_banner;
mod nav_item;
mod sidebar;
mod upload_panel;

pub use creation_tile::{next_image_src, CreationTile};
pub use error_banner::ErrorBanner;
pub use nav_item::NavItem;
pub use sidebar::Sidebar;
pub use upload_panel::UploadPanel;

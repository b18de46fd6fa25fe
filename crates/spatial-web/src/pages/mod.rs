//! Page components

mod creations;
mod dashboard;
mod settings;

pub use creations::Creations;
pub use dashboard::Dashboard;
pub use settings::Settings;

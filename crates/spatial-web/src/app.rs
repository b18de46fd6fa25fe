//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Sidebar;
use crate::pages::{Creations, Dashboard, Settings};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Sidebar />
                <main class="content">
                    // Unknown paths render the dashboard
                    <Routes fallback=Dashboard>
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/creations") view=Creations />
                        <Route path=path!("/settings") view=Settings />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

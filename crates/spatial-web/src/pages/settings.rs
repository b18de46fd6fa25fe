//! Settings page

use leptos::prelude::*;

use crate::api;

/// Settings page - read-only view of the service endpoint
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="page settings-page">
            <header class="page-header">
                <h2 class="page-title">"Settings"</h2>
            </header>
            <div class="card settings-card">
                <div class="settings-row">
                    <span class="settings-label">"Upload endpoint"</span>
                    <code class="settings-value">{api::endpoint_url()}</code>
                </div>
                <p class="hint">
                    "Set SPATIAL_API_BASE when building the frontend to point it at another service."
                </p>
            </div>
        </div>
    }
}

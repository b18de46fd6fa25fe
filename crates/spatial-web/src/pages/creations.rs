//! Creations gallery page

use leptos::prelude::*;
use spatial_types::sample_creations;

use crate::components::CreationTile;

/// Grid of previously generated spatial images
#[component]
pub fn Creations() -> impl IntoView {
    let creations = sample_creations();

    view! {
        <div class="page creations-page">
            <header class="page-header">
                <h2 class="page-title">"Your Creations"</h2>
                <p class="hint">"Browse and manage your generated spatial images."</p>
            </header>
            <div class="creations-grid">
                <For
                    each=move || creations.clone()
                    key=|creation| creation.id
                    children=|creation| view! { <CreationTile creation=creation /> }
                />
            </div>
        </div>
    }
}

//! Dashboard page component

use leptos::prelude::*;

use crate::components::UploadPanel;

/// Dashboard page - welcome header, hero card and the upload flow
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <header class="page-header page-header-split">
                <h2 class="page-title">"Welcome! 👋"</h2>
                <div class="plan-info">
                    <span class="hint">"You're on the Free Plan."</span>
                    <button class="btn btn-primary">"Upgrade"</button>
                </div>
            </header>

            <div class="card hero-card">
                <div class="hero-text">
                    <h3 class="hero-title">"Create Spatial Images on Auto-Pilot"</h3>
                    <p class="hint hero-description">
                        "Turn any photo into an immersive spatial image with AI in seconds."
                    </p>
                    <button class="btn btn-secondary">"Tutorials"</button>
                </div>
                <div class="hero-art">
                    <h4>"AI Magic"</h4>
                </div>
            </div>

            <UploadPanel />
        </div>
    }
}

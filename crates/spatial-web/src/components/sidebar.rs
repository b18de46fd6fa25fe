//! Sidebar navigation component

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use spatial_types::Page;

use super::NavItem;

/// Free credits shown in the sidebar card
const FREE_CREDITS: u32 = 10;

/// Sidebar with brand, navigation menu and plan card
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    view! {
        <aside class="sidebar">
            <div>
                <h1 class="sidebar-brand">"Spatial-Image.ai"</h1>
                <nav class="nav">
                    <ul class="nav-list">
                        {Page::ALL
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <NavItem
                                        page=page
                                        active=Signal::derive(move || current.get() == page)
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>

            <div class="sidebar-footer">
                <div class="card credits-card">
                    <p class="credits-label">"Credits available"</p>
                    <p class="credits-value">
                        {FREE_CREDITS}
                        " "
                        <span class="credits-plan">"Free"</span>
                    </p>
                </div>
                <button class="btn btn-primary btn-block">"Upgrade Now"</button>
            </div>
        </aside>
    }
}

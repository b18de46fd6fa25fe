//! Gallery tile for one creation

use leptos::prelude::*;
use spatial_types::{Creation, FALLBACK_IMAGE_URL};

/// Source to switch to after `current` failed to load
///
/// Returns `None` once the fallback itself has failed, so a broken
/// placeholder never loops.
pub fn next_image_src(current: &str) -> Option<&'static str> {
    (current != FALLBACK_IMAGE_URL).then_some(FALLBACK_IMAGE_URL)
}

/// Card showing a creation's image, name and date
#[component]
pub fn CreationTile(creation: Creation) -> impl IntoView {
    let (src, set_src) = signal(creation.image_url);

    let on_error = move |_| {
        if let Some(fallback) = next_image_src(&src.get_untracked()) {
            set_src.set(fallback.to_string());
        }
    };

    view! {
        <div class="card creation-tile">
            <img
                class="creation-tile-image"
                src=move || src.get()
                alt=creation.name.clone()
                on:error=on_error
            />
            <div class="creation-tile-body">
                <h4 class="creation-tile-name">{creation.name}</h4>
                <p class="creation-tile-date">{creation.date}</p>
            </div>
        </div>
    }
}

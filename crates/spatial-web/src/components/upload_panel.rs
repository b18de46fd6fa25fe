//! File select, upload and result panel

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement};

use super::ErrorBanner;
use crate::api;
use crate::state::{UploadFlow, UploadState};

/// Swap in a new preview URL, returning the one that must be revoked
fn replace_preview(preview: RwSignal<Option<String>>, next: Option<String>) -> Option<String> {
    let mut old = None;
    preview.update(|current| old = std::mem::replace(current, next));
    old
}

/// Upload panel: pick a photo, preview it, send it, show the spatial image
#[component]
pub fn UploadPanel() -> impl IntoView {
    let flow = RwSignal::new(UploadFlow::new());
    // web_sys::File is not Send, keep it in local storage
    let selected_file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new(None::<String>);

    on_cleanup(move || {
        if let Some(url) = preview.try_get_untracked().flatten() {
            api::revoke_preview_url(&url);
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        let next = file.as_ref().and_then(api::preview_url);
        if let Some(old) = replace_preview(preview, next) {
            api::revoke_preview_url(&old);
        }
        flow.update(|f| f.select(file.as_ref().map(File::name)));
        selected_file.set(file);
    };

    let generate = move || {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        let mut ticket = None;
        flow.update(|f| ticket = f.begin());
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let result = api::create_spatial_image(&file).await;
            if let Err(e) = &result {
                logging::error!("Error uploading file: {}", e);
            }
            flow.update(|f| {
                f.finish(ticket, result);
            });
        });
    };

    let status = move || match flow.with(|f| f.state().clone()) {
        UploadState::Idle => ().into_any(),
        UploadState::Loading => view! {
            <div class="upload-status upload-loading">
                <span class="spinner" aria-hidden="true"></span>
                "Generating..."
            </div>
        }
        .into_any(),
        UploadState::Failed(message) => view! {
            <ErrorBanner error=message on_retry=Callback::new(move |_| generate()) />
        }
        .into_any(),
        UploadState::Done(response) => {
            let src = api::image_url(&response.processed_image_url);
            view! {
                <div class="upload-result">
                    <p class="upload-result-message">{response.message}</p>
                    <img class="upload-result-image" src=src alt=response.original_filename />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="card upload-panel">
            <h3 class="upload-panel-title">"Upload a photo"</h3>
            <div class="upload-panel-controls">
                <label class="btn btn-secondary file-picker">
                    "Choose image"
                    <input
                        type="file"
                        accept="image/*"
                        class="file-picker-input"
                        on:change=on_file_change
                    />
                </label>
                <span class="file-picker-name">
                    {move || {
                        flow.with(|f| f.selected().map(str::to_string))
                            .unwrap_or_else(|| "No file selected".to_string())
                    }}
                </span>
                <button
                    class="btn btn-primary"
                    disabled=move || !flow.with(UploadFlow::can_generate)
                    on:click=move |_| generate()
                >
                    "Generate"
                </button>
            </div>

            {move || preview.get().map(|src| view! {
                <img class="upload-preview" src=src alt="Selected image preview" />
            })}

            {status}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_replacing_preview_hands_back_previous_url() {
        let owner = Owner::new();
        owner.with(|| {
            let preview = RwSignal::new(None::<String>);

            assert_eq!(replace_preview(preview, Some("blob:a".to_string())), None);
            assert_eq!(
                replace_preview(preview, Some("blob:b".to_string())),
                Some("blob:a".to_string())
            );
            assert_eq!(replace_preview(preview, None), Some("blob:b".to_string()));
            assert_eq!(preview.get_untracked(), None);
        });
    }
}

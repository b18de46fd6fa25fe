//! Inline error display with a retry action

use leptos::prelude::*;

/// Error banner
///
/// Shows a user-facing error message with a retry button.
///
/// # Example
/// ```ignore
/// view! {
///     <ErrorBanner
///         error="Upload failed (HTTP 500)".to_string()
///         on_retry=Callback::new(move |_| generate())
///     />
/// }
/// ```
#[component]
pub fn ErrorBanner(
    /// Error message to display
    #[prop(into)]
    error: String,
    /// Callback to retry
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner-icon">"⚠️"</span>
            <p class="error-banner-message">{error}</p>
            <button class="btn btn-secondary" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}

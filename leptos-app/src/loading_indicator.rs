use leptos::prelude::*;

/// Spinner shown over the scene area until the viewer reports it has loaded.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="sceneLoading">
            <div class="sceneSpinner" />
            <span class="sceneLoadingLabel">"Loading 3D"</span>
        </div>
    }
}

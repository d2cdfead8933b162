use leptos::prelude::*;

use spline_scene_model::SceneConfig;
use web_sys::{UrlSearchParams, window};

mod loading_indicator;
mod require;
mod responsive;
mod spline_scene;
mod viewer;
mod watermark;

#[cfg(test)]
mod test_support;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use spline_scene::SplineScene;

/// Id of the optional `<script type="application/json">` carrying a `SceneConfig`.
const CONFIG_ELEMENT_ID: &str = "scene-config";

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO) // Only show INFO, WARN, ERROR
            .build(),
    );

    let config = load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Defaults, overlaid by the page's embedded JSON config, overlaid by `?scene=` / `?class=`.
fn load_config() -> SceneConfig {
    let base = embedded_config().unwrap_or_default();

    let params = window()
        .and_then(|win| win.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok());
    let param = |name: &str| params.as_ref().and_then(|p| p.get(name));

    base.with_overrides(param("scene"), param("class"))
}

fn embedded_config() -> Option<SceneConfig> {
    let json = window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    match SceneConfig::from_json(&json) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            None
        }
    }
}

#[component]
pub fn App(config: SceneConfig) -> impl IntoView {
    let SceneConfig { scene, class, viewer_script, load_event, branding, sweep, profile } = config;
    tracing::info!(scene = %scene, "mounting scene");

    view! {
        <main class="hero">
            <SplineScene scene class branding sweep profile load_event viewer_script />
        </main>
    }
}

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{Element, Node};

use spline_scene_model::{
    BrandingRules, LoadPhase, ResponsiveProfile, SweepSchedule, container_class,
    config::{DEFAULT_LOAD_EVENT, DEFAULT_VIEWER_SCRIPT},
};

use crate::{
    loading_indicator::LoadingIndicator,
    responsive::use_viewport_geometry,
    viewer::{ensure_viewer_script, mount_viewer, viewer_shadow_root},
    watermark::WatermarkGuard,
};

/// Embedded Spline scene that reframes itself for narrow viewports and hides
/// the vendor badge once the scene is up.
///
/// On small screens the canvas is widened so the 3D camera shows the full model,
/// then scaled down visually so it isn't oversized on screen.
#[component]
pub fn SplineScene(
    /// Scene URL handed to `<spline-viewer>`.
    #[prop(into)]
    scene: String,
    /// Extra class appended to the root container.
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] branding: BrandingRules,
    #[prop(optional)] sweep: SweepSchedule,
    #[prop(optional)] profile: ResponsiveProfile,
    /// Event dispatched by the viewer when the scene is ready.
    #[prop(into, default = DEFAULT_LOAD_EVENT.to_string())]
    load_event: String,
    #[prop(into, default = DEFAULT_VIEWER_SCRIPT.to_string())] viewer_script: String,
) -> impl IntoView {
    let phase = RwSignal::new(LoadPhase::Loading);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let geometry = use_viewport_geometry(profile);

    if let Err(e) = ensure_viewer_script(&viewer_script) {
        tracing::error!("{}", e);
    }

    // Mount the viewer once the host div exists.
    Effect::new(move |_| {
        let Some(host) = host_ref.get() else { return };
        let on_load = move || {
            let first = phase
                .try_maybe_update(|p| {
                    let first = p.mark_loaded();
                    (first, first)
                })
                .unwrap_or(false);
            if first {
                tracing::info!("scene loaded");
            }
        };
        match mount_viewer(&host, &scene, &load_event, on_load) {
            Ok(viewer) => {
                let viewer = SendWrapper::new(viewer);
                on_cleanup(move || drop(viewer));
            }
            // Spinner stays up.
            Err(e) => tracing::error!(scene = %scene, "{}", e),
        }
    });

    // Suppress branding while loaded; released on unmount or when the phase changes.
    // The viewer draws its badge inside its shadow root, so that is swept too.
    Effect::new(move |_| {
        if !phase.get().is_loaded() {
            return;
        }
        let Some(container) = container_ref.get_untracked() else { return };
        let container = Element::from(container);
        let mut roots = vec![Node::from(container.clone())];
        roots.extend(viewer_shadow_root(&container).map(Node::from));

        match WatermarkGuard::start(roots, branding.clone(), &sweep) {
            Ok(guard) => {
                let guard = SendWrapper::new(guard);
                on_cleanup(move || guard.take().stop());
            }
            Err(e) => tracing::warn!("{}", e),
        }
    });

    view! {
        <div node_ref=container_ref class=container_class(&class)>
            <Show when=move || phase.get().shows_spinner()>
                <LoadingIndicator />
            </Show>

            <div node_ref=host_ref class="sceneHost" style=move || geometry.get().scene_style(phase.get())></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement};

    use crate::test_support::{fresh_container, sleep};

    // Keeps the test page from fetching the real viewer module.
    const NO_SCRIPT: &str = "data:text/javascript,";

    fn find(root: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector).unwrap().and_then(|el| el.dyn_into().ok())
    }

    fn mount_scene(parent: &HtmlElement, class: &'static str) -> impl Sized {
        let _ = any_spawner::Executor::init_wasm_bindgen();
        leptos::mount::mount_to(parent.clone(), move || {
            view! { <SplineScene scene="https://example.com/scene.splinecode" class viewer_script=NO_SCRIPT /> }
        })
    }

    fn opacity(root: &HtmlElement) -> String {
        find(root, ".sceneHost").unwrap().style().get_property_value("opacity").unwrap()
    }

    #[wasm_bindgen_test]
    fn spinner_shows_and_scene_is_transparent_before_load() {
        let parent = fresh_container();
        let _mounted = mount_scene(&parent, "hero-3d");

        let root = find(&parent, ".splineScene").unwrap();
        assert!(root.class_list().contains("hero-3d"));
        assert!(find(&parent, ".sceneLoading").is_some());
        assert_eq!(opacity(&parent), "0");
    }

    #[wasm_bindgen_test]
    async fn load_event_reveals_scene_and_hides_spinner() {
        let parent = fresh_container();
        let _mounted = mount_scene(&parent, "");
        sleep(0).await;

        let viewer = parent.query_selector("spline-viewer").unwrap().unwrap();
        viewer.dispatch_event(&Event::new(DEFAULT_LOAD_EVENT).unwrap()).unwrap();
        sleep(0).await;

        assert!(find(&parent, ".sceneLoading").is_none());
        assert_eq!(opacity(&parent), "1");
    }
}

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, Event, HtmlScriptElement, ShadowRoot, window};

use crate::require::Require;

const VIEWER_TAG: &str = "spline-viewer";
const VIEWER_SCRIPT_ID: &str = "spline-viewer-module";

/// Load the module defining `<spline-viewer>`, once per document.
pub fn ensure_viewer_script(src: &str) -> Result<(), String> {
    let document = window().require("no window available")?.document().require("no document available")?;
    if document.get_element_by_id(VIEWER_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .require("failed to create viewer script")?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| "created element is not a <script>".to_string())?;
    script.set_id(VIEWER_SCRIPT_ID);
    script.set_type("module");
    script.set_src(src);

    document.head().require("document has no <head>")?.append_child(&script).require("failed to append viewer script")?;
    tracing::info!(src, "viewer script injected");
    Ok(())
}

/// A `<spline-viewer>` mounted inside a host element.
///
/// Dropping the handle detaches the load listener and removes the viewer.
pub struct ViewerHandle {
    viewer: Element,
    load_event: String,
    on_load: Closure<dyn FnMut(Event)>,
}

pub fn mount_viewer(host: &Element, scene: &str, load_event: &str, on_load: impl Fn() + 'static) -> Result<ViewerHandle, String> {
    let document = host.owner_document().require("scene host is not attached to a document")?;
    let viewer = document.create_element(VIEWER_TAG).require("failed to create <spline-viewer>")?;
    viewer.set_attribute("url", scene).require("failed to set scene url")?;
    viewer.set_attribute("style", "display:block;width:100%;height:100%;").require("failed to size viewer")?;

    let on_load = Closure::wrap(Box::new(move |_: Event| on_load()) as Box<dyn FnMut(Event)>);
    viewer
        .add_event_listener_with_callback(load_event, on_load.as_ref().unchecked_ref())
        .require("failed to listen for scene load")?;
    host.append_child(&viewer).require("failed to attach viewer")?;

    tracing::debug!(scene, load_event, "viewer mounted");
    Ok(ViewerHandle { viewer, load_event: load_event.to_string(), on_load })
}

/// Shadow root of the viewer mounted under `container`, where it draws its badge.
pub fn viewer_shadow_root(container: &Element) -> Option<ShadowRoot> {
    let viewer: Result<Element, String> = container.query_selector(VIEWER_TAG).require("no viewer in scene container");
    match viewer {
        Ok(viewer) => viewer.shadow_root(),
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    }
}

impl Drop for ViewerHandle {
    fn drop(&mut self) {
        let _ = self.viewer.remove_event_listener_with_callback(&self.load_event, self.on_load.as_ref().unchecked_ref());
        self.viewer.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{ShadowRootInit, ShadowRootMode};

    use crate::test_support::fresh_container;

    #[wasm_bindgen_test]
    fn mounted_viewer_is_removed_on_drop() {
        let container = fresh_container();
        let handle = mount_viewer(&container, "https://example.com/scene.splinecode", "load-complete", || {}).unwrap();

        let viewer = container.query_selector(VIEWER_TAG).unwrap().unwrap();
        assert_eq!(viewer.get_attribute("url").as_deref(), Some("https://example.com/scene.splinecode"));

        drop(handle);
        assert!(container.query_selector(VIEWER_TAG).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn shadow_root_is_found_once_attached() {
        let container = fresh_container();
        assert!(viewer_shadow_root(&container).is_none());

        let _handle = mount_viewer(&container, "scene", "load-complete", || {}).unwrap();
        assert!(viewer_shadow_root(&container).is_none());

        let viewer = container.query_selector(VIEWER_TAG).unwrap().unwrap();
        viewer.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open)).unwrap();
        assert!(viewer_shadow_root(&container).is_some());
    }
}

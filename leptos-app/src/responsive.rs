use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, window};

use spline_scene_model::{ResponsiveProfile, ViewportGeometry};

use crate::require::Require;

fn viewport_width() -> Result<f64, String> {
    window()
        .require("no window available")?
        .inner_width()
        .require("failed to read innerWidth")?
        .as_f64()
        .require("innerWidth is not a number")
}

fn current_geometry(profile: &ResponsiveProfile) -> ViewportGeometry {
    match viewport_width() {
        Ok(width) => profile.geometry_for(width),
        Err(e) => {
            tracing::warn!("{}, rendering scene 1:1", e);
            ViewportGeometry::IDENTITY
        }
    }
}

/// Scene geometry for the current viewport, recomputed on every resize.
///
/// The resize listener lives as long as the calling component.
pub fn use_viewport_geometry(profile: ResponsiveProfile) -> ReadSignal<ViewportGeometry> {
    let (geometry, set_geometry) = signal(current_geometry(&profile));

    let on_resize = Closure::wrap(Box::new(move |_: Event| {
        set_geometry.set(current_geometry(&profile));
    }) as Box<dyn FnMut(Event)>);

    let Some(win) = window() else {
        tracing::warn!("no window available, scene geometry will not track resizes");
        return geometry;
    };
    if let Err(e) = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()).require("failed to listen for resize") {
        tracing::warn!("{}", e);
        return geometry;
    }

    let listener = SendWrapper::new((win, on_resize));
    on_cleanup(move || {
        let (win, on_resize) = listener.take();
        let _ = win.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    });

    geometry
}

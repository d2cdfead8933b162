use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use spline_scene_model::{BrandingRules, HideStyle, SweepReport, SweepSchedule, TEXT_SELECTOR, candidate_text};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    DocumentFragment, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement, MutationObserver, MutationObserverInit, Node, NodeList,
    window,
};

use crate::require::Require;

/// Hide every branded element currently inside `root`.
///
/// `root` is an element or a shadow root; shadow trees below it are not entered.
/// Elements that vanish or lack the inspected attributes are skipped.
pub fn sweep(root: &Node, rules: &BrandingRules) -> SweepReport {
    let mut report = SweepReport::default();

    for link in query_all::<HtmlAnchorElement>(root, "a") {
        if rules.link_matches(&link.href()) {
            hide(&link, HideStyle::Link);
            report.links += 1;
        }
    }

    for el in query_all::<HtmlElement>(root, TEXT_SELECTOR) {
        let text = el.text_content();
        let alt = el.get_attribute("alt");
        if rules.text_matches(candidate_text(text.as_deref(), alt.as_deref())) {
            hide(&el, HideStyle::Text);
            report.elements += 1;
        }
    }

    for img in query_all::<HtmlImageElement>(root, "img") {
        if rules.image_matches(&img.src(), &img.alt()) {
            hide(&img, HideStyle::Image);
            report.images += 1;
        }
    }

    report
}

fn select_all(root: &Node, selector: &str) -> Option<Result<NodeList, String>> {
    if let Some(el) = root.dyn_ref::<Element>() {
        Some(el.query_selector_all(selector).require("querySelectorAll failed"))
    } else {
        root.dyn_ref::<DocumentFragment>().map(|fragment| fragment.query_selector_all(selector).require("querySelectorAll failed"))
    }
}

fn query_all<T: JsCast>(root: &Node, selector: &str) -> Vec<T> {
    let nodes = match select_all(root, selector) {
        Some(Ok(nodes)) => nodes,
        Some(Err(e)) => {
            tracing::warn!(selector, "{}", e);
            return Vec::new();
        }
        None => return Vec::new(),
    };
    (0..nodes.length()).filter_map(|i| nodes.item(i)).filter_map(|node| node.dyn_into::<T>().ok()).collect()
}

fn hide(el: &HtmlElement, style: HideStyle) {
    el.style().set_css_text(style.css_text());
}

/// Roots swept together, with the running total of everything they hid.
struct SweepTargets {
    roots: Vec<Node>,
    rules: BrandingRules,
    hidden: Cell<SweepReport>,
}

impl SweepTargets {
    fn run(&self, trigger: &'static str) {
        let mut report = SweepReport::default();
        for root in &self.roots {
            report += sweep(root, &self.rules);
        }
        if !report.is_empty() {
            tracing::debug!(trigger, links = report.links, elements = report.elements, images = report.images, "branding hidden");
        }
        let mut hidden = self.hidden.get();
        hidden += report;
        self.hidden.set(hidden);
    }
}

/// Keeps the vendor badge hidden after the scene has loaded.
///
/// Sweeps every root once on start, again after each scheduled delay, and
/// whenever a root's subtree changes. Dropping the guard cancels pending timers
/// and disconnects the observer.
pub struct WatermarkGuard {
    targets: Rc<SweepTargets>,
    observer: MutationObserver,
    _on_mutation: Closure<dyn FnMut(Array, MutationObserver)>,
    timers: Vec<(i32, Closure<dyn FnMut()>)>,
}

impl WatermarkGuard {
    /// `roots` are typically the scene container plus the viewer's shadow root.
    pub fn start(roots: Vec<Node>, rules: BrandingRules, schedule: &SweepSchedule) -> Result<Self, String> {
        let win = window().require("no window available")?;
        let targets = Rc::new(SweepTargets { roots, rules, hidden: Cell::new(SweepReport::default()) });

        targets.run("load");

        let on_mutation = {
            let targets = targets.clone();
            Closure::wrap(Box::new(move |_records: Array, _observer: MutationObserver| {
                targets.run("mutation");
            }) as Box<dyn FnMut(Array, MutationObserver)>)
        };
        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref()).require("failed to create MutationObserver")?;

        // From here on, an early return drops `guard` and releases whatever was acquired.
        let mut guard = Self { targets, observer, _on_mutation: on_mutation, timers: Vec::with_capacity(schedule.len()) };

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        for root in &guard.targets.roots {
            guard.observer.observe_with_options(root, &init).require("failed to observe scene subtree")?;
        }

        for delay in schedule.delays() {
            let callback = {
                let targets = guard.targets.clone();
                Closure::wrap(Box::new(move || targets.run("timer")) as Box<dyn FnMut()>)
            };
            let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
            let handle = win
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), millis)
                .require("failed to schedule branding sweep")?;
            guard.timers.push((handle, callback));
        }

        tracing::info!(roots = guard.targets.roots.len(), timers = guard.timers.len(), "watermark guard started");
        Ok(guard)
    }

    /// Everything hidden so far, summed over all sweeps.
    pub fn hidden(&self) -> SweepReport {
        self.targets.hidden.get()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for WatermarkGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(win) = window() {
            for (handle, _) in &self.timers {
                win.clear_timeout_with_handle(*handle);
            }
        }
        tracing::info!(hidden = self.hidden().total(), "watermark guard stopped");
    }
}

//! Document-level click trigger.
//!
//! Every click spawns one heart. Anchor clicks additionally have their default
//! navigation suppressed and replayed after `NAVIGATION_DELAY_MS`, long enough
//! for the heart to show up before the page unloads.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, EventTarget, HtmlAnchorElement, MouseEvent, SvgaElement, window};

use crate::console;
use crate::heart;

pub const NAVIGATION_DELAY_MS: i32 = 300;

/// What a click on a given (lowercased) tag does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    Spawn,
    SpawnThenNavigate,
}

impl ClickAction {
    pub fn for_tag(tag: &str) -> Self {
        if tag == "a" { ClickAction::SpawnThenNavigate } else { ClickAction::Spawn }
    }
}

/// Lowercased tag of the event target, `""` when there is no element target.
pub fn target_tag(target: Option<&EventTarget>) -> String {
    target
        .and_then(|t| t.dyn_ref::<Element>())
        .map(|el| el.tag_name().to_lowercase())
        .unwrap_or_default()
}

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Register the click listener on the document. Further calls are no-ops.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    if INSTALLED.with(Cell::get) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        on_click(&evt);
    }) as Box<dyn FnMut(_)>);
    // Not passive: anchor clicks must be able to prevent default navigation,
    // which browsers ignore inside passive listeners.
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    closure.forget();

    INSTALLED.with(|f| f.set(true));
    console::debug("click-hearts: click trigger installed");
    Ok(())
}

/// Handle one click. Never fails: DOM errors are logged and the click
/// degrades to no heart / no navigation.
pub fn on_click(evt: &MouseEvent) {
    let target = evt.target();
    let tag = target_tag(target.as_ref());
    let x = evt.client_x() as f64;
    let y = evt.client_y() as f64;

    match ClickAction::for_tag(&tag) {
        ClickAction::SpawnThenNavigate => {
            evt.prevent_default();
            spawn_or_warn(x, y);
            let href = target.map(anchor_href).unwrap_or_default();
            if let Err(e) = schedule_navigation(href) {
                console::warn_err("click-hearts: could not schedule navigation", &e);
            }
        }
        ClickAction::Spawn => spawn_or_warn(x, y),
    }
}

/// Navigable href of an HTML or SVG `<a>`; `""` for anything else.
/// SVG links hand back the attribute as written, `Location::set_href` resolves it.
fn anchor_href(target: EventTarget) -> String {
    if let Some(a) = target.dyn_ref::<HtmlAnchorElement>() {
        return a.href();
    }
    match target.dyn_ref::<SvgaElement>() {
        Some(a) => a.href().anim_val(),
        None => String::new(),
    }
}

fn spawn_or_warn(x: f64, y: f64) {
    if let Err(e) = heart::spawn_heart(x, y) {
        console::warn_err("click-hearts: could not spawn heart", &e);
    }
}

/// One-shot timer that navigates to `href` after `NAVIGATION_DELAY_MS`.
/// Returns the timeout handle.
pub fn schedule_navigation(href: String) -> Result<i32, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    console::debug(&format!("navigating to {href:?} in {NAVIGATION_DELAY_MS}ms"));
    let cb = Closure::once_into_js(move || navigate(&href));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), NAVIGATION_DELAY_MS)
}

// An anchor without a resolvable href is left alone.
fn navigate(href: &str) {
    if href.is_empty() {
        return;
    }
    let Some(win) = window() else { return };
    if let Err(e) = win.location().set_href(href) {
        console::warn_err("click-hearts: navigation failed", &e);
    }
}

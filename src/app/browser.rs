//! Thin wrappers over the browser APIs the page touches directly.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{i18n::Language, theme::Theme};

#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write was rejected")]
    Rejected,
}

pub fn locale() -> Option<String> {
    window().navigator().language()
}

/// Viewport width, or infinity when it can't be read.
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Whether the event target is, or sits inside, an element matching `selector`.
pub fn target_within(ev: &Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

pub fn smooth_scroll_by(el: &Element, left: f64) {
    let opts = ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&opts);
}

pub async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let clipboard = window().navigator().clipboard();
    // undefined outside secure contexts
    if clipboard.is_undefined() {
        return Err(ClipboardError::Unavailable);
    }
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|_| ClipboardError::Rejected)
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("light", theme.is_light()) {
        log::warn!("couldn't toggle theme class: {e:?}");
    }
    if let Some(root) = root.dyn_ref::<HtmlElement>() {
        if let Err(e) = root.style().set_property("color-scheme", theme.color_scheme()) {
            log::warn!("couldn't set color scheme: {e:?}");
        }
    }
}

pub fn set_document_language(lang: Language) {
    if let Some(root) = document().document_element() {
        if let Err(e) = root.set_attribute("lang", lang.tag()) {
            log::warn!("couldn't set document language: {e:?}");
        }
    }
}

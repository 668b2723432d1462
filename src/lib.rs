#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod gallery;
pub mod guard;
pub mod i18n;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tilt;
pub mod toast;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("couldn't initialise logging: {e}");
    }
    leptos::mount::hydrate_body(App);
}

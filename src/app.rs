mod avatar;
mod binding;
mod browser;
mod card;
mod certs;
mod homepage;
mod toasts;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_document, use_event_listener, use_media_query, use_preferred_dark};

use crate::{
    gallery::OverlayClick,
    guard::{self, KeyChord, CERT_INFO_SELECTOR, COPY_NAME_SELECTOR},
    i18n::{Language, Translation},
    state::AppState,
    theme::Theme,
    toast::{ToastStack, FADE_AFTER, REMOVE_AFTER},
};

use binding::PageBinding;
use homepage::HomePage;
use toasts::Toasts;

#[cfg(feature = "hydrate")]
type Store = crate::storage::BrowserStorage;
#[cfg(not(feature = "hydrate"))]
type Store = crate::storage::NoStorage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-card.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Handle to the page state, shared through context.
///
/// `AppState` is the source of truth; `PageBinding` mirrors it into signals.
#[derive(Clone, Copy)]
pub struct Page {
    state: StoredValue<AppState>,
    binding: PageBinding,
    toasts: RwSignal<ToastStack>,
}

impl Page {
    fn new() -> Self {
        // server render and first client render must agree, so start from fixed defaults
        let state = AppState::new(Language::default(), true, Theme::default());
        let binding = PageBinding::new();
        state.render(&binding);
        Self {
            state: StoredValue::new(state),
            binding,
            toasts: RwSignal::new(ToastStack::default()),
        }
    }

    /// Restores the stored or locale language once the page is live.
    ///
    /// Runs only after hydration, so until the WASM bundle loads a visitor with
    /// a stored `en` preference sees the Spanish server render.
    fn start(self) {
        let locale = browser::locale();
        self.state.update_value(|s| {
            s.restore_language(&Store::default(), locale.as_deref(), &self.binding);
            log::debug!("starting in {}", s.language());
        });
    }

    /// Follows the system color scheme. Dark until hydrated, whatever the system says.
    fn follow_system_theme(self, prefers_dark: bool) {
        self.state.update_value(|s| {
            s.set_theme(Theme::from_prefers_dark(prefers_dark), &self.binding);
        });
    }

    fn apply_tilt_default(self, coarse_pointer: bool) {
        let enabled = crate::tilt::enabled_by_default(coarse_pointer, browser::viewport_width());
        self.state.update_value(|s| s.set_tilt(enabled, &self.binding));
    }

    pub fn binding(self) -> PageBinding {
        self.binding
    }

    pub fn translation(self) -> &'static Translation {
        self.state.with_value(|s| s.translation())
    }

    pub fn tilt_enabled(self) -> bool {
        self.state.with_value(|s| s.tilt_enabled())
    }

    pub fn overlay_open(self) -> bool {
        self.state.with_value(|s| s.overlay().is_open())
    }

    pub fn set_language(self, lang: Language) {
        self.state.update_value(|s| {
            if let Err(e) = s.set_language(lang, &self.binding, &Store::default()) {
                log::warn!("couldn't persist language preference: {e}");
            }
        });
    }

    pub fn toggle_tilt(self) -> bool {
        self.state.update_value(|s| {
            s.toggle_tilt(&self.binding);
        });
        self.tilt_enabled()
    }

    pub fn toggle_theme(self) {
        self.state.update_value(|s| {
            s.toggle_theme(&self.binding);
        });
    }

    pub fn open_certificate(self, image: &str) {
        self.state
            .update_value(|s| s.open_certificate(image, &self.binding));
    }

    pub fn close_certificate(self) {
        self.state.update_value(|s| s.close_certificate(&self.binding));
    }

    pub fn click_overlay(self, target: OverlayClick) {
        self.state
            .update_value(|s| s.click_overlay(target, &self.binding));
    }

    pub fn toasts(self) -> ReadSignal<ToastStack> {
        self.toasts.read_only()
    }

    /// Shows a short-lived notification.
    pub fn flash(self, message: impl Into<String>) {
        let id = self.toasts.write().push(message);
        let toasts = self.toasts;
        set_timeout(move || toasts.write().fade(id), FADE_AFTER);
        set_timeout(move || toasts.write().remove(id), REMOVE_AFTER);
    }
}

/// Document-wide listeners that keep the certificates from being lifted.
fn guard_document(page: Page) {
    let _ = use_event_listener(use_document(), ev::contextmenu, move |ev| {
        if guard::suppress_context_menu(browser::target_within(&ev, COPY_NAME_SELECTOR)) {
            ev.prevent_default();
        }
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        let key = ev.key();
        let chord = KeyChord {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            key: &key,
        };
        if guard::intercept_save(chord, page.overlay_open()) {
            ev.prevent_default();
            page.flash(page.translation().certs_protected);
        }
    });

    let _ = use_event_listener(use_document(), ev::copy, move |ev| {
        let Some(text) = guard::copy_override(browser::target_within(&ev, CERT_INFO_SELECTOR))
        else {
            return;
        };
        ev.prevent_default();
        if let Some(data) = ev.clipboard_data() {
            if let Err(e) = data.set_data("text/plain", text) {
                log::warn!("couldn't replace clipboard data: {e:?}");
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = Page::new();
    provide_context(page);

    let prefers_dark = use_preferred_dark();
    let coarse_pointer = use_media_query("(pointer: coarse)");

    Effect::new(move |_| page.start());
    Effect::new(move |_| page.follow_system_theme(prefers_dark.get()));
    Effect::new(move |_| page.apply_tilt_default(coarse_pointer.get()));
    Effect::new(move |_| browser::apply_theme(page.binding.theme().get()));
    Effect::new(move |_| browser::set_document_language(page.binding.language().get()));

    guard_document(page);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Eduardo Cruz García - {title}") />

        <Router>
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-5xl px-4 py-10 gap-10">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Toasts />
        </Router>
    }
}

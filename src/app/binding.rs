use leptos::prelude::*;

use crate::{
    i18n::Language,
    state::{TextSlot, ViewBinding},
    theme::Theme,
};

/// Reactive view of `AppState`: one signal per text slot plus the
/// non-text bits the markup depends on.
#[derive(Debug, Clone, Copy)]
pub struct PageBinding {
    texts: [RwSignal<String>; TextSlot::COUNT],
    language: RwSignal<Language>,
    tilt_enabled: RwSignal<bool>,
    overlay: RwSignal<Option<String>>,
    theme: RwSignal<Theme>,
}

impl PageBinding {
    pub fn new() -> Self {
        Self {
            texts: std::array::from_fn(|_| RwSignal::new(String::new())),
            language: RwSignal::new(Language::default()),
            tilt_enabled: RwSignal::new(false),
            overlay: RwSignal::new(None),
            theme: RwSignal::new(Theme::default()),
        }
    }

    pub fn text(&self, slot: TextSlot) -> ReadSignal<String> {
        self.texts[slot as usize].read_only()
    }

    pub fn language(&self) -> ReadSignal<Language> {
        self.language.read_only()
    }

    pub fn tilt_enabled(&self) -> ReadSignal<bool> {
        self.tilt_enabled.read_only()
    }

    /// Image currently shown in the certificate viewer.
    pub fn overlay(&self) -> ReadSignal<Option<String>> {
        self.overlay.read_only()
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl ViewBinding for PageBinding {
    fn set_text(&self, slot: TextSlot, text: String) {
        self.texts[slot as usize].set(text);
    }

    fn set_active_language(&self, lang: Language) {
        self.language.set(lang);
    }

    fn set_tilt_enabled(&self, enabled: bool) {
        self.tilt_enabled.set(enabled);
    }

    fn set_overlay(&self, image: Option<&str>) {
        self.overlay.set(image.map(str::to_string));
    }

    fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }
}

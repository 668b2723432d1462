use crate::{
    gallery::{Overlay, OverlayClick},
    i18n::{resolve_language, Language, Translation},
    storage::{PreferenceStore, StorageError},
    theme::Theme,
};

/// A named text target on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    AvailableTag,
    Description,
    DownloadCvEs,
    DownloadCvEn,
    CopyName,
    CertsTitle,
    ScrollIndicator,
    TiltToggle,
}

impl TextSlot {
    pub const COUNT: usize = 8;
    pub const ALL: [TextSlot; Self::COUNT] = [
        Self::AvailableTag,
        Self::Description,
        Self::DownloadCvEs,
        Self::DownloadCvEn,
        Self::CopyName,
        Self::CertsTitle,
        Self::ScrollIndicator,
        Self::TiltToggle,
    ];

    /// Element id this slot is rendered into.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::AvailableTag => "availableTag",
            Self::Description => "description",
            Self::DownloadCvEs => "downloadCVES",
            Self::DownloadCvEn => "downloadCVEN",
            Self::CopyName => "copyName",
            Self::CertsTitle => "certsTitle",
            Self::ScrollIndicator => "scrollIndicator",
            Self::TiltToggle => "tiltToggle",
        }
    }

    pub fn text(self, t: &Translation, tilt_enabled: bool) -> String {
        match self {
            Self::AvailableTag => t.available.to_string(),
            Self::Description => t.description.to_string(),
            Self::DownloadCvEs => t.download_cv.to_string(),
            Self::DownloadCvEn => t.download_cv_en.to_string(),
            Self::CopyName => t.copy_name.to_string(),
            Self::CertsTitle => t.certifications.to_string(),
            Self::ScrollIndicator => t.scroll_more.to_string(),
            Self::TiltToggle => t.tilt_label(tilt_enabled),
        }
    }
}

/// The surface `AppState` renders into.
///
/// The page implements it with reactive signals; tests record the calls.
pub trait ViewBinding {
    fn set_text(&self, slot: TextSlot, text: String);
    fn set_active_language(&self, lang: Language);
    fn set_tilt_enabled(&self, enabled: bool);
    fn set_overlay(&self, image: Option<&str>);
    fn set_theme(&self, theme: Theme);
}

/// Everything the page mutates at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    language: Language,
    tilt_enabled: bool,
    overlay: Overlay,
    theme: Theme,
}

impl AppState {
    pub fn new(language: Language, tilt_enabled: bool, theme: Theme) -> Self {
        Self {
            language,
            tilt_enabled,
            overlay: Overlay::Closed,
            theme,
        }
    }

    /// Applies the startup language from storage and the user-agent locale.
    ///
    /// Nothing is written back: the preference is only stored on explicit choice.
    pub fn restore_language(
        &mut self,
        store: &impl PreferenceStore,
        locale: Option<&str>,
        view: &impl ViewBinding,
    ) {
        let stored = store.load().unwrap_or_else(|e| {
            log::warn!("{e}");
            None
        });
        self.language = resolve_language(stored.as_deref(), locale);
        self.render_texts(view);
        view.set_active_language(self.language);
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translation(&self) -> &'static Translation {
        self.language.translation()
    }

    pub fn tilt_enabled(&self) -> bool {
        self.tilt_enabled
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Pushes the whole state into `view`.
    pub fn render(&self, view: &impl ViewBinding) {
        self.render_texts(view);
        view.set_active_language(self.language);
        view.set_tilt_enabled(self.tilt_enabled);
        view.set_overlay(self.overlay.image());
        view.set_theme(self.theme);
    }

    fn render_texts(&self, view: &impl ViewBinding) {
        let t = self.translation();
        for slot in TextSlot::ALL {
            view.set_text(slot, slot.text(t, self.tilt_enabled));
        }
    }

    /// Switches language, updates every text slot, then persists the choice.
    ///
    /// The view is always updated; a storage failure is only reported back.
    pub fn set_language(
        &mut self,
        lang: Language,
        view: &impl ViewBinding,
        store: &impl PreferenceStore,
    ) -> Result<(), StorageError> {
        self.language = lang;
        self.render_texts(view);
        view.set_active_language(lang);
        store.save(lang)
    }

    /// Like [`AppState::set_language`] for a raw tag. Unknown tags do nothing.
    pub fn set_language_tag(
        &mut self,
        tag: &str,
        view: &impl ViewBinding,
        store: &impl PreferenceStore,
    ) -> Result<(), StorageError> {
        match tag.parse() {
            Ok(lang) => self.set_language(lang, view, store),
            Err(_) => Ok(()),
        }
    }

    pub fn toggle_tilt(&mut self, view: &impl ViewBinding) -> bool {
        self.tilt_enabled = !self.tilt_enabled;
        view.set_tilt_enabled(self.tilt_enabled);
        view.set_text(
            TextSlot::TiltToggle,
            TextSlot::TiltToggle.text(self.translation(), self.tilt_enabled),
        );
        self.tilt_enabled
    }

    /// Sets the tilt flag, relabelling the toggle only on change.
    pub fn set_tilt(&mut self, enabled: bool, view: &impl ViewBinding) {
        if self.tilt_enabled != enabled {
            self.toggle_tilt(view);
        }
    }

    pub fn set_theme(&mut self, theme: Theme, view: &impl ViewBinding) {
        self.theme = theme;
        view.set_theme(theme);
    }

    pub fn toggle_theme(&mut self, view: &impl ViewBinding) -> Theme {
        self.theme = self.theme.toggled();
        view.set_theme(self.theme);
        self.theme
    }

    pub fn open_certificate(&mut self, image: &str, view: &impl ViewBinding) {
        self.overlay.open(image);
        view.set_overlay(self.overlay.image());
    }

    pub fn close_certificate(&mut self, view: &impl ViewBinding) {
        self.overlay.close();
        view.set_overlay(None);
    }

    pub fn click_overlay(&mut self, target: OverlayClick, view: &impl ViewBinding) {
        if self.overlay.click(target) {
            view.set_overlay(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingView {
        texts: RefCell<HashMap<TextSlot, String>>,
        active: RefCell<Vec<Language>>,
        tilt: RefCell<Option<bool>>,
        overlay: RefCell<Option<String>>,
        theme: RefCell<Option<Theme>>,
    }

    impl RecordingView {
        fn text(&self, slot: TextSlot) -> String {
            self.texts.borrow().get(&slot).cloned().unwrap_or_default()
        }

        fn active(&self) -> Option<Language> {
            self.active.borrow().last().copied()
        }
    }

    impl ViewBinding for RecordingView {
        fn set_text(&self, slot: TextSlot, text: String) {
            self.texts.borrow_mut().insert(slot, text);
        }

        fn set_active_language(&self, lang: Language) {
            self.active.borrow_mut().push(lang);
        }

        fn set_tilt_enabled(&self, enabled: bool) {
            *self.tilt.borrow_mut() = Some(enabled);
        }

        fn set_overlay(&self, image: Option<&str>) {
            *self.overlay.borrow_mut() = image.map(str::to_string);
        }

        fn set_theme(&self, theme: Theme) {
            *self.theme.borrow_mut() = Some(theme);
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read)
        }

        fn save(&self, _lang: Language) -> Result<(), StorageError> {
            Err(StorageError::Write)
        }
    }

    fn assert_all_slots(view: &RecordingView, lang: Language, tilt: bool) {
        let t = lang.translation();
        for slot in TextSlot::ALL {
            assert_eq!(view.text(slot), slot.text(t, tilt), "{slot:?} for {lang}");
        }
    }

    #[test]
    fn test_switch_updates_every_slot() {
        let view = RecordingView::default();
        let store = MemoryStore::default();
        let mut state = AppState::new(Language::Es, true, Theme::Dark);
        state.render(&view);
        assert_all_slots(&view, Language::Es, true);

        for lang in [Language::En, Language::Es, Language::En] {
            state.set_language(lang, &view, &store).unwrap();
            assert_all_slots(&view, lang, true);
            assert_eq!(view.active(), Some(lang));
            assert_eq!(store.value().as_deref(), Some(lang.tag()));
        }
        assert_eq!(view.text(TextSlot::TiltToggle), "Tilt effect: ON");
    }

    #[test]
    fn test_single_active_language() {
        let view = RecordingView::default();
        let mut state = AppState::default();
        state.set_language(Language::En, &view, &MemoryStore::default()).unwrap();
        // one call per switch, carrying the one active selector
        assert_eq!(*view.active.borrow(), vec![Language::En]);
    }

    #[test]
    fn test_storage_failure_still_updates_view() {
        let view = RecordingView::default();
        let mut state = AppState::default();
        let res = state.set_language(Language::En, &view, &BrokenStore);
        assert_eq!(res, Err(StorageError::Write));
        assert_eq!(state.language(), Language::En);
        assert_all_slots(&view, Language::En, false);
        assert_eq!(view.active(), Some(Language::En));
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let view = RecordingView::default();
        let store = MemoryStore::default();
        let mut state = AppState::new(Language::En, true, Theme::Dark);
        state.set_language_tag("fr", &view, &store).unwrap();
        assert_eq!(state.language(), Language::En);
        assert!(view.texts.borrow().is_empty());
        assert_eq!(store.value(), None);

        state.set_language_tag("es", &view, &store).unwrap();
        assert_eq!(state.language(), Language::Es);
    }

    #[test]
    fn test_restore_prefers_stored_value() {
        let view = RecordingView::default();
        let store = MemoryStore::with_value("en");
        let mut state = AppState::new(Language::Es, true, Theme::Dark);
        state.restore_language(&store, Some("es-ES"), &view);
        assert_eq!(state.language(), Language::En);
        assert_all_slots(&view, Language::En, true);
        assert_eq!(view.active(), Some(Language::En));

        let store = MemoryStore::with_value("nonsense");
        state.restore_language(&store, Some("es-ES"), &view);
        assert_eq!(state.language(), Language::Es);
        // restoring never rewrites the stored value
        assert_eq!(store.value().as_deref(), Some("nonsense"));
    }

    #[test]
    fn test_restore_survives_broken_storage() {
        let view = RecordingView::default();
        let mut state = AppState::new(Language::Es, false, Theme::Light);
        state.restore_language(&BrokenStore, Some("en-US"), &view);
        assert_eq!(state.language(), Language::En);
        assert!(!state.tilt_enabled());
        assert_eq!(state.theme(), Theme::Light);

        state.restore_language(&BrokenStore, None, &view);
        assert_eq!(state.language(), Language::Es);
    }

    #[test]
    fn test_set_tilt_from_device_heuristic() {
        let view = RecordingView::default();
        let mut state = AppState::new(Language::En, true, Theme::Dark);
        state.set_tilt(true, &view);
        assert!(view.texts.borrow().is_empty());

        state.set_tilt(false, &view);
        assert!(!state.tilt_enabled());
        assert_eq!(view.text(TextSlot::TiltToggle), "Tilt effect: OFF");
        assert_eq!(*view.tilt.borrow(), Some(false));
    }

    #[test]
    fn test_set_theme_from_system() {
        let view = RecordingView::default();
        let mut state = AppState::default();
        state.set_theme(Theme::Light, &view);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(*view.theme.borrow(), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_tilt_relabels_in_active_language() {
        let view = RecordingView::default();
        let mut state = AppState::new(Language::Es, true, Theme::Dark);
        assert!(!state.toggle_tilt(&view));
        assert_eq!(view.text(TextSlot::TiltToggle), "Efecto tilt: OFF");
        assert_eq!(*view.tilt.borrow(), Some(false));

        state
            .set_language(Language::En, &view, &MemoryStore::default())
            .unwrap();
        assert_eq!(view.text(TextSlot::TiltToggle), "Tilt effect: OFF");
        assert!(state.toggle_tilt(&view));
        assert_eq!(view.text(TextSlot::TiltToggle), "Tilt effect: ON");
    }

    #[test]
    fn test_overlay_transitions() {
        let view = RecordingView::default();
        let mut state = AppState::default();

        state.open_certificate("/certs/a.webp", &view);
        state.open_certificate("/certs/b.webp", &view);
        assert_eq!(view.overlay.borrow().as_deref(), Some("/certs/b.webp"));
        assert_eq!(state.overlay().image(), Some("/certs/b.webp"));

        state.click_overlay(OverlayClick::Content, &view);
        assert!(state.overlay().is_open());
        assert_eq!(view.overlay.borrow().as_deref(), Some("/certs/b.webp"));

        state.click_overlay(OverlayClick::Backdrop, &view);
        assert!(!state.overlay().is_open());
        assert_eq!(*view.overlay.borrow(), None);

        state.open_certificate("/certs/a.webp", &view);
        state.close_certificate(&view);
        assert_eq!(*view.overlay.borrow(), None);
    }

    #[test]
    fn test_toggle_theme() {
        let view = RecordingView::default();
        let mut state = AppState::new(Language::Es, true, Theme::Dark);
        assert_eq!(state.toggle_theme(&view), Theme::Light);
        assert_eq!(*view.theme.borrow(), Some(Theme::Light));
        assert_eq!(state.toggle_theme(&view), Theme::Dark);
    }

    #[test]
    fn test_element_ids_are_unique() {
        let mut ids = TextSlot::ALL.map(TextSlot::element_id).to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TextSlot::COUNT);
    }

    #[test]
    fn test_element_ids_match_markup_contract() {
        let expected = [
            (TextSlot::AvailableTag, "availableTag"),
            (TextSlot::Description, "description"),
            (TextSlot::DownloadCvEs, "downloadCVES"),
            (TextSlot::DownloadCvEn, "downloadCVEN"),
            (TextSlot::CopyName, "copyName"),
            (TextSlot::CertsTitle, "certsTitle"),
            (TextSlot::ScrollIndicator, "scrollIndicator"),
            (TextSlot::TiltToggle, "tiltToggle"),
        ];
        for (slot, id) in expected {
            assert_eq!(slot.element_id(), id);
        }
        assert_eq!(
            format!("#{}", TextSlot::CopyName.element_id()),
            crate::guard::COPY_NAME_SELECTOR
        );
    }
}

use leptos::{ev::MouseEvent, html, prelude::*, task::spawn_local};

use crate::{
    guard::ATTRIBUTION,
    i18n::Language,
    state::TextSlot,
    theme::Theme,
    tilt::{Tilt, OFF_TRANSFORM, REST_TRANSFORM},
};

use super::{avatar::Avatar, browser, Page};

const CV_ES: &str = "/cv/CV_Eduardo_Cruz_ES.pdf";
const CV_EN: &str = "/cv/CV_Eduardo_Cruz_EN.pdf";

#[component]
pub fn ProfileCard() -> impl IntoView {
    let page = expect_context::<Page>();
    let binding = page.binding();
    let text = move |slot: TextSlot| binding.text(slot);

    let card_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(REST_TRANSFORM.to_string());

    let handle_tilt = move |ev: MouseEvent| {
        if !page.tilt_enabled() {
            return;
        }
        let card = if let Some(card) = card_ref.get_untracked() {
            card
        } else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        if let Some(tilt) = Tilt::from_pointer(x, y, rect.width(), rect.height()) {
            set_transform.set(tilt.transform());
        }
    };

    let copy_name = move |_| {
        spawn_local(async move {
            let res = browser::write_clipboard(ATTRIBUTION).await;
            // looked up after the await: the language may have changed meanwhile
            let t = page.translation();
            match res {
                Ok(()) => page.flash(t.name_copied),
                Err(e) => {
                    log::warn!("{e}");
                    page.flash(t.copy_error);
                }
            }
        });
    };

    view! {
        <div
            id="card"
            node_ref=card_ref
            class="card w-full max-w-3xl rounded-2xl border border-muted/30 bg-surface p-6 sm:p-8 shadow-2xl"
            style:transform=move || transform.get()
            on:mousemove=handle_tilt
            on:mouseleave=move |_| set_transform.set(REST_TRANSFORM.to_string())
        >
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-4">
                    <Avatar />
                    <div>
                        <h1 class="text-2xl sm:text-3xl font-bold">"Eduardo Cruz García"</h1>
                        <span
                            id={TextSlot::AvailableTag.element_id()}
                            class="inline-block mt-2 px-3 py-1 rounded-full text-sm bg-accent/20 text-accent"
                        >
                            {move || text(TextSlot::AvailableTag).get()}
                        </span>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <LanguageButton id="langES" label="ES" lang=Language::Es />
                    <LanguageButton id="langEN" label="EN" lang=Language::En />
                    <button
                        id="themeToggle"
                        class="toggle-btn"
                        aria-label=move || binding.language().get().translation().toggle_theme
                        on:click=move |_| page.toggle_theme()
                    >
                        <span id="sun" class:hidden=move || binding.theme().get() == Theme::Light>
                            "☀️"
                        </span>
                        <span id="moon" class:hidden=move || binding.theme().get() == Theme::Dark>
                            "🌙"
                        </span>
                    </button>
                </div>
            </div>
            <p id={TextSlot::Description.element_id()} class="mt-6 text-base leading-relaxed">
                {move || text(TextSlot::Description).get()}
            </p>
            <div class="mt-6 flex flex-wrap gap-3">
                <a id={TextSlot::DownloadCvEs.element_id()} class="action-btn" href=CV_ES download="">
                    {move || text(TextSlot::DownloadCvEs).get()}
                </a>
                <a id={TextSlot::DownloadCvEn.element_id()} class="action-btn" href=CV_EN download="">
                    {move || text(TextSlot::DownloadCvEn).get()}
                </a>
                <button id={TextSlot::CopyName.element_id()} class="action-btn" on:click=copy_name>
                    {move || text(TextSlot::CopyName).get()}
                </button>
                <button
                    id={TextSlot::TiltToggle.element_id()}
                    class="action-btn"
                    class:disabled=move || !binding.tilt_enabled().get()
                    on:click=move |_| {
                        if !page.toggle_tilt() {
                            set_transform.set(OFF_TRANSFORM.to_string());
                        }
                    }
                >
                    {move || text(TextSlot::TiltToggle).get()}
                </button>
            </div>
        </div>
    }
}

#[component]
fn LanguageButton(id: &'static str, label: &'static str, lang: Language) -> impl IntoView {
    let page = expect_context::<Page>();
    let active = move || page.binding().language().get() == lang;
    view! {
        <button
            id=id
            class="lang-btn"
            class:active=active
            aria-pressed=move || active().to_string()
            on:click=move |_| page.set_language(lang)
        >
            {label}
        </button>
    }
}

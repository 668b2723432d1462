use leptos::{
    ev::{DragEvent, MouseEvent, WheelEvent},
    html,
    prelude::*,
};

use crate::{
    gallery::{catalog, wheel_to_horizontal, Certification, OverlayClick, SCROLL_STEP},
    state::TextSlot,
};

use super::{browser, Page};

#[component]
pub fn CertGallery() -> impl IntoView {
    let page = expect_context::<Page>();
    let binding = page.binding();
    let grid_ref = NodeRef::<html::Div>::new();

    let scroll = move |left: f64| {
        if let Some(grid) = grid_ref.get_untracked() {
            browser::smooth_scroll_by(&grid, left);
        }
    };

    view! {
        <section class="w-full max-w-5xl">
            <h2 id={TextSlot::CertsTitle.element_id()} class="text-xl font-bold mb-4">
                {move || binding.text(TextSlot::CertsTitle).get()}
            </h2>
            <div class="relative flex items-center gap-2">
                <button
                    id="certScrollLeft"
                    class="scroll-btn"
                    aria-label="←"
                    on:click=move |_| scroll(-SCROLL_STEP)
                >
                    "‹"
                </button>
                <div
                    id="certGrid"
                    node_ref=grid_ref
                    class="cert-grid flex gap-4 overflow-x-auto scroll-smooth py-2"
                    on:wheel=move |ev: WheelEvent| {
                        if let Some(left) = wheel_to_horizontal(ev.delta_y()) {
                            ev.prevent_default();
                            scroll(left);
                        }
                    }
                >
                    {catalog()
                        .iter()
                        .map(|cert| view! { <CertCard cert=cert.clone() /> })
                        .collect_view()}
                </div>
                <button
                    id="certScrollRight"
                    class="scroll-btn"
                    aria-label="→"
                    on:click=move |_| scroll(SCROLL_STEP)
                >
                    "›"
                </button>
            </div>
            <p id={TextSlot::ScrollIndicator.element_id()} class="mt-2 text-sm text-center text-muted">
                {move || binding.text(TextSlot::ScrollIndicator).get()}
            </p>
        </section>
        <CertModal />
    }
}

#[component]
fn CertCard(cert: Certification) -> impl IntoView {
    let page = expect_context::<Page>();
    let Certification {
        id,
        title,
        issuer,
        image,
    } = cert;
    let target = image.clone();
    let data_cert = image.clone();
    let alt = title.clone();

    view! {
        <div
            class="cert-card shrink-0 w-72 cursor-pointer rounded-xl border border-muted/30 overflow-hidden"
            data-cert=data_cert
            data-id=id
            on:click=move |_| page.open_certificate(&target)
            on:contextmenu=|ev: MouseEvent| ev.prevent_default()
        >
            <img
                class="cert-image w-full h-44 object-cover select-none"
                src=image
                alt=alt
                loading="lazy"
                draggable="false"
                on:contextmenu=|ev: MouseEvent| ev.prevent_default()
                on:dragstart=|ev: DragEvent| ev.prevent_default()
            />
            <div class="cert-info p-3">
                <h3 class="font-semibold">{title}</h3>
                <p class="text-sm text-muted">{issuer}</p>
            </div>
        </div>
    }
}

/// The shared viewer; shows whatever image the page state says is open.
#[component]
fn CertModal() -> impl IntoView {
    let page = expect_context::<Page>();
    let binding = page.binding();
    let overlay = binding.overlay();

    view! {
        <div
            id="certModal"
            class="cert-modal"
            class:active=move || overlay.get().is_some()
            on:click=move |ev: MouseEvent| {
                // only a click on the backdrop itself closes, not one on the image
                let target = if ev.target() == ev.current_target() {
                    OverlayClick::Backdrop
                } else {
                    OverlayClick::Content
                };
                page.click_overlay(target);
            }
        >
            <button
                id="certClose"
                class="cert-close"
                aria-label=move || binding.language().get().translation().close
                on:click=move |_| page.close_certificate()
            >
                "×"
            </button>
            <img
                id="certModalImg"
                src=move || overlay.get().unwrap_or_default()
                alt=""
                draggable="false"
                on:contextmenu=|ev: MouseEvent| ev.prevent_default()
                on:dragstart=|ev: DragEvent| ev.prevent_default()
            />
        </div>
    }
}

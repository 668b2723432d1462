use leptos::{ev::DragEvent, prelude::*};

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="avatar shrink-0">
            <img
                src="/avatar.webp"
                alt="Eduardo Cruz García"
                width="96"
                height="96"
                draggable="false"
                class="w-24 h-24 rounded-full border-2 border-accent object-cover select-none"
                on:dragstart=|ev: DragEvent| ev.prevent_default()
            />
        </div>
    }
}

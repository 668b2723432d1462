use leptos::prelude::*;

use crate::toast::Toast;

use super::Page;

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<Page>().toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let fading = move || {
                        toasts.with(|s| s.toasts().iter().any(|t| t.id == id && t.fading))
                    };
                    view! {
                        <div class="toast" class:fading=fading>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;

use super::{card::ProfileCard, certs::CertGallery};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ProfileCard />
        <CertGallery />
        <footer class="text-sm text-muted text-center">
            "© " <span id="year">{BUILD_YEAR}</span> " Eduardo Cruz García"
        </footer>
    }
}

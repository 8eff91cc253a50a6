use leptos::prelude::*;

use crate::nav::{NavContext, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<NavContext>();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"SubTrack"</h1>
                <p class="sidebar-subtitle">"Subscription Manager"</p>
            </div>
            <ul class="nav-list">
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <li class="nav-item">
                            <button
                                class="nav-link"
                                class:active=move || nav.page.get() == page
                                on:click=move |_| nav.set_page.set(page)
                            >
                                {page.label()}
                            </button>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

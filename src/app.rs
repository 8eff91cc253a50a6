use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::config::{self, AppConfig};
use crate::nav::{apply_page_title, NavContext, Page};
use crate::pages::activity::ActivityPage;
use crate::pages::home::HomePage;
use crate::pages::settings::SettingsPage;
use crate::store::SubscriptionStore;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);
    provide_context(NavContext { page, set_page });

    // Keep the tab title in sync with the active page
    Effect::new(move |_| {
        apply_page_title(page.get());
    });

    let AppConfig {
        subscriptions,
        total_investments,
    } = config::load();
    let store = RwSignal::new(SubscriptionStore::new(subscriptions));

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="content">
                {move || match page.get() {
                    Page::Home => view! {
                        <HomePage store=store total_investments=total_investments />
                    }
                    .into_any(),
                    Page::Activity => view! { <ActivityPage /> }.into_any(),
                    Page::Settings => view! { <SettingsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

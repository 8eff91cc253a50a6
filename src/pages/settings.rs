use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>
            <div class="card">
                <p class="placeholder-text">
                    "This is where you would display user settings and preferences."
                </p>
            </div>
        </div>
    }
}

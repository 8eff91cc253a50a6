use leptos::prelude::*;

#[component]
pub fn ActivityPage() -> impl IntoView {
    view! {
        <div class="page activity-page">
            <h2>"Activity"</h2>
            <div class="card">
                <p class="placeholder-text">
                    "This is where you would display user activity or transaction history."
                </p>
            </div>
        </div>
    }
}

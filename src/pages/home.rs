use leptos::prelude::*;

use crate::components::format_usd;
use crate::components::metric_card::{MetricAccent, MetricCard};
use crate::components::subscription_editor::SubscriptionEditor;
use crate::components::subscription_table::SubscriptionTable;
use crate::store::SubscriptionStore;

#[component]
pub fn HomePage(store: RwSignal<SubscriptionStore>, total_investments: f64) -> impl IntoView {
    // Dialog visibility is view state; the edit session itself lives in the store
    let (show_editor, set_show_editor) = signal(false);
    let (edit_error, set_edit_error) = signal::<Option<String>>(None);

    let open_editor = move |id: i64| {
        let mut result = Ok(());
        store.update(|s| result = s.begin_edit(id));
        match result {
            Ok(()) => {
                set_edit_error.set(None);
                set_show_editor.set(true);
            }
            Err(e) => set_edit_error.set(Some(e.into())),
        }
    };

    let save_edit = move |_| {
        store.update(|s| s.commit_edit());
        set_show_editor.set(false);
    };

    let cancel_edit = move |_| {
        store.update(|s| s.cancel_edit());
        set_show_editor.set(false);
    };

    view! {
        <div class="page home-page">
            <h2>"Dashboard"</h2>
            <p class="page-description">
                "Track your recurring subscription payments at a glance."
            </p>

            {move || edit_error.get().map(|e| view! { <div class="page-error">{e}</div> })}

            // Summary metrics
            {move || {
                let expense = store.with(|s| s.total_expense());
                let expenditure = store.with(|s| s.total_expenditure(total_investments));
                let count = store.with(|s| s.subscription_count());
                view! {
                    <div class="metric-grid">
                        <MetricCard
                            title="Total Expenditure"
                            value=format_usd(expenditure)
                            icon="$"
                            accent=MetricAccent::Blue
                        />
                        <MetricCard
                            title="Total Investments"
                            value=format_usd(total_investments)
                            icon="\u{2197}"
                            accent=MetricAccent::Green
                        />
                        <MetricCard
                            title="Total Expense"
                            value=format_usd(expense)
                            icon="\u{2212}"
                            accent=MetricAccent::Red
                        />
                        <MetricCard
                            title="Number of Subscriptions"
                            value=count.to_string()
                            icon="#"
                            accent=MetricAccent::Purple
                        />
                    </div>
                }
            }}

            // Subscription list; a row click opens the editor on that record
            <div class="card subscriptions-card">
                <h3 class="card-title">"Subscriptions"</h3>
                {move || {
                    let subscriptions = store.with(|s| s.subscriptions().to_vec());
                    view! {
                        <SubscriptionTable subscriptions=subscriptions on_select=open_editor />
                    }
                }}
            </div>

            <Show when=move || show_editor.get() && store.with(|s| s.is_editing())>
                <SubscriptionEditor store=store on_save=save_edit on_cancel=cancel_edit />
            </Show>
        </div>
    }
}

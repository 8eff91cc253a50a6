use leptos::prelude::*;

use super::format_usd;
use crate::store::Subscription;

/// Table of subscription records. Clicking a row reports its id so the page
/// can open the edit dialog for it.
#[component]
pub fn SubscriptionTable(
    subscriptions: Vec<Subscription>,
    #[prop(into)] on_select: Callback<i64>,
) -> impl IntoView {
    if subscriptions.is_empty() {
        return view! {
            <div class="table-empty">
                <p>"No subscriptions to show."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <table class="subscription-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Amount"</th>
                    <th>"Next Payment"</th>
                    <th>"Payment Method"</th>
                </tr>
            </thead>
            <tbody>
                {subscriptions.into_iter().map(|sub| {
                    let id = sub.id;
                    view! {
                        <tr class="subscription-row" on:click=move |_| on_select.run(id)>
                            <td class="cell-name">{sub.name.clone()}</td>
                            <td class="cell-amount">{format_usd(sub.amount)}</td>
                            <td>{sub.next_payment.clone()}</td>
                            <td>{sub.payment_method.clone()}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

//! Edit dialog for a subscription record.
//!
//! Modal dialog over the dashboard. Every input change writes straight
//! through to the store's detached working copy; the canonical list is only
//! touched when the caller commits on "Save changes".

use leptos::prelude::*;

use crate::store::{FieldEdit, SubscriptionStore};

/// Parse a raw amount entry. Non-numeric text becomes NaN, which the store
/// keeps as-is and display code masks; nothing is rejected here.
fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Dialog for editing the fields of the record currently being edited.
///
/// The caller controls visibility and owns the commit/cancel decisions; the
/// dialog only reports them. The record id is not editable and not shown.
#[component]
pub fn SubscriptionEditor(
    store: RwSignal<SubscriptionStore>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    // Enter saves, Escape cancels, from any field
    let key_actions = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_save.run(());
        } else if ev.key() == "Escape" {
            on_cancel.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <style>{include_str!("subscription_editor.css")}</style>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h3>"Edit Subscription"</h3>
                <p class="dialog-subtitle">
                    "Changes apply when you save; cancel to leave the record as it was."
                </p>

                <div class="form-group">
                    <label for="edit-name">"Name"</label>
                    <input
                        id="edit-name"
                        type="text"
                        class="input"
                        prop:value=move || store.with(|s| {
                            s.editing().map(|e| e.name.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| store.update(|s| {
                            s.update_field(FieldEdit::Name(event_target_value(&ev)))
                        })
                        on:keydown=key_actions
                    />
                </div>

                <div class="form-group">
                    <label for="edit-amount">"Amount"</label>
                    <input
                        id="edit-amount"
                        type="number"
                        step="0.01"
                        min="0"
                        class="input"
                        prop:value=move || store.with(|s| {
                            // An unparseable entry shows as empty, not "NaN"
                            s.editing()
                                .filter(|e| e.amount.is_finite())
                                .map(|e| e.amount.to_string())
                                .unwrap_or_default()
                        })
                        on:input=move |ev| store.update(|s| {
                            s.update_field(FieldEdit::Amount(parse_amount(&event_target_value(&ev))))
                        })
                        on:keydown=key_actions
                    />
                </div>

                <div class="form-group">
                    <label for="edit-next-payment">"Next Payment"</label>
                    <input
                        id="edit-next-payment"
                        type="date"
                        class="input"
                        prop:value=move || store.with(|s| {
                            s.editing().map(|e| e.next_payment.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| store.update(|s| {
                            s.update_field(FieldEdit::NextPayment(event_target_value(&ev)))
                        })
                        on:keydown=key_actions
                    />
                </div>

                <div class="form-group">
                    <label for="edit-payment-method">"Payment Method"</label>
                    <input
                        id="edit-payment-method"
                        type="text"
                        class="input"
                        prop:value=move || store.with(|s| {
                            s.editing().map(|e| e.payment_method.clone()).unwrap_or_default()
                        })
                        on:input=move |ev| store.update(|s| {
                            s.update_field(FieldEdit::PaymentMethod(event_target_value(&ev)))
                        })
                        on:keydown=key_actions
                    />
                </div>

                <div class="dialog-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| on_save.run(())>
                        "Save changes"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("19.99"), 19.99);
        assert_eq!(parse_amount("  50 "), 50.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_parse_amount_falls_back_to_nan() {
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("12,99").is_nan());
    }
}

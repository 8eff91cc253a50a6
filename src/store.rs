//! In-memory subscription store.
//!
//! Owns the canonical list of subscription records plus the detached working
//! copy used while one record is being edited. The list is seeded once at
//! construction and only ever changes through `commit_edit`; everything else
//! reads it or derives totals from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recurring payment tracked on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier, assigned at creation and never changed.
    pub id: i64,
    pub name: String,
    /// Charge per billing period. Not range-checked; an unparseable user
    /// entry arrives here as NaN and is kept as-is.
    pub amount: f64,
    /// ISO 8601 calendar date (`YYYY-MM-DD`) of the next charge.
    pub next_payment: String,
    /// Free-text label ("Credit Card", "PayPal", ...).
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("No subscription with id {0}")]
    UnknownId(i64),
}

impl From<StoreError> for String {
    fn from(err: StoreError) -> Self {
        err.to_string()
    }
}

/// A single field assignment applied to the record being edited.
///
/// There is no variant for `id`; it is immutable and `commit_edit` relies on
/// it to locate the record to replace.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Amount(f64),
    NextPayment(String),
    PaymentMethod(String),
}

/// The subscription list and the edit session state.
///
/// While a session is active, `editing` holds a detached copy of one record;
/// field changes land on the copy and the list stays untouched until
/// `commit_edit` writes the copy back over the record with the matching id.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStore {
    subscriptions: Vec<Subscription>,
    editing: Option<Subscription>,
}

impl SubscriptionStore {
    /// Create a store seeded with the given records.
    ///
    /// Ids are expected to be unique within the seed; `commit_edit` matches
    /// records by id.
    pub fn new(seed: Vec<Subscription>) -> Self {
        Self {
            subscriptions: seed,
            editing: None,
        }
    }

    /// Current records, in insertion order.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// The detached working copy, if an edit session is active.
    pub fn editing(&self) -> Option<&Subscription> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start an edit session for the record with the given id.
    ///
    /// Stores a detached copy of the record as the working copy; the list
    /// itself is not touched. An unknown id is rejected and leaves the store
    /// unchanged, including any session already active.
    pub fn begin_edit(&mut self, id: i64) -> Result<(), StoreError> {
        let record = self
            .subscriptions
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::UnknownId(id))?;
        self.editing = Some(record.clone());
        Ok(())
    }

    /// Apply one field change to the working copy.
    ///
    /// Values are stored exactly as given; amounts are not validated, so a
    /// NaN parsed upstream passes through. Without an active session this is
    /// a no-op.
    pub fn update_field(&mut self, edit: FieldEdit) {
        let editing = match self.editing.as_mut() {
            Some(e) => e,
            None => return,
        };
        match edit {
            FieldEdit::Name(name) => editing.name = name,
            FieldEdit::Amount(amount) => editing.amount = amount,
            FieldEdit::NextPayment(date) => editing.next_payment = date,
            FieldEdit::PaymentMethod(method) => editing.payment_method = method,
        }
    }

    /// Write the working copy back over the record with the matching id and
    /// end the session.
    ///
    /// Every other record, and the relative order of all records, is left
    /// untouched. Should the working copy's id match nothing (not reachable
    /// through this API, since `begin_edit` validates the id and `FieldEdit`
    /// cannot change it), the list stays as-is but the session still ends.
    /// Without an active session this is a no-op.
    pub fn commit_edit(&mut self) {
        if let Some(edited) = self.editing.take() {
            if let Some(slot) = self.subscriptions.iter_mut().find(|s| s.id == edited.id) {
                *slot = edited;
            }
        }
    }

    /// Discard the working copy and end the session. The list is untouched.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Sum of all subscription amounts.
    pub fn total_expense(&self) -> f64 {
        self.subscriptions.iter().map(|s| s.amount).sum()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Total expense plus the externally supplied investments figure. The
    /// store does not own an investments concept; the value is injected.
    pub fn total_expenditure(&self, investments: f64) -> f64 {
        self.total_expense() + investments
    }
}

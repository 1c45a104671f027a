//! Validation of the transaction form.
//!
//! Every field of a submitted form is checked, even after an earlier field
//! has failed, so that the user sees all of their mistakes at once.

use serde::{Deserialize, Serialize};

use crate::{
    amount::{Amount, parse_amount},
    ledger::TransactionKind,
};

/// A problem with one field of a submitted transaction form.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// Neither debit nor credit was selected.
    #[error("User must select transaction type.")]
    MissingType,

    /// The description was empty or only whitespace.
    #[error("Description field cannot be empty.")]
    EmptyDescription,

    /// The amount was less than zero.
    #[error("Cash must be a positive number.")]
    NotPositive,

    /// The amount was zero, or rounds to zero.
    #[error("Cash value cannot be Zero.")]
    Zero,

    /// The amount was not a decimal number.
    #[error("Cash must be a number.")]
    NotANumber,

    /// The amount was greater than the largest allowed amount.
    #[error("Cash value cannot be more than $1000000000.00.")]
    TooLarge,
}

/// The raw field values of a submitted transaction form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The selected transaction type, "debit" or "credit".
    #[serde(default)]
    pub type_: String,
    /// Text describing the transaction.
    #[serde(default)]
    pub description: String,
    /// The amount of money as entered by the user.
    #[serde(default)]
    pub amount: String,
}

/// A transaction that passed validation and is ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    /// Whether the transaction is a debit or a credit.
    pub kind: TransactionKind,
    /// The trimmed, non-empty description.
    pub description: String,
    /// The amount rounded to two decimal places.
    pub amount: Amount,
}

/// Collects the validation failures of the most recent submission attempt.
#[derive(Debug, Default)]
pub struct ValidationAggregator {
    failures: Vec<ValidationFailure>,
}

impl ValidationAggregator {
    /// Create an aggregator with no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `form`, replacing the failures of any previous attempt.
    ///
    /// Fields are checked in the order type, description, amount, and the
    /// failures are recorded in that order. Returns the validated transaction
    /// only if there were no failures.
    pub fn validate(&mut self, form: &TransactionForm) -> Option<ValidTransaction> {
        self.clear();

        let kind = self.check(form.type_.parse::<TransactionKind>());
        let description = self.check(validate_description(&form.description));
        let amount = self.check(parse_amount(&form.amount));

        match (kind, description, amount) {
            (Some(kind), Some(description), Some(amount)) => Some(ValidTransaction {
                kind,
                description,
                amount,
            }),
            _ => None,
        }
    }

    /// Remove all recorded failures.
    pub fn clear(&mut self) {
        self.failures.clear();
    }

    /// The failures of the most recent attempt, in field order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Whether the most recent attempt had no failures.
    pub fn is_error_free(&self) -> bool {
        self.failures.is_empty()
    }

    fn check<T>(&mut self, result: Result<T, ValidationFailure>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(failure) => {
                self.failures.push(failure);
                None
            }
        }
    }
}

/// Check that the description has some visible text and trim it.
///
/// # Errors
///
/// This function will return a [ValidationFailure::EmptyDescription] if
/// `raw` is empty or only whitespace.
pub fn validate_description(raw: &str) -> Result<String, ValidationFailure> {
    let description = raw.trim();

    if description.is_empty() {
        Err(ValidationFailure::EmptyDescription)
    } else {
        Ok(description.to_owned())
    }
}

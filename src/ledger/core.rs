//! Defines the transaction rows and the running debit/credit totals.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{amount::Amount, validation::ValidationFailure};

// ============================================================================
// MODELS
// ============================================================================

/// Identifies a row within a session. Identifiers are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    /// The raw identifier, e.g. for building URLs.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money left (debit) or entered (credit) the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    Debit,
    /// Money received.
    Credit,
}

impl TransactionKind {
    /// The form value and CSS class for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "debit" => Ok(TransactionKind::Debit),
            "credit" => Ok(TransactionKind::Credit),
            _ => Err(ValidationFailure::MissingType),
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded transaction.
///
/// Rows are created by [LedgerState::insert] and cannot be edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// The ID of the row.
    pub id: RowId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction is a debit or a credit.
    pub kind: TransactionKind,
    /// The amount of money, always positive.
    pub amount: Amount,
}

/// The sum of the amounts of the debit rows and of the credit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerTotals {
    /// The sum of all debit amounts.
    pub debits: Decimal,
    /// The sum of all credit amounts.
    pub credits: Decimal,
}

// ============================================================================
// STATE
// ============================================================================

/// The rows of the ledger, in the order they were entered, and their totals.
///
/// All changes go through [LedgerState::insert] and [LedgerState::remove],
/// which keep each total equal to the sum of the rows of that kind.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    totals: LedgerTotals,
    rows: Vec<TransactionRow>,
    last_id: u64,
}

impl LedgerState {
    /// Create an empty ledger with zero totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that starts from `totals`.
    pub fn with_totals(totals: LedgerTotals) -> Self {
        Self {
            totals,
            ..Self::default()
        }
    }

    /// Record a new transaction at the end of the ledger and add its amount
    /// to the matching total.
    pub fn insert(
        &mut self,
        description: String,
        kind: TransactionKind,
        amount: Amount,
    ) -> TransactionRow {
        self.last_id += 1;

        let row = TransactionRow {
            id: RowId(self.last_id),
            description,
            kind,
            amount,
        };

        *self.total_mut(kind) += amount.value();
        self.rows.push(row.clone());

        tracing::debug!("inserted {kind} row {} for ${amount}", row.id);

        row
    }

    /// Remove the row with `id` and subtract its amount from the matching
    /// total.
    ///
    /// A total that would become negative is set to zero instead. This can
    /// only happen if the totals no longer match the rows.
    ///
    /// Returns the removed row, or `None` if there is no row with `id`, in
    /// which case nothing changes.
    pub fn remove(&mut self, id: RowId) -> Option<TransactionRow> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        let row = self.rows.remove(index);

        let total = self.total_mut(row.kind);
        *total -= row.amount.value();

        if *total < Decimal::ZERO {
            tracing::warn!(
                "{} total went below zero after removing row {}, clamping to zero",
                row.kind,
                row.id
            );
            *total = Decimal::ZERO;
        }

        tracing::debug!("removed {} row {} for ${}", row.kind, row.id, row.amount);

        Some(row)
    }

    /// The current debit and credit totals.
    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    /// The rows in display order.
    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    fn total_mut(&mut self, kind: TransactionKind) -> &mut Decimal {
        match kind {
            TransactionKind::Debit => &mut self.totals.debits,
            TransactionKind::Credit => &mut self.totals.credits,
        }
    }
}

//! The ledger: transaction rows, their totals and the page that displays them.
//!
//! This module contains:
//! - The [LedgerState] model that keeps the totals consistent with the rows
//! - The ledger page and the views for the form, table and totals
//! - Route handlers for submitting the form and deleting rows

mod core;
mod create_endpoint;
mod delete_endpoint;
mod page;
mod view;

pub use core::{LedgerState, LedgerTotals, RowId, TransactionKind, TransactionRow};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_row_endpoint;
pub use page::{LedgerPageState, get_ledger_page};

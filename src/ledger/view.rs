//! Renders the transaction form, the error list, the transaction table and the totals.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
    ledger::{LedgerState, LedgerTotals, TransactionKind, TransactionRow},
    validation::{TransactionForm, ValidationFailure},
};

/// The question the user must confirm before a row is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this entry?";

/// The part of the page that is re-rendered after each submission.
///
/// `form` holds the values to show in the form, which should be the rejected
/// submission, or `None` for an empty form.
pub fn ledger_section_view(
    ledger: &LedgerState,
    failures: &[ValidationFailure],
    form: Option<&TransactionForm>,
) -> Markup {
    html! {
        section id="ledger" class="w-full max-w-3xl space-y-6"
        {
            (transaction_form_view(form))
            (error_list_view(failures))
            (transactions_table_view(ledger.rows()))
            (totals_view(ledger.totals(), false))
        }
    }
}

fn transaction_form_view(form: Option<&TransactionForm>) -> Markup {
    let default_form = TransactionForm::default();
    let form = form.unwrap_or(&default_form);
    let selected = form.type_.parse::<TransactionKind>().ok();

    html! {
        form
            class="frm-transactions w-full space-y-4"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="#ledger"
            hx-swap="outerHTML"
        {
            div
            {
                label for="type_" class=(FORM_LABEL_STYLE) { "Type" }

                select name="type_" id="type_" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected.is_none()] { "Select a type" }

                    @for kind in [TransactionKind::Debit, TransactionKind::Credit] {
                        option value=(kind.as_str()) selected[selected == Some(kind)] { (kind_label(kind)) }
                    }
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=(form.description)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="any"
                        placeholder="0.00"
                        value=(form.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

fn error_list_view(failures: &[ValidationFailure]) -> Markup {
    html! {
        div class="error text-red-600 dark:text-red-400"
        {
            ul class="error-list"
            {
                @for failure in failures {
                    li { (failure.to_string()) }
                }
            }
        }
    }
}

fn transactions_table_view(rows: &[TransactionRow]) -> Markup {
    html! {
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                }
            }

            tbody
            {
                @for row in rows {
                    (transaction_row_view(row))
                }
            }
        }
    }
}

/// A table row with a delete button that asks for confirmation first.
fn transaction_row_view(row: &TransactionRow) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_ROW, row.id);

    html! {
        tr id={ "row-" (row.id.as_u64()) } class={ (TABLE_ROW_STYLE) " " (row.kind.as_str()) }
        {
            td class=(TABLE_CELL_STYLE) { (row.description) }
            td class=(TABLE_CELL_STYLE) { (row.kind.as_str()) }
            td class={ (TABLE_CELL_STYLE) " transaction-value-itm " (row.kind.as_str()) }
            {
                (format_currency(row.amount.value()))
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    class={ "delete " (BUTTON_DELETE_STYLE) }
                    hx-delete=(delete_url)
                    hx-confirm=(DELETE_CONFIRMATION)
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                {
                    "Delete"
                }
            }
        }
    }
}

/// The debit and credit totals.
///
/// Set `out_of_band` when the totals are sent alongside another swap.
pub fn totals_view(totals: LedgerTotals, out_of_band: bool) -> Markup {
    html! {
        div
            id="totals"
            class="flex justify-between w-full font-semibold"
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            p { "Total debits: " span class="debits" { (format_currency(totals.debits)) } }
            p { "Total credits: " span class="credits" { (format_currency(totals.credits)) } }
        }
    }
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Debit => "Debit",
        TransactionKind::Credit => "Credit",
    }
}

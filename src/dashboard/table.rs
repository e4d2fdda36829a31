//! The transactions table.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, format_price},
    transaction::Transaction,
};

/// The HTML element ID of the table container, used as the htmx target for searches.
pub(super) const TRANSACTIONS_TABLE_ID: &str = "transactions-table";

const COLUMN_COUNT: u8 = 3;

/// Renders every transaction in `transactions` as a table row.
///
/// If `transactions` is empty, a single row spanning every column says so.
pub(super) fn transactions_table(transactions: &[Transaction]) -> Markup {
    html!(
        div id=(TRANSACTIONS_TABLE_ID)
        {
            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" { "Title" }
                        th scope="col" { "Description" }
                        th scope="col" { "Price ($)" }
                    }
                }

                tbody
                {
                    @if transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) colspan=(COLUMN_COUNT) { "No transactions found" }
                        }
                    } @else {
                        @for transaction in transactions {
                            tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                            {
                                td class=(TABLE_CELL_STYLE) { (transaction.title) }
                                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                                td class=(TABLE_CELL_STYLE) { (format_price(transaction.price)) }
                            }
                        }
                    }
                }
            }
        }
    )
}

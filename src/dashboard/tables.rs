//! The transactions table.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    dashboard::view_model::TransactionView,
    html::{CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    transaction::TransactionType,
};

/// Longer titles are truncated, with the full title shown in a tooltip.
const MAX_TITLE_GRAPHEMES: usize = 60;

fn amount_class(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Outcome => "text-red-700 dark:text-red-300",
    }
}

/// Renders a table with one row per transaction, in the order given.
pub(super) fn transactions_table(transactions: &[TransactionView]) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Preço" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &TransactionView) -> Markup {
    let (title, tooltip) = format_title(&transaction.title);
    let kind = transaction.kind.as_str();

    html! {
        tr
            class=(TABLE_ROW_STYLE)
            data-transaction-id=(transaction.id)
            data-type=(kind)
        {
            td class={ (TABLE_CELL_STYLE) " title font-medium text-gray-900 dark:text-white" } title=[tooltip]
            {
                (title)
            }
            td class={ (TABLE_CELL_STYLE) " amount " (kind) " whitespace-nowrap " (amount_class(transaction.kind)) }
            {
                (transaction.formatted_value)
            }
            td class={ (TABLE_CELL_STYLE) " category" }
            {
                @if let Some(category) = &transaction.category {
                    span class=(CATEGORY_BADGE_STYLE) { (category.title) }
                } @else {
                    span class="text-gray-400 dark:text-gray-500" { (transaction.category_label()) }
                }
            }
            td class={ (TABLE_CELL_STYLE) " date whitespace-nowrap" }
            {
                (transaction.formatted_date)
            }
        }
    }
}

fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();
        (truncated + "...", Some(title))
    }
}

//! Summary cards for income, outcome and the total balance.

use maud::{Markup, html};

use crate::dashboard::summary::FormattedBalance;

/// Shown on the cards until the transactions have loaded.
const AMOUNT_PLACEHOLDER: &str = "-";

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-md text-gray-900 dark:text-white";
const TOTAL_CARD_STYLE: &str = "bg-orange-400 dark:bg-orange-500 rounded-lg p-6 \
    shadow-md text-white";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    fn label(self) -> &'static str {
        match self {
            CardKind::Income => "Entradas",
            CardKind::Outcome => "Saídas",
            CardKind::Total => "Total",
        }
    }

    /// Used for the `data-testid` attribute, e.g. "balance-income".
    fn name(self) -> &'static str {
        match self {
            CardKind::Income => "income",
            CardKind::Outcome => "outcome",
            CardKind::Total => "total",
        }
    }

    fn icon(self) -> Markup {
        let (symbol, style) = match self {
            CardKind::Income => ("↑", "text-green-600 dark:text-green-400"),
            CardKind::Outcome => ("↓", "text-red-600 dark:text-red-400"),
            CardKind::Total => ("$", "text-white"),
        };

        html!( span aria-hidden="true" class={ "text-2xl font-bold " (style) } { (symbol) } )
    }
}

/// Renders the income, outcome and total cards.
///
/// `balance` is `None` while the transactions are loading or if they could
/// not be loaded, in which case each card shows a placeholder.
pub(super) fn balance_cards_view(balance: Option<&FormattedBalance>) -> Markup {
    let (income, outcome, total) = match balance {
        Some(balance) => (
            balance.income.as_str(),
            balance.outcome.as_str(),
            balance.total.as_str(),
        ),
        None => (AMOUNT_PLACEHOLDER, AMOUNT_PLACEHOLDER, AMOUNT_PLACEHOLDER),
    };

    html! {
        section id="balance" class="w-full grid grid-cols-1 md:grid-cols-3 gap-4 mb-8"
        {
            (balance_card(CardKind::Income, income))
            (balance_card(CardKind::Outcome, outcome))
            (balance_card(CardKind::Total, total))
        }
    }
}

fn balance_card(kind: CardKind, amount: &str) -> Markup {
    let style = if kind == CardKind::Total {
        TOTAL_CARD_STYLE
    } else {
        CARD_STYLE
    };

    html! {
        div class=(style)
        {
            header class="flex justify-between items-center mb-4"
            {
                p class="text-base" { (kind.label()) }
                (kind.icon())
            }

            h1
                data-testid=(format!("balance-{}", kind.name()))
                class="text-3xl font-semibold tabular-nums whitespace-nowrap"
            {
                (amount)
            }
        }
    }
}

//! Totals shown on the summary cards.

use crate::{
    Error,
    currency::{CurrencyLocale, format_currency},
    transaction::{Transaction, TransactionType},
};

/// Income, outcome and their difference over a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Balance {
    /// The sum of the values of income transactions.
    pub income: f64,
    /// The sum of the values of outcome transactions.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

impl Balance {
    /// Sum `transactions` by type.
    ///
    /// Values are taken as given by the API, which records outcome as a
    /// positive amount with the `outcome` type.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (income, outcome) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, outcome), transaction| {
                    match transaction.kind {
                        TransactionType::Income => (income + transaction.value, outcome),
                        TransactionType::Outcome => (income, outcome + transaction.value),
                    }
                });

        Self {
            income,
            outcome,
            total: income - outcome,
        }
    }

    /// Format each amount with `locale`.
    ///
    /// # Errors
    /// Returns [Error::NonFiniteAmount] if any sum is not finite.
    pub fn format(&self, locale: &CurrencyLocale) -> Result<FormattedBalance, Error> {
        Ok(FormattedBalance {
            income: format_currency(self.income, locale)?,
            outcome: format_currency(self.outcome, locale)?,
            total: format_currency(self.total, locale)?,
        })
    }
}

/// A [Balance] with each amount formatted as a currency string.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBalance {
    /// The formatted income sum.
    pub income: String,
    /// The formatted outcome sum.
    pub outcome: String,
    /// The formatted total.
    pub total: String,
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, currency::CurrencyLocale, test_utils::transaction_fixture,
        transaction::TransactionType,
    };

    use super::{Balance, FormattedBalance};

    #[test]
    fn empty_list_has_zero_balance() {
        assert_eq!(Balance::from_transactions(&[]), Balance::default());
    }

    #[test]
    fn sums_by_type() {
        let transactions = vec![
            transaction_fixture("1", "Salary", 4000.0, TransactionType::Income, None),
            transaction_fixture("2", "Freelance", 1000.0, TransactionType::Income, None),
            transaction_fixture("3", "Rent", 800.0, TransactionType::Outcome, None),
            transaction_fixture("4", "Groceries", 200.0, TransactionType::Outcome, None),
        ];

        let balance = Balance::from_transactions(&transactions);

        assert_eq!(
            balance,
            Balance {
                income: 5000.0,
                outcome: 1000.0,
                total: 4000.0,
            }
        );
    }

    #[test]
    fn total_is_negative_when_outcome_exceeds_income() {
        let transactions = vec![
            transaction_fixture("1", "Salary", 100.0, TransactionType::Income, None),
            transaction_fixture("2", "Rent", 150.0, TransactionType::Outcome, None),
        ];

        let balance = Balance::from_transactions(&transactions);

        assert_eq!(balance.total, -50.0);
    }

    #[test]
    fn formats_amounts() {
        let balance = Balance {
            income: 5000.0,
            outcome: 1000.0,
            total: 4000.0,
        };

        let formatted = balance.format(&CurrencyLocale::brazilian_real()).unwrap();

        assert_eq!(
            formatted,
            FormattedBalance {
                income: "R$ 5.000,00".to_owned(),
                outcome: "R$ 1.000,00".to_owned(),
                total: "R$ 4.000,00".to_owned(),
            }
        );
    }

    #[test]
    fn formatting_non_finite_sum_fails() {
        let balance = Balance {
            income: f64::INFINITY,
            outcome: 0.0,
            total: f64::INFINITY,
        };

        let result = balance.format(&CurrencyLocale::brazilian_real());

        assert!(matches!(result, Err(Error::NonFiniteAmount(_))));
    }
}

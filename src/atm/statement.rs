use super::{Decimal, Transaction};

/// Number of most recent transactions shown on a statement.
pub const STATEMENT_LENGTH: usize = 5;

const RULE_WIDTH: usize = 40;

/// Format a money amount as `$` plus exactly two decimal places.
pub(crate) fn format_currency(amount: Decimal) -> String {
    // Decimal's precision formatting truncates, so round first.
    format!("${:.2}", amount.round_dp(2))
}

/// Read-only view of the current balance and the last few transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statement<'a> {
    balance: Decimal,
    recent: &'a [Transaction],
    total_count: usize,
}

impl<'a> Statement<'a> {
    pub(super) fn new(balance: Decimal, transactions: &'a [Transaction]) -> Self {
        let start = transactions.len().saturating_sub(STATEMENT_LENGTH);
        Self {
            balance,
            recent: &transactions[start..],
            total_count: transactions.len(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The most recent transactions in chronological order
    pub fn recent(&self) -> &'a [Transaction] {
        self.recent
    }

    /// Number of transactions in the full log
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_truncated(&self) -> bool {
        self.total_count > self.recent.len()
    }
}

impl std::fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let double_rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{double_rule}")?;
        writeln!(f, "           ACCOUNT STATEMENT")?;
        writeln!(f, "{double_rule}")?;
        writeln!(f, "Current Balance: {}", format_currency(self.balance))?;
        writeln!(f)?;
        writeln!(f, "{:<10}{:<15}{:<15}", "Type", "Amount", "Note")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for tx in self.recent {
            writeln!(
                f,
                "{:<10}{:<15}{:<15}",
                tx.kind(),
                format_currency(tx.amount()),
                tx.note()
            )?;
        }
        if self.is_truncated() {
            writeln!(f)?;
            writeln!(f, "Showing last {STATEMENT_LENGTH} transactions.")?;
        }
        write!(f, "{double_rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atm::Amount;
    use rust_decimal_macros::dec;

    fn deposits(count: u32) -> Vec<Transaction> {
        (1..=count)
            .map(|i| Transaction::deposit(Amount::try_from(Decimal::from(i)).unwrap(), "ATM Deposit"))
            .collect()
    }

    #[test]
    fn test_currency_pads_to_two_places() {
        assert_eq!(format_currency(dec!(5000)), "$5000.00");
        assert_eq!(format_currency(dec!(12.5)), "$12.50");
    }

    #[test]
    fn test_currency_rounds_extra_places() {
        assert_eq!(format_currency(dec!(0.129)), "$0.13");
    }

    #[test]
    fn test_short_log_is_shown_in_full() {
        let log = deposits(3);
        let statement = Statement::new(dec!(6), &log);

        assert_eq!(statement.recent().len(), 3);
        assert!(!statement.is_truncated());
    }

    #[test]
    fn test_long_log_keeps_last_five_in_order() {
        let log = deposits(8);
        let statement = Statement::new(dec!(36), &log);

        let amounts: Vec<Decimal> = statement.recent().iter().map(Transaction::amount).collect();
        assert_eq!(amounts, [dec!(4), dec!(5), dec!(6), dec!(7), dec!(8)]);
        assert_eq!(statement.total_count(), 8);
        assert!(statement.is_truncated());
    }

    #[test]
    fn test_empty_log() {
        let statement = Statement::new(Decimal::ZERO, &[]);
        assert!(statement.recent().is_empty());
        assert!(statement.to_string().contains("Current Balance: $0.00"));
    }

    #[test]
    fn test_rendered_rows_use_fixed_columns() {
        let log = deposits(1);
        let rendered = Statement::new(dec!(1), &log).to_string();

        assert!(rendered.contains("Type      Amount         Note           \n"));
        assert!(rendered.contains("Deposit   $1.00          ATM Deposit    \n"));
        assert!(!rendered.contains("Showing last"));
    }

    #[test]
    fn test_truncated_statement_has_footer() {
        let log = deposits(6);
        let rendered = Statement::new(dec!(21), &log).to_string();

        assert!(rendered.contains("Showing last 5 transactions."));
        assert!(!rendered.contains("Deposit   $1.00 "));
    }
}

use super::statement::Statement;
use super::transaction::{Transaction, INITIAL_DEPOSIT_NOTE};
use super::{Amount, Decimal};

/// The single account: current balance plus its append-only transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Open the account. A positive opening balance is recorded as an initial deposit
    /// so the log always sums to the balance.
    pub(super) fn open(opening_balance: Decimal) -> Self {
        debug_assert!(
            opening_balance >= Decimal::ZERO,
            "opening balance must not be negative"
        );
        let mut account = Self {
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        };
        if let Ok(amount) = Amount::try_from(opening_balance) {
            account.deposit(amount, INITIAL_DEPOSIT_NOTE);
        }
        account
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns every transaction, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the recent-transactions view of this account
    pub fn statement(&self) -> Statement<'_> {
        Statement::new(self.balance, &self.transactions)
    }

    /// Credit the account and log the deposit.
    /// Caller must ensure the new balance does not overflow.
    pub(super) fn deposit(&mut self, amount: Amount, note: &str) {
        self.balance += amount.value();
        self.transactions.push(Transaction::deposit(amount, note));
        #[cfg(debug_assertions)]
        self.assert_invariant();
    }

    /// Debit the account and log the withdrawal.
    /// Caller must ensure sufficient funds.
    ///
    /// # Panics (debug only)
    /// Panics if the withdrawal exceeds the balance.
    pub(super) fn withdraw(&mut self, amount: Amount, note: &str) {
        debug_assert!(
            amount.value() <= self.balance,
            "withdraw called with insufficient funds"
        );
        self.balance -= amount.value();
        self.transactions.push(Transaction::withdraw(amount, note));
        #[cfg(debug_assertions)]
        self.assert_invariant();
    }

    /// Assert the ledger invariant:
    /// balance = sum(deposits) - sum(withdrawals) and balance >= 0
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        let logged: Decimal = self.transactions.iter().map(Transaction::signed_amount).sum();
        debug_assert_eq!(
            self.balance, logged,
            "Invariant violated: balance ({}) != logged sum ({})",
            self.balance, logged
        );
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: negative balance ({})",
            self.balance
        );
    }
}

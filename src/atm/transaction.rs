use super::{Amount, Decimal};

pub(crate) const INITIAL_DEPOSIT_NOTE: &str = "Initial Deposit";
pub(crate) const ATM_DEPOSIT_NOTE: &str = "ATM Deposit";
pub(crate) const ATM_WITHDRAWAL_NOTE: &str = "ATM Withdrawal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so statement columns can apply width and alignment
        match self {
            TransactionKind::Deposit => f.pad("Deposit"),
            TransactionKind::Withdraw => f.pad("Withdraw"),
        }
    }
}

/// A single entry in the account's append-only transaction log.
///
/// Amounts are always positive; the kind decides the direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    note: String,
}

impl Transaction {
    pub(crate) fn deposit(amount: Amount, note: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount: amount.value(),
            note: note.into(),
        }
    }

    pub(crate) fn withdraw(amount: Amount, note: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Withdraw,
            amount: amount.value(),
            note: note.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Effect of this transaction on the balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdraw => -self.amount,
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] amount={} note={:?}",
            self.kind, self.amount, self.note
        )
    }
}

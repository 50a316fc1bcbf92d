use std::str::FromStr;

use crate::atm::{error::AmountError, Decimal};

/// A validated, strictly positive money amount entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value > Decimal::ZERO {
            Ok(Amount(value))
        } else {
            Err(AmountError::NotPositive(value))
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses plain decimal notation, ignoring surrounding whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|_| AmountError::NotANumber(trimmed.to_owned()))?;
        Amount::try_from(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

use std::str::FromStr;

use super::error::InvalidPin;

pub(crate) const PIN_LENGTH: usize = 4;

/// A four-digit PIN. Only constructed through `FromStr`, so the format always holds.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    /// Exact comparison against a candidate, no trimming or coercion.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pin {
    type Err = InvalidPin;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.len() == PIN_LENGTH && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Pin(input.to_owned()))
        } else {
            Err(InvalidPin)
        }
    }
}

// Keep PINs out of debug output and logs.
impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// The single username/PIN pair the ATM accepts.
#[derive(Debug, Clone)]
pub struct Credential {
    username: String,
    pin: Pin,
}

impl Credential {
    pub(crate) fn new(username: String, pin: Pin) -> Self {
        Self { username, pin }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    /// Case-sensitive exact comparison.
    pub fn matches_username(&self, candidate: &str) -> bool {
        self.username == candidate
    }

    pub(crate) fn replace_pin(&mut self, pin: Pin) {
        self.pin = pin;
    }
}

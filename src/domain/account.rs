use crate::{
    common::{money::Money, rate::Rate},
    domain::ledger::Ledger,
};

/// Numeric login credential, compared by exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(u32);

impl Pin {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for Pin {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Pin)
    }
}

/// Informational tier; no ledger rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Basic,
    Standard,
    Premium,
}

#[derive(Debug, Clone)]
pub struct Account {
    pub owner: String,
    /// Login handle, filled in when the registry is built.
    pub handle: String,
    pub ledger: Ledger,
    pub interest_rate: Rate,
    pub pin: Pin,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(owner: impl Into<String>, pin: Pin, interest_rate: Rate, kind: AccountKind) -> Self {
        Self {
            owner: owner.into(),
            handle: String::new(),
            ledger: Ledger::new(),
            interest_rate,
            pin,
            kind,
        }
    }

    pub fn with_movements(mut self, movements: Vec<Money>) -> Self {
        self.ledger = Ledger::with_movements(movements);
        self
    }

    pub fn balance(&self) -> Money {
        self.ledger.balance()
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }

    pub fn qualifying_interest(&self) -> Money {
        self.ledger.qualifying_interest(self.interest_rate)
    }
}

/// Lowercase initials of each space-separated word, in order.
pub fn derive_handle(owner: &str) -> String {
    owner
        .to_lowercase()
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

use crate::{
    common::error::{BankError, RegistryError},
    domain::{
        account::Account,
        projection::{Projection, SortOrder},
        registry::Registry,
        seed,
        session::Session,
    },
};

/// Application state: the open accounts, the session and the display sort.
#[derive(Debug, Default)]
pub struct Bank {
    pub registry: Registry,
    pub session: Session,
    pub sort: SortOrder,
}

impl Bank {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            session: Session::Anonymous,
            sort: SortOrder::Original,
        }
    }

    /// Bank loaded with the demo accounts.
    pub fn seeded() -> Result<Self, RegistryError> {
        Ok(Self::new(Registry::new(seed::accounts())?))
    }

    /// The signed-in account, if it still exists.
    pub fn current(&self) -> Option<&Account> {
        self.session.handle().and_then(|h| self.registry.find(h))
    }

    pub(crate) fn require_current(&self) -> Result<&Account, BankError> {
        self.current().ok_or(BankError::NoActiveSession)
    }

    /// Registry position of the signed-in account.
    pub(crate) fn current_position(&self) -> Result<usize, BankError> {
        self.session
            .handle()
            .and_then(|h| self.registry.position(h))
            .ok_or(BankError::NoActiveSession)
    }

    pub fn projection(&self) -> Option<Projection> {
        self.current().map(|acc| Projection::of(acc, self.sort))
    }

    pub(crate) fn require_projection(&self) -> Result<Projection, BankError> {
        self.projection().ok_or(BankError::NoActiveSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_bank_starts_anonymous() {
        let bank = Bank::seeded().unwrap();
        assert_eq!(bank.registry.len(), 4);
        assert!(bank.current().is_none());
        assert!(bank.projection().is_none());
        assert_eq!(bank.sort, SortOrder::Original);
    }

    #[test]
    fn session_naming_a_removed_account_is_not_current() {
        let mut bank = Bank::seeded().unwrap();
        bank.session = Session::Authenticated {
            handle: "js".into(),
        };
        assert_eq!(bank.current().map(|a| a.owner.as_str()), Some("Jonas Schmedtmann"));

        bank.registry.remove("js");
        assert!(bank.current().is_none());
        assert_eq!(bank.require_current().unwrap_err(), BankError::NoActiveSession);
        assert_eq!(bank.current_position(), Err(BankError::NoActiveSession));
    }
}

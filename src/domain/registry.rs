use crate::{
    common::{error::RegistryError, money::Money},
    domain::account::{Account, derive_handle},
};

/// The set of open accounts, kept in seed order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    accounts: Vec<Account>,
}

impl Registry {
    /// Derives every handle and rejects the set if two owners share one.
    pub fn new(accounts: Vec<Account>) -> Result<Self, RegistryError> {
        let mut registry = Self { accounts };
        registry.derive_handles();
        registry.check_unique_handles()?;
        Ok(registry)
    }

    pub fn derive_handles(&mut self) {
        for acc in &mut self.accounts {
            acc.handle = derive_handle(&acc.owner);
        }
    }

    fn check_unique_handles(&self) -> Result<(), RegistryError> {
        for (i, acc) in self.accounts.iter().enumerate() {
            if let Some(other) = self.accounts[..i].iter().find(|a| a.handle == acc.handle) {
                return Err(RegistryError::DuplicateHandle {
                    handle: acc.handle.clone(),
                    first: other.owner.clone(),
                    second: acc.owner.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn position(&self, handle: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.handle == handle)
    }

    pub fn find(&self, handle: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.handle == handle)
    }

    pub fn find_mut(&mut self, handle: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.handle == handle)
    }

    /// Appends to the ledger at `index`, a position just returned by
    /// [`Registry::position`] with no removal in between.
    pub(crate) fn record_at(&mut self, index: usize, amount: Money) {
        self.accounts[index].ledger.record(amount);
    }

    pub fn remove(&mut self, handle: &str) -> Option<Account> {
        let index = self.position(handle)?;
        Some(self.accounts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::rate::Rate,
        domain::account::{AccountKind, Pin},
    };

    fn account(owner: &str, pin: u32) -> Account {
        Account::new(owner, Pin::new(pin), Rate::from_basis_points(100), AccountKind::Basic)
    }

    #[test]
    fn new_derives_handles_for_every_account() {
        let reg = Registry::new(vec![account("Jonas Schmedtmann", 1), account("Sarah Smith", 2)])
            .unwrap();
        let handles: Vec<&str> = reg.accounts().iter().map(|a| a.handle.as_str()).collect();
        assert_eq!(handles, vec!["js", "ss"]);
    }

    #[test]
    fn derive_handles_is_idempotent() {
        let mut reg = Registry::new(vec![account("Sarah Smith", 4444)]).unwrap();
        reg.derive_handles();
        reg.derive_handles();
        assert_eq!(reg.find("ss").map(|a| a.pin), Some(Pin::new(4444)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn new_rejects_colliding_handles() {
        let err = Registry::new(vec![account("Sarah Smith", 1), account("Sam Stone", 2)])
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateHandle {
                handle: "ss".into(),
                first: "Sarah Smith".into(),
                second: "Sam Stone".into(),
            }
        );
    }

    #[test]
    fn find_misses_unknown_handle() {
        let reg = Registry::new(vec![account("Jonas Schmedtmann", 1)]).unwrap();
        assert!(reg.find("zz").is_none());
        assert!(reg.find("").is_none());
    }

    #[test]
    fn remove_takes_account_out_of_lookup() {
        let mut reg =
            Registry::new(vec![account("Jonas Schmedtmann", 1), account("Jessica Davis", 2)])
                .unwrap();

        let removed = reg.remove("jd").expect("jd exists");
        assert_eq!(removed.owner, "Jessica Davis");
        assert!(reg.find("jd").is_none());
        assert_eq!(reg.len(), 1);

        assert!(reg.remove("jd").is_none());
    }
}

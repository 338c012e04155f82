use crate::{
    common::{
        error::{BankError, TransferRejection},
        money::Money,
    },
    domain::{bank::Bank, projection::Projection, registry::Registry},
};

/// Moves `amount` from the signed-in account to `to`.
///
/// Every precondition is checked before the first write, so a rejected
/// transfer never leaves one side debited without the other credited.
pub fn handle(bank: &mut Bank, to: &str, amount: Money) -> Result<Projection, BankError> {
    let sender = bank.current_position()?;

    let receiver = match check(&bank.registry, sender, to, amount) {
        Ok(receiver) => receiver,
        Err(reason) => {
            let from = &bank.registry.accounts()[sender].handle;
            tracing::warn!(from = %from, to, %amount, %reason, "transfer rejected");
            return Err(BankError::InvalidTransfer(reason));
        }
    };

    bank.registry.record_at(sender, -amount);
    bank.registry.record_at(receiver, amount);
    tracing::info!(from = %bank.registry.accounts()[sender].handle, to, %amount, "transfer applied");

    bank.require_projection()
}

/// Validates the transfer and returns the receiver's registry position.
fn check(
    registry: &Registry,
    sender: usize,
    to: &str,
    amount: Money,
) -> Result<usize, TransferRejection> {
    if !amount.is_positive() {
        return Err(TransferRejection::NonPositiveAmount);
    }
    let receiver = registry
        .position(to)
        .ok_or(TransferRejection::UnknownReceiver)?;
    let accounts = registry.accounts();
    if accounts[sender].balance() < amount {
        return Err(TransferRejection::InsufficientFunds);
    }
    if receiver == sender {
        return Err(TransferRejection::SelfTransfer);
    }
    if !accounts[receiver].ledger.accepts(amount) {
        return Err(TransferRejection::BalanceOverflow);
    }
    Ok(receiver)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{domain::account::Pin, worker::handlers::login};

    fn signed_in(handle: &str, pin: u32) -> Bank {
        let mut bank = Bank::seeded().unwrap();
        login::handle(&mut bank, handle, Pin::new(pin)).unwrap();
        bank
    }

    fn balance_of(bank: &Bank, handle: &str) -> Money {
        bank.registry.find(handle).unwrap().balance()
    }

    fn movements_of(bank: &Bank, handle: &str) -> Vec<Money> {
        bank.registry.find(handle).unwrap().ledger.movements().to_vec()
    }

    #[test]
    fn transfer_debits_sender_then_credits_receiver() {
        let mut bank = signed_in("js", 1111);

        let p = handle(&mut bank, "jd", Money::from_units(100)).unwrap();

        assert_eq!(p.balance, Money::from_units(3740));
        assert_eq!(movements_of(&bank, "js").last(), Some(&Money::from_units(-100)));
        assert_eq!(movements_of(&bank, "jd").last(), Some(&Money::from_units(100)));
        assert_eq!(balance_of(&bank, "jd"), Money::from_units(11820));
    }

    #[test]
    fn transfer_of_entire_balance_is_allowed() {
        let mut bank = signed_in("ss", 4444);

        let p = handle(&mut bank, "js", Money::from_units(2270)).unwrap();

        assert_eq!(p.balance, Money::zero());
    }

    fn assert_rejected(bank: &mut Bank, to: &str, amount: Money, reason: TransferRejection) {
        let js = movements_of(bank, "js");
        let jd = movements_of(bank, "jd");

        let err = handle(bank, to, amount).unwrap_err();

        assert_eq!(err, BankError::InvalidTransfer(reason));
        assert_eq!(movements_of(bank, "js"), js);
        assert_eq!(movements_of(bank, "jd"), jd);
    }

    #[test]
    fn rejects_non_positive_amount() {
        let mut bank = signed_in("js", 1111);
        assert_rejected(&mut bank, "jd", Money::zero(), TransferRejection::NonPositiveAmount);
        assert_rejected(
            &mut bank,
            "jd",
            Money::from_units(-5),
            TransferRejection::NonPositiveAmount,
        );
    }

    #[test]
    fn rejects_unknown_receiver() {
        let mut bank = signed_in("js", 1111);
        assert_rejected(&mut bank, "zz", Money::from_units(5), TransferRejection::UnknownReceiver);
    }

    #[test]
    fn rejects_overdraft() {
        let mut bank = signed_in("js", 1111);
        assert_rejected(
            &mut bank,
            "jd",
            Money::from_units(3841),
            TransferRejection::InsufficientFunds,
        );
    }

    #[test]
    fn rejects_self_transfer() {
        let mut bank = signed_in("js", 1111);
        assert_rejected(&mut bank, "js", Money::from_units(5), TransferRejection::SelfTransfer);
    }

    #[test]
    fn rejects_transfer_that_would_overflow_receiver() {
        let mut bank = signed_in("js", 1111);
        bank.registry
            .find_mut("js")
            .unwrap()
            .ledger
            .record(Money::from_units(100_000_000_000_000));
        bank.registry
            .find_mut("jd")
            .unwrap()
            .ledger
            .record(Money::from_units(900_000_000_000_000));

        assert_rejected(
            &mut bank,
            "jd",
            Money::from_units(50_000_000_000_000),
            TransferRejection::BalanceOverflow,
        );
        assert!(handle(&mut bank, "jd", Money::from_units(1_000)).is_ok());
    }

    #[test]
    fn requires_session() {
        let mut bank = Bank::seeded().unwrap();
        assert_eq!(
            handle(&mut bank, "jd", Money::from_units(5)).unwrap_err(),
            BankError::NoActiveSession
        );
        assert_eq!(balance_of(&bank, "jd"), Money::from_units(11720));
    }

    proptest! {
        #[test]
        fn transfers_conserve_combined_balance(
            amounts in prop::collection::vec(-500i64..5_000i64, 1..20)
        ) {
            let mut bank = signed_in("js", 1111);
            let total_before = balance_of(&bank, "js") + balance_of(&bank, "jd");

            for units in amounts {
                let _ = handle(&mut bank, "jd", Money::from_units(units));
                prop_assert_eq!(balance_of(&bank, "js") + balance_of(&bank, "jd"), total_before);
                prop_assert!(!balance_of(&bank, "js").is_negative());
            }
        }
    }
}

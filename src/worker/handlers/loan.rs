use crate::{
    common::{error::BankError, money::Money},
    domain::{bank::Bank, projection::Projection},
};

/// Credits a loan when some past movement is at least 10 % of `amount` and
/// the new balance still fits.
pub fn handle(bank: &mut Bank, amount: Money) -> Result<Projection, BankError> {
    let index = bank.current_position()?;
    let account = &bank.registry.accounts()[index];

    if !amount.is_positive()
        || !account.ledger.supports_loan(amount)
        || !account.ledger.accepts(amount)
    {
        tracing::warn!(handle = %account.handle, %amount, "loan rejected");
        return Err(BankError::LoanRejected);
    }

    let handle = account.handle.clone();
    bank.registry.record_at(index, amount);
    tracing::info!(handle = %handle, %amount, "loan granted");

    bank.require_projection()
}

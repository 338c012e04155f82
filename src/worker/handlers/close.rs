use crate::{
    common::error::BankError,
    domain::{account::Pin, bank::Bank, session::Session},
};

/// Deletes the signed-in account after it re-confirms its handle and pin,
/// then signs out.
pub fn handle(bank: &mut Bank, handle: &str, pin: Pin) -> Result<(), BankError> {
    let account = bank.require_current()?;

    if account.handle != handle || account.pin != pin {
        tracing::warn!(handle = %account.handle, confirm = handle, "close confirmation mismatch");
        return Err(BankError::InvalidConfirmation);
    }

    bank.registry.remove(handle);
    bank.session = Session::Anonymous;
    tracing::info!(handle, "account closed");
    Ok(())
}

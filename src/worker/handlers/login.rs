use crate::{
    common::error::BankError,
    domain::{
        account::Pin,
        bank::Bank,
        projection::{Projection, SortOrder},
        session::Session,
    },
};

/// Signs in when the handle exists and the pin matches exactly. A failed
/// attempt leaves whatever session was active untouched.
pub fn handle(bank: &mut Bank, handle: &str, pin: Pin) -> Result<Projection, BankError> {
    let matched = bank
        .registry
        .find(handle)
        .is_some_and(|acc| acc.pin == pin);

    if !matched {
        tracing::warn!(handle, "login rejected");
        return Err(BankError::InvalidCredentials);
    }

    bank.session = Session::Authenticated {
        handle: handle.to_string(),
    };
    bank.sort = SortOrder::Original;
    tracing::info!(handle, "login succeeded");

    bank.require_projection()
}

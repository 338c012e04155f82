use crate::{
    common::error::BankError,
    domain::{bank::Bank, projection::Projection},
};

/// Flips the display order of the movement list.
pub fn handle(bank: &mut Bank) -> Result<Projection, BankError> {
    bank.require_current()?;
    bank.sort = bank.sort.toggled();
    tracing::debug!(sort = ?bank.sort, "sort toggled");
    bank.require_projection()
}
